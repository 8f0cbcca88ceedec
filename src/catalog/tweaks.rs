//! Built-in system tweaks.

use std::borrow::Cow;

use super::Tweak;
use crate::selection::TweakValue;
use crate::types::{ImpactLevel, TweakCategory, ValueType};

const GLOBAL: &str = "NSGlobalDomain";
const FINDER: &str = "com.apple.finder";
const DOCK: &str = "com.apple.dock";
const SCREENCAPTURE: &str = "com.apple.screencapture";

pub(crate) fn builtin() -> Vec<Tweak> {
    vec![
        // Finder
        Tweak {
            description: "Show hidden files and folders in Finder",
            relaunch: Some("Finder"),
            ..Tweak::defaults_bool(
                "show-hidden-files",
                "Show Hidden Files",
                TweakCategory::Finder,
                FINDER,
                "AppleShowAllFiles",
                true,
            )
        },
        Tweak {
            description: "Show all file extensions in Finder",
            relaunch: Some("Finder"),
            ..Tweak::defaults_bool(
                "show-file-extensions",
                "Show File Extensions",
                TweakCategory::Finder,
                GLOBAL,
                "AppleShowAllExtensions",
                true,
            )
        },
        Tweak {
            description: "Show the path bar at the bottom of Finder windows",
            relaunch: Some("Finder"),
            ..Tweak::defaults_bool(
                "show-path-bar",
                "Show Path Bar",
                TweakCategory::Finder,
                FINDER,
                "ShowPathbar",
                true,
            )
        },
        Tweak {
            description: "Show the full POSIX path in the Finder window title",
            relaunch: Some("Finder"),
            ..Tweak::defaults_bool(
                "show-full-path-title",
                "Show Full Path in Title",
                TweakCategory::Finder,
                FINDER,
                "_FXShowPosixPathInTitle",
                true,
            )
        },
        Tweak {
            description: "Unhide the ~/Library folder",
            ..Tweak::toggle(
                "show-library-folder",
                "Show Library Folder",
                TweakCategory::Finder,
                "chflags nohidden \"$HOME/Library\"",
                "chflags hidden \"$HOME/Library\"",
            )
        },
        Tweak {
            description: "Expand save panels by default",
            ..Tweak::defaults_bool(
                "expanded-save-panels",
                "Expanded Save Panels",
                TweakCategory::Finder,
                GLOBAL,
                "NSNavPanelExpandedStateForSaveMode",
                true,
            )
        },
        // Dock
        Tweak {
            description: "Automatically hide and show the Dock",
            relaunch: Some("Dock"),
            ..Tweak::defaults_bool(
                "auto-hide-dock",
                "Auto-Hide Dock",
                TweakCategory::Dock,
                DOCK,
                "autohide",
                true,
            )
        },
        Tweak {
            description: "Disable opening applications animation in Dock",
            relaunch: Some("Dock"),
            ..Tweak::defaults_off(
                "disable-dock-animation",
                "Disable Dock Animation",
                TweakCategory::Dock,
                DOCK,
                "launchanim",
            )
        },
        Tweak {
            description: "Minimize windows into their application icon",
            relaunch: Some("Dock"),
            ..Tweak::defaults_bool(
                "minimize-to-dock",
                "Minimize to Dock",
                TweakCategory::Dock,
                DOCK,
                "minimize-to-application",
                true,
            )
        },
        Tweak {
            description: "Set the Dock icon size in pixels",
            value_type: ValueType::Integer,
            default_value: TweakValue::Int(48),
            relaunch: Some("Dock"),
            ..Tweak::defaults_bool(
                "dock-icon-size",
                "Dock Icon Size",
                TweakCategory::Dock,
                DOCK,
                "tilesize",
                false,
            )
        },
        Tweak {
            description: "Seconds before the hidden Dock appears",
            value_type: ValueType::Float,
            default_value: TweakValue::Float(0.0),
            relaunch: Some("Dock"),
            ..Tweak::defaults_bool(
                "dock-autohide-delay",
                "Dock Auto-Hide Delay",
                TweakCategory::Dock,
                DOCK,
                "autohide-delay",
                false,
            )
        },
        Tweak {
            description: "Disable Dashboard completely",
            relaunch: Some("Dock"),
            min_macos: "10.15",
            ..Tweak::defaults_bool(
                "disable-dashboard",
                "Disable Dashboard",
                TweakCategory::Dock,
                "com.apple.dashboard",
                "mcx-disabled",
                true,
            )
        },
        // Appearance
        Tweak {
            description: "Use the dark menu bar and Dock",
            value_type: ValueType::String,
            default_value: TweakValue::Text(Cow::Borrowed("Dark")),
            relaunch: Some("SystemUIServer"),
            ..Tweak::defaults_bool(
                "dark-mode-menubar",
                "Dark Menu Bar",
                TweakCategory::Appearance,
                GLOBAL,
                "AppleInterfaceStyle",
                false,
            )
        },
        Tweak {
            description: "Disable shadows when taking screenshots of windows",
            relaunch: Some("SystemUIServer"),
            ..Tweak::defaults_bool(
                "disable-screenshot-shadows",
                "Disable Screenshot Shadows",
                TweakCategory::Appearance,
                SCREENCAPTURE,
                "disable-shadow",
                true,
            )
        },
        Tweak {
            description: "File format for screenshots (png, jpg, pdf)",
            value_type: ValueType::String,
            default_value: TweakValue::Text(Cow::Borrowed("png")),
            relaunch: Some("SystemUIServer"),
            ..Tweak::defaults_bool(
                "screenshot-format",
                "Screenshot Format",
                TweakCategory::Appearance,
                SCREENCAPTURE,
                "type",
                false,
            )
        },
        // Input
        Tweak {
            description: "Set the keyboard repeat interval (lower is faster)",
            value_type: ValueType::Integer,
            default_value: TweakValue::Int(2),
            warning: Some("Takes effect after logging out"),
            ..Tweak::defaults_bool(
                "fast-key-repeat",
                "Fast Key Repeat",
                TweakCategory::Input,
                GLOBAL,
                "KeyRepeat",
                false,
            )
        },
        Tweak {
            description: "Set the delay until key repeat starts (lower is shorter)",
            value_type: ValueType::Integer,
            default_value: TweakValue::Int(15),
            ..Tweak::defaults_bool(
                "decrease-keyboard-delay",
                "Decrease Keyboard Delay",
                TweakCategory::Input,
                GLOBAL,
                "InitialKeyRepeat",
                false,
            )
        },
        Tweak {
            description: "Repeat keys instead of showing the accent menu",
            ..Tweak::defaults_off(
                "disable-press-and-hold",
                "Disable Press and Hold",
                TweakCategory::Input,
                GLOBAL,
                "ApplePressAndHoldEnabled",
            )
        },
        Tweak {
            description: "Scroll content opposite to finger movement",
            impact: ImpactLevel::Medium,
            ..Tweak::defaults_off(
                "disable-natural-scrolling",
                "Disable Natural Scrolling",
                TweakCategory::Input,
                GLOBAL,
                "com.apple.swipescrolldirection",
            )
        },
        // Security
        Tweak {
            description: "Ignore ICMP pings and closed-port probes",
            requires_sudo: true,
            impact: ImpactLevel::Medium,
            ..Tweak::toggle(
                "firewall-stealth-mode",
                "Firewall Stealth Mode",
                TweakCategory::Security,
                "/usr/libexec/ApplicationFirewall/socketfilterfw --setstealthmode on",
                "/usr/libexec/ApplicationFirewall/socketfilterfw --setstealthmode off",
            )
        },
        Tweak {
            description: "Require the password immediately after sleep or screen saver",
            value_type: ValueType::Integer,
            default_value: TweakValue::Int(0),
            ..Tweak::defaults_bool(
                "require-password-immediately",
                "Require Password Immediately",
                TweakCategory::Security,
                "com.apple.screensaver",
                "askForPasswordDelay",
                false,
            )
        },
        Tweak {
            description: "Disable the guest login account",
            requires_sudo: true,
            impact: ImpactLevel::Medium,
            ..Tweak::defaults_off(
                "disable-guest-account",
                "Disable Guest Account",
                TweakCategory::Security,
                "/Library/Preferences/com.apple.loginwindow",
                "GuestEnabled",
            )
        },
        Tweak {
            description: "Allow apps from unidentified developers to run",
            requires_sudo: true,
            safe_to_toggle: false,
            impact: ImpactLevel::High,
            warning: Some("Lowers system security by allowing unsigned applications to run"),
            default_value: TweakValue::Bool(false),
            ..Tweak::toggle(
                "disable-gatekeeper",
                "Disable Gatekeeper",
                TweakCategory::Security,
                "spctl --master-disable",
                "spctl --master-enable",
            )
        },
        // Safari
        Tweak {
            description: "Enable the Develop menu in Safari",
            ..Tweak::defaults_bool(
                "enable-safari-developer-menu",
                "Enable Safari Developer Menu",
                TweakCategory::Safari,
                "com.apple.Safari",
                "IncludeDevelopMenu",
                true,
            )
        },
        // Terminal
        Tweak {
            description: "Make zsh the login shell",
            impact: ImpactLevel::Medium,
            warning: Some("Changes your login shell; open a new terminal afterwards"),
            ..Tweak::toggle(
                "enable-zsh-shell",
                "Use zsh as Login Shell",
                TweakCategory::Terminal,
                "chsh -s /bin/zsh",
                "chsh -s /bin/bash",
            )
        },
        Tweak {
            description: "Enable Secure Keyboard Entry in Terminal.app",
            ..Tweak::defaults_bool(
                "terminal-secure-keyboard",
                "Terminal Secure Keyboard Entry",
                TweakCategory::Terminal,
                "com.apple.Terminal",
                "SecureKeyboardEntry",
                true,
            )
        },
        // Development
        Tweak {
            description: "Show build durations in the Xcode toolbar",
            ..Tweak::defaults_bool(
                "xcode-show-build-times",
                "Show Xcode Build Times",
                TweakCategory::Development,
                "com.apple.dt.Xcode",
                "ShowBuildOperationDuration",
                true,
            )
        },
    ]
}
