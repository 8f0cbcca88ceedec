//! Built-in application catalog.
//!
//! `install_order` groups apps into install waves: command-line foundations
//! first, editors and runtimes next, everything else after.

use super::App;
use crate::types::{AppCategory, InstallSource};

pub(crate) static APPS: &[App] = &[
    // Development
    App {
        description: "Distributed version control system",
        subcategory: "version-control",
        tags: &["vcs", "cli", "scm"],
        min_macos: "10.15",
        popularity: 97,
        homepage: "https://git-scm.com",
        ..App::cask("git", "Git", "git", AppCategory::Development, 1)
    },
    App {
        description: "Free source-code editor made by Microsoft",
        subcategory: "ides",
        tags: &["editor", "typescript", "javascript", "microsoft"],
        min_macos: "10.15",
        popularity: 95,
        homepage: "https://code.visualstudio.com",
        ..App::cask("vscode", "Visual Studio Code", "visual-studio-code", AppCategory::Development, 5)
    },
    App {
        description: "AI-first code editor",
        subcategory: "ides",
        tags: &["editor", "ai"],
        dependencies: &["git"],
        popularity: 84,
        homepage: "https://www.cursor.com",
        ..App::cask("cursor", "Cursor", "cursor", AppCategory::Development, 5)
    },
    App {
        description: "Apple's IDE for macOS and iOS development",
        subcategory: "ides",
        tags: &["swift", "ios", "apple"],
        source: InstallSource::AppStore,
        min_macos: "14.0",
        popularity: 70,
        homepage: "https://developer.apple.com/xcode/",
        ..App::cask("xcode", "Xcode", "497799835", AppCategory::Development, 2)
    },
    App {
        description: "JavaScript runtime built on Chrome's V8 engine",
        subcategory: "runtimes",
        tags: &["javascript", "npm", "runtime"],
        popularity: 88,
        homepage: "https://nodejs.org",
        ..App::cask("node", "Node.js", "node", AppCategory::Development, 3)
    },
    App {
        description: "Build, share and run containerized applications",
        subcategory: "containers",
        tags: &["containers", "devops", "kubernetes"],
        min_macos: "12.0",
        popularity: 86,
        homepage: "https://www.docker.com/products/docker-desktop/",
        ..App::cask("docker", "Docker Desktop", "docker", AppCategory::Development, 8)
    },
    App {
        description: "API development environment",
        subcategory: "api",
        tags: &["api", "http", "rest"],
        popularity: 80,
        homepage: "https://www.postman.com",
        ..App::cask("postman", "Postman", "postman", AppCategory::Development, 10)
    },
    App {
        description: "Terminal emulator for macOS",
        subcategory: "terminals",
        tags: &["terminal", "shell"],
        popularity: 82,
        homepage: "https://iterm2.com",
        ..App::cask("iterm2", "iTerm2", "iterm2", AppCategory::Development, 4)
    },
    App {
        description: "Modern terminal with AI command search",
        subcategory: "terminals",
        tags: &["terminal", "shell", "ai"],
        popularity: 76,
        homepage: "https://www.warp.dev",
        ..App::cask("warp", "Warp", "warp", AppCategory::Development, 4)
    },
    App {
        description: "Native GUI for relational databases",
        subcategory: "databases",
        tags: &["database", "sql", "postgres", "mysql"],
        popularity: 72,
        homepage: "https://tableplus.com",
        ..App::cask("tableplus", "TablePlus", "tableplus", AppCategory::Development, 10)
    },
    // Productivity
    App {
        description: "Fast, secure web browser from Google",
        subcategory: "browsers",
        tags: &["browser", "web", "devtools"],
        popularity: 90,
        homepage: "https://www.google.com/chrome/",
        ..App::cask("chrome", "Google Chrome", "google-chrome", AppCategory::Productivity, 6)
    },
    App {
        description: "All-in-one workspace for notes and tasks",
        subcategory: "note-taking",
        tags: &["notes", "wiki", "tasks"],
        popularity: 85,
        homepage: "https://www.notion.so",
        ..App::cask("notion", "Notion", "notion", AppCategory::Productivity, 10)
    },
    App {
        description: "Knowledge base that works on local Markdown files",
        subcategory: "note-taking",
        tags: &["notes", "knowledge", "markdown"],
        min_macos: "10.13",
        popularity: 80,
        homepage: "https://obsidian.md",
        ..App::cask("obsidian", "Obsidian", "obsidian", AppCategory::Productivity, 10)
    },
    App {
        description: "Application launcher and productivity tool",
        subcategory: "launchers",
        tags: &["launcher", "workflow", "hotkeys"],
        popularity: 74,
        homepage: "https://www.alfredapp.com",
        ..App::cask("alfred", "Alfred", "alfred", AppCategory::Productivity, 12)
    },
    App {
        description: "Extendable productivity launcher",
        subcategory: "launchers",
        tags: &["launcher", "workflow", "extensions"],
        conflicts_with: &["alfred"],
        popularity: 83,
        homepage: "https://www.raycast.com",
        ..App::cask("raycast", "Raycast", "raycast", AppCategory::Productivity, 12)
    },
    // Design
    App {
        description: "Collaborative interface design tool",
        subcategory: "ui-ux",
        tags: &["design", "ui", "ux", "collaboration"],
        conflicts_with: &["sketch"],
        min_macos: "10.11",
        popularity: 90,
        homepage: "https://www.figma.com",
        ..App::cask("figma", "Figma", "figma", AppCategory::Design, 25)
    },
    App {
        description: "Digital design platform",
        subcategory: "ui-ux",
        tags: &["design", "ui", "vector"],
        popularity: 60,
        homepage: "https://www.sketch.com",
        ..App::cask("sketch", "Sketch", "sketch", AppCategory::Design, 25)
    },
    App {
        description: "Powerful image editing app",
        subcategory: "photo",
        tags: &["photo", "image", "editing"],
        source: InstallSource::AppStore,
        popularity: 58,
        homepage: "https://www.pixelmator.com/pro/",
        ..App::cask("pixelmator-pro", "Pixelmator Pro", "1289583905", AppCategory::Design, 25)
    },
    // Communication
    App {
        description: "Business communication platform",
        subcategory: "chat",
        tags: &["chat", "team", "messaging"],
        popularity: 88,
        homepage: "https://slack.com",
        ..App::cask("slack", "Slack", "slack", AppCategory::Communication, 30)
    },
    App {
        description: "Voice, video, and text communication",
        subcategory: "chat",
        tags: &["chat", "voice", "gaming"],
        popularity: 78,
        homepage: "https://discord.com",
        ..App::cask("discord", "Discord", "discord", AppCategory::Communication, 30)
    },
    App {
        description: "Video conferencing and online meetings",
        subcategory: "video",
        tags: &["video", "meetings", "calls"],
        popularity: 75,
        homepage: "https://zoom.us",
        ..App::cask("zoom", "Zoom", "zoom", AppCategory::Communication, 30)
    },
    // Media
    App {
        description: "Music streaming service",
        subcategory: "music",
        tags: &["music", "streaming", "podcasts"],
        popularity: 87,
        homepage: "https://www.spotify.com",
        ..App::cask("spotify", "Spotify", "spotify", AppCategory::Media, 40)
    },
    App {
        description: "Multimedia player for most formats",
        subcategory: "video",
        tags: &["video", "player", "codecs"],
        popularity: 70,
        homepage: "https://www.videolan.org",
        ..App::cask("vlc", "VLC", "vlc", AppCategory::Media, 40)
    },
    App {
        description: "Professional video editing and color grading",
        subcategory: "video",
        tags: &["video", "editing", "color"],
        source: InstallSource::DirectDownload,
        min_macos: "13.0",
        popularity: 55,
        homepage: "https://www.blackmagicdesign.com/products/davinciresolve",
        ..App::cask(
            "davinci-resolve",
            "DaVinci Resolve",
            "https://www.blackmagicdesign.com/products/davinciresolve",
            AppCategory::Media,
            45,
        )
    },
    // Utilities
    App {
        description: "Move and resize windows with keyboard shortcuts",
        subcategory: "window-management",
        tags: &["windows", "tiling", "hotkeys"],
        popularity: 81,
        homepage: "https://rectangleapp.com",
        ..App::cask("rectangle", "Rectangle", "rectangle", AppCategory::Utilities, 15)
    },
    App {
        description: "Organize your menu bar items",
        subcategory: "menu-bar",
        tags: &["menubar", "customization"],
        popularity: 62,
        homepage: "https://www.macbartender.com",
        ..App::cask("bartender", "Bartender", "bartender", AppCategory::Utilities, 15)
    },
    // Security
    App {
        description: "Password manager and secure wallet",
        subcategory: "passwords",
        tags: &["passwords", "vault", "2fa"],
        popularity: 89,
        homepage: "https://1password.com",
        ..App::cask("1password", "1Password", "1password", AppCategory::Security, 2)
    },
    App {
        description: "Outbound network connection monitor",
        subcategory: "firewall",
        tags: &["firewall", "network", "privacy"],
        popularity: 50,
        homepage: "https://obdev.at/products/littlesnitch/",
        ..App::cask("little-snitch", "Little Snitch", "little-snitch", AppCategory::Security, 20)
    },
    // Education
    App {
        description: "Spaced-repetition flashcards",
        subcategory: "flashcards",
        tags: &["learning", "flashcards", "memory"],
        popularity: 45,
        homepage: "https://apps.ankiweb.net",
        ..App::cask("anki", "Anki", "anki", AppCategory::Education, 50)
    },
];
