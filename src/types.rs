//! Type-safe catalog enums for macinit
//!
//! Categories, install sources and tweak metadata are proper Rust enums so the
//! catalog gets compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Application category. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppCategory {
    Development,
    Productivity,
    Design,
    Communication,
    Media,
    Utilities,
    Security,
    Education,
}

impl AppCategory {
    /// Human-readable category name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Productivity => "Productivity",
            Self::Design => "Design & Creative",
            Self::Communication => "Communication",
            Self::Media => "Media & Entertainment",
            Self::Utilities => "Utilities",
            Self::Security => "Security",
            Self::Education => "Education",
        }
    }

    /// One-line description shown next to the category
    pub fn description(&self) -> &'static str {
        match self {
            Self::Development => "Developer tools and IDEs",
            Self::Productivity => "Tools to boost your workflow",
            Self::Design => "Design, graphics, and creative tools",
            Self::Communication => "Chat, email, and collaboration",
            Self::Media => "Music, video, and streaming",
            Self::Utilities => "System utilities and tools",
            Self::Security => "Security and privacy tools",
            Self::Education => "Learning and educational tools",
        }
    }
}

/// System tweak category. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TweakCategory {
    Appearance,
    Input,
    Security,
    Dock,
    Finder,
    Safari,
    Terminal,
    Development,
}

impl TweakCategory {
    /// Human-readable category name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Appearance => "Appearance",
            Self::Input => "Keyboard & Trackpad",
            Self::Security => "Security & Privacy",
            Self::Dock => "Dock",
            Self::Finder => "Finder",
            Self::Safari => "Safari",
            Self::Terminal => "Terminal & Shell",
            Self::Development => "Development",
        }
    }
}

/// Where an application is installed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum InstallSource {
    /// Homebrew cask (`brew install --cask`)
    #[default]
    #[strum(serialize = "cask")]
    Cask,
    /// Mac App Store through the `mas` CLI; the package id is the numeric store id
    #[strum(serialize = "app-store")]
    AppStore,
    /// Vendor download page; cannot be installed unattended
    #[strum(serialize = "direct-download")]
    DirectDownload,
}

impl InstallSource {
    /// Whether installing needs Homebrew (`mas` itself comes from Homebrew)
    pub fn needs_homebrew(&self) -> bool {
        matches!(self, Self::Cask | Self::AppStore)
    }
}

/// Value type written by a tweak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValueType {
    Boolean,
    String,
    Integer,
    Float,
}

impl ValueType {
    /// Type flag understood by `defaults write`
    pub fn defaults_flag(&self) -> &'static str {
        match self {
            Self::Boolean => "-bool",
            Self::String => "-string",
            Self::Integer => "-int",
            Self::Float => "-float",
        }
    }
}

/// How far-reaching a tweak is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImpactLevel {
    #[default]
    Low,
    Medium,
    High,
}
