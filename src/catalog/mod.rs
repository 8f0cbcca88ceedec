//! Static catalog of installable apps, system tweaks and presets.
//!
//! Catalog entries are kept in Rust (not JSON) so typos in ids and commands
//! are caught by tests, and the whole catalog is built once per process.
//!
//! # Lookups
//!
//! `Catalog` indexes every entry by id in a hash map. Callers use the typed
//! accessors (`app`, `tweak`, `preset`) instead of scanning lists.
//!
//! # Tweak commands
//!
//! A tweak does not store a closure. Its `TweakSetting` describes what to
//! change, and `Tweak::command` interprets `(setting, value type, value)` into
//! a shell command. The interpretation is a pure function of its inputs.

mod apps;
mod presets;
mod tweaks;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{MacInitError, Result};
use crate::selection::TweakValue;
use crate::types::{AppCategory, ImpactLevel, InstallSource, TweakCategory, ValueType};

/// An installable application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct App {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AppCategory,
    pub subcategory: &'static str,
    pub tags: &'static [&'static str],
    pub source: InstallSource,
    /// Identifier used verbatim in the install command (cask token, store id, URL).
    pub package_id: &'static str,
    /// Primary install sort key, ascending.
    pub install_order: u32,
    /// Informational only; not enforced at generation time.
    pub min_macos: &'static str,
    pub dependencies: &'static [&'static str],
    /// Declared one-way; conflicts are checked in both directions.
    pub conflicts_with: &'static [&'static str],
    /// 0-100, used for listing only.
    pub popularity: u8,
    pub homepage: &'static str,
}

impl App {
    /// A Homebrew cask with no dependencies, conflicts or tags.
    pub const fn cask(
        id: &'static str,
        name: &'static str,
        package_id: &'static str,
        category: AppCategory,
        install_order: u32,
    ) -> Self {
        Self {
            id,
            name,
            description: "",
            category,
            subcategory: "",
            tags: &[],
            source: InstallSource::Cask,
            package_id,
            install_order,
            min_macos: "11.0",
            dependencies: &[],
            conflicts_with: &[],
            popularity: 0,
            homepage: "",
        }
    }

    /// Whether either app declares a conflict with the other.
    pub fn conflicts(&self, other: &App) -> bool {
        self.conflicts_with.contains(&other.id) || other.conflicts_with.contains(&self.id)
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// What a tweak changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TweakSetting {
    /// A preference written with `defaults write <domain> <key>`.
    Defaults {
        domain: &'static str,
        key: &'static str,
        /// The key enables what the tweak disables; booleans are written negated.
        invert: bool,
    },
    /// A boolean switch backed by two fixed commands.
    Toggle {
        enable: &'static str,
        disable: &'static str,
    },
}

/// A single macOS system-preference change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tweak {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TweakCategory,
    pub setting: TweakSetting,
    pub value_type: ValueType,
    pub default_value: TweakValue,
    /// Process relaunched after the change (`killall <name>`).
    pub relaunch: Option<&'static str>,
    pub requires_sudo: bool,
    pub safe_to_toggle: bool,
    pub impact: ImpactLevel,
    /// Shown to the user and echoed into the script as a comment.
    pub warning: Option<&'static str>,
    pub min_macos: &'static str,
}

impl Tweak {
    /// A boolean `defaults write` tweak with low impact and no relaunch.
    pub fn defaults_bool(
        id: &'static str,
        name: &'static str,
        category: TweakCategory,
        domain: &'static str,
        key: &'static str,
        default_value: bool,
    ) -> Self {
        Self {
            id,
            name,
            description: "",
            category,
            setting: TweakSetting::Defaults {
                domain,
                key,
                invert: false,
            },
            value_type: ValueType::Boolean,
            default_value: TweakValue::Bool(default_value),
            relaunch: None,
            requires_sudo: false,
            safe_to_toggle: true,
            impact: ImpactLevel::Low,
            warning: None,
            min_macos: "11.0",
        }
    }

    /// A "disable" tweak over a key that enables the feature.
    ///
    /// Selecting it with `true` writes `false` to `key`.
    pub fn defaults_off(
        id: &'static str,
        name: &'static str,
        category: TweakCategory,
        domain: &'static str,
        key: &'static str,
    ) -> Self {
        Self {
            setting: TweakSetting::Defaults {
                domain,
                key,
                invert: true,
            },
            ..Self::defaults_bool(id, name, category, domain, key, true)
        }
    }

    /// A boolean tweak backed by two fixed commands.
    pub fn toggle(
        id: &'static str,
        name: &'static str,
        category: TweakCategory,
        enable: &'static str,
        disable: &'static str,
    ) -> Self {
        Self {
            setting: TweakSetting::Toggle { enable, disable },
            ..Self::defaults_bool(id, name, category, "", "", true)
        }
    }

    pub fn requires_restart(&self) -> bool {
        self.relaunch.is_some()
    }

    /// Preference domain touched by this tweak, if it writes one.
    pub fn domain(&self) -> Option<&'static str> {
        match self.setting {
            TweakSetting::Defaults { domain, .. } => Some(domain),
            TweakSetting::Toggle { .. } => None,
        }
    }

    /// Render the shell command applying `value`.
    ///
    /// The value is expected to fit `value_type`; the validator rejects
    /// selections where it does not.
    pub fn command(&self, value: &TweakValue) -> String {
        let mut command = String::new();
        if self.requires_sudo {
            command.push_str("sudo ");
        }

        match self.setting {
            TweakSetting::Defaults { domain, key, invert } => {
                let written = match value {
                    TweakValue::Bool(on) if invert => TweakValue::Bool(!on),
                    other => other.clone(),
                };
                command.push_str(&format!(
                    "defaults write {} {} {} {}",
                    domain,
                    key,
                    self.value_type.defaults_flag(),
                    shell_literal(&written)
                ));
            }
            TweakSetting::Toggle { enable, disable } => {
                let on = matches!(value, TweakValue::Bool(true));
                command.push_str(if on { enable } else { disable });
            }
        }

        if let Some(process) = self.relaunch {
            command.push_str(&format!("; killall {process} 2>/dev/null || true"));
        }
        command
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.id.contains(needle)
    }
}

/// A curated bundle of apps and tweaks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Developer role the preset targets, if any.
    pub role: Option<&'static str>,
    pub apps: &'static [&'static str],
    pub tweaks: &'static [&'static str],
}

/// Single-quote `value` for POSIX shells unless it is a bare number or boolean.
pub(crate) fn shell_literal(value: &TweakValue) -> String {
    match value {
        TweakValue::Text(text) => shell_quote(text),
        other => other.to_string(),
    }
}

/// Wrap `text` in single quotes, escaping embedded single quotes.
pub(crate) fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// Immutable, id-indexed catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    apps: Vec<App>,
    tweaks: Vec<Tweak>,
    presets: Vec<Preset>,
    app_index: HashMap<&'static str, usize>,
    tweak_index: HashMap<&'static str, usize>,
    preset_index: HashMap<&'static str, usize>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build a catalog, rejecting duplicate ids within each kind.
    pub fn new(apps: Vec<App>, tweaks: Vec<Tweak>, presets: Vec<Preset>) -> Result<Self> {
        let app_index = index("app", apps.iter().map(|a| a.id))?;
        let tweak_index = index("tweak", tweaks.iter().map(|t| t.id))?;
        let preset_index = index("preset", presets.iter().map(|p| p.id))?;
        Ok(Self {
            apps,
            tweaks,
            presets,
            app_index,
            tweak_index,
            preset_index,
        })
    }

    /// The process-wide built-in catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            Catalog::new(
                apps::APPS.to_vec(),
                tweaks::builtin(),
                presets::PRESETS.to_vec(),
            )
            .unwrap_or_else(|err| panic!("built-in catalog is inconsistent: {err}"))
        })
    }

    pub fn app(&self, id: &str) -> Option<&App> {
        self.app_index.get(id).map(|&i| &self.apps[i])
    }

    pub fn tweak(&self, id: &str) -> Option<&Tweak> {
        self.tweak_index.get(id).map(|&i| &self.tweaks[i])
    }

    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.preset_index.get(id).map(|&i| &self.presets[i])
    }

    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    pub fn tweaks(&self) -> &[Tweak] {
        &self.tweaks
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Apps in `category`, most popular first.
    pub fn apps_in(&self, category: AppCategory) -> Vec<&App> {
        let mut apps: Vec<&App> = self.apps.iter().filter(|a| a.category == category).collect();
        apps.sort_by(|a, b| b.popularity.cmp(&a.popularity).then(a.name.cmp(b.name)));
        apps
    }

    pub fn tweaks_in(&self, category: TweakCategory) -> Vec<&Tweak> {
        self.tweaks.iter().filter(|t| t.category == category).collect()
    }

    /// Case-insensitive search over name, description and tags.
    pub fn search_apps(&self, query: &str) -> Vec<&App> {
        let needle = query.trim().to_lowercase();
        self.apps.iter().filter(|a| a.matches(&needle)).collect()
    }

    /// Case-insensitive search over name, description and id.
    pub fn search_tweaks(&self, query: &str) -> Vec<&Tweak> {
        let needle = query.trim().to_lowercase();
        self.tweaks.iter().filter(|t| t.matches(&needle)).collect()
    }
}

fn index(
    kind: &'static str,
    ids: impl Iterator<Item = &'static str>,
) -> Result<HashMap<&'static str, usize>> {
    let mut map = HashMap::new();
    for (position, id) in ids.enumerate() {
        if map.insert(id, position).is_some() {
            return Err(MacInitError::duplicate(kind, id));
        }
    }
    Ok(map)
}
