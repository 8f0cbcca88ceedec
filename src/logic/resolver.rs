//! App & Tweak Resolver
//!
//! Translates a validated selection into the concrete, ordered items the
//! renderer emits.
//!
//! # Design
//!
//! - **Deterministic**: install order depends only on catalog data, never on
//!   the order the caller listed apps in
//! - **Heuristic, not a solver**: apps are never reordered relative to the
//!   specific apps they depend on, only by whether they declare any dependency
//! - **Pure logic**: no I/O, no side effects
//!
//! # App Ordering
//!
//! | Key | Direction |
//! |-----|-----------|
//! | `install_order` | ascending |
//! | has dependencies | apps without dependencies first |
//! | `name` | ascending, case-sensitive |

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::catalog::{App, Catalog, Tweak};
use crate::selection::{TweakSelections, TweakValue};

/// A selected tweak paired with the value the caller chose for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTweak<'a> {
    pub tweak: &'a Tweak,
    pub value: &'a TweakValue,
}

impl ResolvedTweak<'_> {
    /// The shell command applying this tweak's value.
    pub fn command(&self) -> String {
        self.tweak.command(self.value)
    }
}

// ============================================================================
// App Resolution
// ============================================================================

/// Resolve app ids to catalog apps in install order.
///
/// Unknown ids are skipped (the validator reports them) and duplicate ids
/// collapse to one entry.
pub fn resolve_apps<'a>(catalog: &'a Catalog, ids: &[&str]) -> Vec<&'a App> {
    let mut seen = HashSet::new();
    let mut apps: Vec<&App> = ids
        .iter()
        .filter_map(|id| catalog.app(id))
        .filter(|app| seen.insert(app.id))
        .collect();
    apps.sort_by(|a, b| install_order(a, b));
    debug!(apps = apps.len(), "resolved install order");
    apps
}

/// Comparator implementing the install ordering table above.
pub fn install_order(a: &App, b: &App) -> Ordering {
    a.install_order
        .cmp(&b.install_order)
        .then_with(|| (!a.dependencies.is_empty()).cmp(&!b.dependencies.is_empty()))
        .then_with(|| a.name.cmp(b.name))
}

// ============================================================================
// Tweak Resolution
// ============================================================================

/// Resolve selected tweaks in selection order, carrying the caller's value.
///
/// `None` entries and unknown ids are skipped.
pub fn resolve_tweaks<'a>(catalog: &'a Catalog, selections: &'a TweakSelections) -> Vec<ResolvedTweak<'a>> {
    let tweaks: Vec<ResolvedTweak<'a>> = selections
        .selected()
        .filter_map(|(id, value)| catalog.tweak(id).map(|tweak| ResolvedTweak { tweak, value }))
        .collect();
    debug!(tweaks = tweaks.len(), "resolved tweaks");
    tweaks
}

// ============================================================================
// Aggregates
// ============================================================================

/// Estimated run time in minutes: two per app, half a minute per tweak, rounded up.
pub fn estimate_minutes(app_count: usize, tweak_count: usize) -> u32 {
    let half_minutes = 4 * app_count + tweak_count;
    half_minutes.div_ceil(2) as u32
}

/// True if any tweak needs administrator privileges.
pub fn requires_sudo(tweaks: &[ResolvedTweak<'_>]) -> bool {
    tweaks.iter().any(|t| t.tweak.requires_sudo)
}

/// True if any tweak relaunches a system process.
pub fn will_restart(tweaks: &[ResolvedTweak<'_>]) -> bool {
    tweaks.iter().any(|t| t.tweak.requires_restart())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppCategory;

    fn ids(apps: &[&App]) -> Vec<&'static str> {
        apps.iter().map(|a| a.id).collect()
    }

    fn ordering_catalog() -> Catalog {
        let apps = vec![
            App::cask("late", "Late", "late", AppCategory::Utilities, 20),
            App {
                dependencies: &["early"],
                ..App::cask("needs", "Alpha", "needs", AppCategory::Utilities, 10)
            },
            App::cask("plain", "Zulu", "plain", AppCategory::Utilities, 10),
            App::cask("early", "Early", "early", AppCategory::Utilities, 1),
            App::cask("lower", "beta", "lower", AppCategory::Utilities, 10),
            App::cask("upper", "Beta", "upper", AppCategory::Utilities, 10),
        ];
        Catalog::new(apps, vec![], vec![]).unwrap()
    }

    #[test]
    fn test_install_order_primary_key() {
        let catalog = ordering_catalog();
        let apps = resolve_apps(&catalog, &["late", "early"]);
        assert_eq!(ids(&apps), vec!["early", "late"]);
    }

    #[test]
    fn test_dependency_free_apps_first_on_tie() {
        let catalog = ordering_catalog();
        // "Alpha" sorts before "Zulu" by name but declares a dependency.
        let apps = resolve_apps(&catalog, &["needs", "plain"]);
        assert_eq!(ids(&apps), vec!["plain", "needs"]);
    }

    #[test]
    fn test_name_is_case_sensitive() {
        let catalog = ordering_catalog();
        let apps = resolve_apps(&catalog, &["lower", "upper"]);
        // 'B' (0x42) sorts before 'b' (0x62)
        assert_eq!(ids(&apps), vec!["upper", "lower"]);
    }

    #[test]
    fn test_input_order_irrelevant() {
        let catalog = ordering_catalog();
        let forward = resolve_apps(&catalog, &["late", "needs", "plain", "early"]);
        let backward = resolve_apps(&catalog, &["early", "plain", "needs", "late"]);
        assert_eq!(ids(&forward), ids(&backward));
    }

    #[test]
    fn test_unknown_and_duplicate_ids() {
        let catalog = ordering_catalog();
        let apps = resolve_apps(&catalog, &["plain", "missing", "plain"]);
        assert_eq!(ids(&apps), vec!["plain"]);
    }

    #[test]
    fn test_resolve_tweaks_keeps_selection_order_and_values() {
        let catalog = Catalog::builtin();
        let selections: TweakSelections = vec![
            ("fast-key-repeat", Some(TweakValue::Int(1))),
            ("auto-hide-dock", None),
            ("unknown", Some(TweakValue::Bool(true))),
            ("show-hidden-files", Some(TweakValue::Bool(false))),
        ]
        .into_iter()
        .collect();

        let resolved = resolve_tweaks(catalog, &selections);
        let pairs: Vec<(&str, &TweakValue)> = resolved.iter().map(|r| (r.tweak.id, r.value)).collect();
        assert_eq!(
            pairs,
            vec![
                ("fast-key-repeat", &TweakValue::Int(1)),
                ("show-hidden-files", &TweakValue::Bool(false)),
            ]
        );
    }

    #[test]
    fn test_estimate_minutes() {
        assert_eq!(estimate_minutes(0, 0), 0);
        assert_eq!(estimate_minutes(2, 1), 5);
        assert_eq!(estimate_minutes(1, 2), 3);
        assert_eq!(estimate_minutes(0, 3), 2);
    }

    #[test]
    fn test_flag_aggregation() {
        let catalog = Catalog::builtin();
        let selections: TweakSelections = vec![
            ("firewall-stealth-mode", Some(TweakValue::Bool(true))),
            ("auto-hide-dock", Some(TweakValue::Bool(true))),
        ]
        .into_iter()
        .collect();
        let resolved = resolve_tweaks(catalog, &selections);
        assert!(requires_sudo(&resolved));
        assert!(will_restart(&resolved));

        assert!(!requires_sudo(&resolved[1..]));
        assert!(!will_restart(&resolved[..1]));
    }
}
