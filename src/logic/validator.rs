//! Selection validation.
//!
//! # Rules
//!
//! | Condition | Severity | Message |
//! |-----------|----------|---------|
//! | app id not in catalog | error | `Unknown app ID: <id>` |
//! | tweak id not in catalog | error | `Unknown tweak ID: <id>` |
//! | value does not fit the tweak's type | error | `Invalid value for tweak "<id>": expected <type>, got <kind>` |
//! | tweak requires sudo | warning | `Tweak "<name>" requires sudo privileges` |
//! | tweak carries warning text | warning | `Tweak "<name>": <text>` |
//! | two selected apps conflict | warning | `App conflict detected: <a> and <b>` |
//!
//! Tweaks mapped to `None` are not selected and are not validated.

use tracing::debug;

use crate::catalog::{App, Catalog};
use crate::selection::TweakSelections;

/// Errors and warnings for one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Fatal: generation stops and only an error stub is rendered.
    pub errors: Vec<String>,
    /// Advisory: surfaced to the user, generation continues.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_fatal(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Validate a selection against the catalog.
///
/// `app_ids` should already be deduplicated; each unknown id is reported once
/// per occurrence.
pub fn validate(catalog: &Catalog, app_ids: &[&str], tweaks: &TweakSelections) -> ValidationReport {
    let mut report = ValidationReport::default();

    for id in app_ids {
        if catalog.app(id).is_none() {
            report.errors.push(format!("Unknown app ID: {id}"));
        }
    }

    for (id, value) in tweaks.selected() {
        let Some(tweak) = catalog.tweak(id) else {
            report.errors.push(format!("Unknown tweak ID: {id}"));
            continue;
        };
        if !value.fits(tweak.value_type) {
            report.errors.push(format!(
                "Invalid value for tweak \"{}\": expected {}, got {}",
                id,
                tweak.value_type,
                value.kind()
            ));
        }
        if tweak.requires_sudo {
            report
                .warnings
                .push(format!("Tweak \"{}\" requires sudo privileges", tweak.name));
        }
        if let Some(warning) = tweak.warning.filter(|w| !w.is_empty()) {
            report
                .warnings
                .push(format!("Tweak \"{}\": {}", tweak.name, warning));
        }
    }

    let apps: Vec<&App> = app_ids.iter().filter_map(|id| catalog.app(id)).collect();
    for (first, second) in detect_conflicts(&apps) {
        report.warnings.push(format!(
            "App conflict detected: {} and {}",
            first.name, second.name
        ));
    }

    debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated selection"
    );
    report
}

/// Every unordered pair of apps where either side declares a conflict.
///
/// Pairs are visited once (`i < j`) in input order.
pub fn detect_conflicts<'a>(apps: &[&'a App]) -> Vec<(&'a App, &'a App)> {
    let mut conflicts = Vec::new();
    for (i, first) in apps.iter().enumerate() {
        for second in &apps[i + 1..] {
            if first.conflicts(second) {
                conflicts.push((*first, *second));
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::TweakValue;

    fn tweaks(entries: &[(&str, Option<TweakValue>)]) -> TweakSelections {
        entries.iter().cloned().collect()
    }

    #[test]
    fn test_valid_selection_is_clean() {
        let catalog = Catalog::builtin();
        let report = validate(
            catalog,
            &["vscode", "git"],
            &tweaks(&[("show-hidden-files", Some(TweakValue::Bool(true)))]),
        );
        assert_eq!(report, ValidationReport::default());
        assert!(!report.is_fatal());
    }

    #[test]
    fn test_unknown_app() {
        let report = validate(Catalog::builtin(), &["does-not-exist"], &TweakSelections::new());
        assert_eq!(report.errors, vec!["Unknown app ID: does-not-exist"]);
        assert!(report.is_fatal());
    }

    #[test]
    fn test_unknown_tweak() {
        let report = validate(
            Catalog::builtin(),
            &[],
            &tweaks(&[("make-it-faster", Some(TweakValue::Bool(true)))]),
        );
        assert_eq!(report.errors, vec!["Unknown tweak ID: make-it-faster"]);
    }

    #[test]
    fn test_null_tweak_is_skipped() {
        let report = validate(Catalog::builtin(), &[], &tweaks(&[("make-it-faster", None)]));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_ill_typed_value() {
        let report = validate(
            Catalog::builtin(),
            &[],
            &tweaks(&[("dock-icon-size", Some(TweakValue::text("big")))]),
        );
        assert_eq!(
            report.errors,
            vec!["Invalid value for tweak \"dock-icon-size\": expected integer, got string"]
        );
    }

    #[test]
    fn test_sudo_and_warning_text() {
        let report = validate(
            Catalog::builtin(),
            &[],
            &tweaks(&[
                ("firewall-stealth-mode", Some(TweakValue::Bool(true))),
                ("enable-zsh-shell", Some(TweakValue::Bool(true))),
            ]),
        );
        assert_eq!(
            report.warnings,
            vec![
                "Tweak \"Firewall Stealth Mode\" requires sudo privileges".to_string(),
                "Tweak \"Use zsh as Login Shell\": Changes your login shell; open a new terminal afterwards"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_conflict_detected_in_either_order() {
        let catalog = Catalog::builtin();
        for ids in [["figma", "sketch"], ["sketch", "figma"]] {
            let report = validate(catalog, &ids, &TweakSelections::new());
            assert_eq!(report.warnings.len(), 1);
            assert!(report.warnings[0].contains("Figma"));
            assert!(report.warnings[0].contains("Sketch"));
        }
    }

    #[test]
    fn test_conflicts_ignore_unknown_apps() {
        let catalog = Catalog::builtin();
        let report = validate(catalog, &["figma", "nope"], &TweakSelections::new());
        assert!(report.warnings.is_empty());
        assert_eq!(report.errors.len(), 1);
    }
}
