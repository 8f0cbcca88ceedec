//! Property-Based Tests for macinit
//!
//! These tests verify:
//! - Generation is deterministic for a fixed timestamp
//! - Install order does not depend on input order
//! - Turning comments off only removes comment lines
//! - Aggregates (time, sudo, restart) follow the selected items

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use proptest::sample::subsequence;

use macinit::{Catalog, ScriptGenerationOptions, ScriptGenerator, Selection, TweakSelections, TweakValue};

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

// =============================================================================
// Strategies
// =============================================================================

fn app_ids() -> Vec<&'static str> {
    Catalog::builtin().apps().iter().map(|a| a.id).collect()
}

fn tweak_ids() -> Vec<&'static str> {
    Catalog::builtin().tweaks().iter().map(|t| t.id).collect()
}

/// A valid selection: any subset of apps, any subset of tweaks at their defaults
fn selection_strategy() -> impl Strategy<Value = Selection> {
    let apps = app_ids();
    let app_count = apps.len();
    let tweaks = tweak_ids();
    let tweak_count = tweaks.len();
    (
        subsequence(apps, 0..=app_count).prop_shuffle(),
        subsequence(tweaks, 0..=tweak_count).prop_shuffle(),
    )
        .prop_map(|(apps, tweaks)| {
            let catalog = Catalog::builtin();
            Selection {
                apps: apps.into_iter().map(String::from).collect(),
                tweaks: tweaks
                    .into_iter()
                    .map(|id| (id, catalog.tweak(id).map(|t| t.default_value.clone())))
                    .collect(),
            }
        })
}

fn options_strategy() -> impl Strategy<Value = ScriptGenerationOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(comments, verification, parallel, backup)| ScriptGenerationOptions {
            include_comments: comments,
            include_verification: verification,
            parallel_installs: parallel,
            create_backup: backup,
        },
    )
}

/// Lines that would run: everything except blanks and `# ` comments
fn command_lines(script: &str) -> Vec<&str> {
    script
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with("# "))
        .collect()
}

// =============================================================================
// Generation Properties
// =============================================================================

proptest! {
    /// Same input and timestamp: byte-identical output
    #[test]
    fn generation_is_deterministic(selection in selection_strategy(), options in options_strategy()) {
        let generator = ScriptGenerator::new(options);
        let first = generator.generate_at(&selection, fixed_time());
        let second = generator.generate_at(&selection, fixed_time());
        prop_assert_eq!(first, second);
    }

    /// Valid selections never produce errors
    #[test]
    fn valid_selection_has_no_errors(selection in selection_strategy()) {
        let result = ScriptGenerator::default().generate_at(&selection, fixed_time());
        prop_assert!(result.is_success(), "errors: {:?}", result.errors);
        prop_assert!(result.script.ends_with('\n'));
    }

    /// Reversing the app list does not change the script
    #[test]
    fn app_order_is_input_independent(selection in selection_strategy(), options in options_strategy()) {
        let mut reversed = selection.clone();
        reversed.apps.reverse();
        let generator = ScriptGenerator::new(options);
        prop_assert_eq!(
            generator.generate_at(&selection, fixed_time()).script,
            generator.generate_at(&reversed, fixed_time()).script
        );
    }

    /// Comments off removes comment lines only
    #[test]
    fn comment_toggle_keeps_commands(selection in selection_strategy(), options in options_strategy()) {
        let with = ScriptGenerator::new(options.with_comments(true)).generate_at(&selection, fixed_time());
        let without = ScriptGenerator::new(options.with_comments(false)).generate_at(&selection, fixed_time());

        prop_assert_eq!(command_lines(&with.script), command_lines(&without.script));
        prop_assert!(!without.script.lines().any(|l| l.starts_with("# ")));
        prop_assert_eq!(with.estimated_time, without.estimated_time);
    }

    /// Aggregates follow the selected apps and tweaks
    #[test]
    fn aggregates_follow_selection(selection in selection_strategy()) {
        let catalog = Catalog::builtin();
        let result = ScriptGenerator::default().generate_at(&selection, fixed_time());

        let apps = selection.unique_app_ids().len() as u32;
        let tweaks: Vec<_> = selection
            .tweaks
            .selected()
            .filter_map(|(id, _)| catalog.tweak(id))
            .collect();
        let tweak_count = tweaks.len() as u32;

        prop_assert_eq!(result.estimated_time, 2 * apps + tweak_count.div_ceil(2));
        prop_assert_eq!(result.requires_sudo, tweaks.iter().any(|t| t.requires_sudo));
        prop_assert_eq!(result.will_restart, tweaks.iter().any(|t| t.requires_restart()));
    }

    /// Every app gets exactly one install line in sequential mode
    #[test]
    fn each_app_installed_once(selection in selection_strategy()) {
        let catalog = Catalog::builtin();
        let result = ScriptGenerator::default().generate_at(&selection, fixed_time());
        for id in selection.unique_app_ids() {
            let app = catalog.app(id).unwrap();
            let installs = result
                .script
                .lines()
                .filter(|l| l.ends_with(&format!(" {}", app.package_id)) || l.contains(&format!(" {}\"", app.package_id)))
                .filter(|l| l.starts_with("brew install") || l.starts_with("mas install") || l.starts_with("echo \"Download"))
                .count();
            prop_assert_eq!(installs, 1, "{} installed {} times", id, installs);
        }
    }

    /// Any id outside the catalog yields an error stub
    #[test]
    fn unknown_app_yields_stub(id in "[a-z]{3,12}-unknown") {
        let selection = Selection::new().with_app("git").with_app(id.clone());
        let result = ScriptGenerator::default().generate_at(&selection, fixed_time());

        prop_assert_eq!(result.errors, vec![format!("Unknown app ID: {id}")]);
        prop_assert_eq!(result.estimated_time, 0);
        prop_assert!(!result.requires_sudo);
        prop_assert!(result.script.ends_with("exit 1\n"));
        prop_assert!(!result.script.contains("brew install"));
    }

    /// Deselecting with null is the same as never selecting
    #[test]
    fn null_tweak_equals_absent(selection in selection_strategy(), extra in subsequence(tweak_ids(), 1..4)) {
        let mut with_nulls = selection.clone();
        for id in &extra {
            if selection.tweaks.get(id).is_none() {
                with_nulls.tweaks.insert(*id, None);
            }
        }
        let generator = ScriptGenerator::default();
        prop_assert_eq!(
            generator.generate_at(&selection, fixed_time()),
            generator.generate_at(&with_nulls, fixed_time())
        );
    }
}

// =============================================================================
// Value Parsing Properties
// =============================================================================

proptest! {
    /// Integers survive Display → parse_as
    #[test]
    fn integer_value_roundtrip(n in any::<i64>()) {
        let value = TweakValue::Int(n);
        let parsed = TweakValue::parse_as(macinit::ValueType::Integer, &value.to_string()).unwrap();
        prop_assert_eq!(parsed, value);
    }

    /// Tweak maps keep their insertion order through JSON
    #[test]
    fn tweak_order_survives_json(ids in subsequence(tweak_ids(), 0..8).prop_shuffle()) {
        let tweaks: TweakSelections = ids.iter().map(|id| (*id, Some(TweakValue::Bool(true)))).collect();
        let json = serde_json::to_string(&tweaks).unwrap();
        let back: TweakSelections = serde_json::from_str(&json).unwrap();
        let order: Vec<&str> = back.entries().map(|(id, _)| id).collect();
        prop_assert_eq!(order, ids);
    }
}
