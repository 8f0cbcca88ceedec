//! End-to-end generation scenarios against the built-in catalog.

use chrono::{DateTime, TimeZone, Utc};

use macinit::{
    Catalog, GenerationResult, ScriptGenerationOptions, ScriptGenerator, Selection, SetupState,
    TweakValue, generate_script,
};

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap()
}

fn generate(selection: &Selection) -> GenerationResult {
    ScriptGenerator::default().generate_at(selection, fixed_time())
}

/// Byte offset of `needle`, failing the test if it is missing.
fn position(script: &str, needle: &str) -> usize {
    script
        .find(needle)
        .unwrap_or_else(|| panic!("script does not contain {needle:?}:\n{script}"))
}

#[test]
fn test_vscode_git_hidden_files_scenario() {
    let selection = Selection::new()
        .with_app("vscode")
        .with_app("git")
        .with_tweak("show-hidden-files", true);
    let result = generate(&selection);

    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.estimated_time, 5);

    let script = &result.script;
    let steps = [
        "#!/bin/bash\nset -e\n",
        "if ! command -v brew &> /dev/null; then",
        "brew install --cask git\n",
        "brew install --cask visual-studio-code\n",
        "# Show Hidden Files\n",
        "defaults write com.apple.finder AppleShowAllFiles -bool true",
        "brew list --cask git",
        "brew list --cask visual-studio-code",
        "echo \"Setup complete! Restart your machine to apply all changes.\"",
    ];
    let offsets: Vec<usize> = steps.iter().map(|s| position(script, s)).collect();
    assert!(
        offsets.windows(2).all(|w| w[0] < w[1]),
        "sections out of order: {offsets:?}"
    );
}

#[test]
fn test_unknown_app_rejected() {
    let result = generate(&Selection::new().with_app("does-not-exist"));
    assert_eq!(result.errors, vec!["Unknown app ID: does-not-exist"]);
    assert_eq!(result.estimated_time, 0);
    assert!(!result.requires_sudo);
    assert!(!result.will_restart);
    assert!(result.script.contains("# ERROR: Cannot generate script due to validation errors"));
}

#[test]
fn test_unknown_tweak_rejected() {
    let result = generate(&Selection::new().with_tweak("turbo-mode", true));
    assert_eq!(result.errors, vec!["Unknown tweak ID: turbo-mode"]);
    assert!(!result.script.contains("defaults write"));
}

#[test]
fn test_ill_typed_value_rejected() {
    let result = generate(&Selection::new().with_tweak("auto-hide-dock", "sometimes"));
    assert_eq!(
        result.errors,
        vec!["Invalid value for tweak \"auto-hide-dock\": expected boolean, got string"]
    );
}

#[test]
fn test_integer_accepted_for_float_tweak() {
    let result = generate(&Selection::new().with_tweak("dock-autohide-delay", TweakValue::Int(1)));
    assert!(result.is_success());
    assert!(result.script.contains("defaults write com.apple.dock autohide-delay -float 1"));
}

#[test]
fn test_conflict_warning_either_order() {
    for apps in [["figma", "sketch"], ["sketch", "figma"]] {
        let mut selection = Selection::new();
        for app in apps {
            selection = selection.with_app(app);
        }
        let result = generate(&selection);
        assert!(result.is_success());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Figma"));
        assert!(result.warnings[0].contains("Sketch"));
        assert!(result.script.contains("brew install --cask figma"));
        assert!(result.script.contains("brew install --cask sketch"));
    }
}

#[test]
fn test_sudo_and_restart_aggregate_across_tweaks() {
    let catalog = Catalog::builtin();
    let sudo_only = catalog.tweak("firewall-stealth-mode").unwrap();
    let restart_only = catalog.tweak("auto-hide-dock").unwrap();
    assert!(sudo_only.requires_sudo && !sudo_only.requires_restart());
    assert!(!restart_only.requires_sudo && restart_only.requires_restart());

    let result = generate(
        &Selection::new()
            .with_tweak("firewall-stealth-mode", true)
            .with_tweak("auto-hide-dock", true),
    );
    assert!(result.requires_sudo);
    assert!(result.will_restart);
    assert_eq!(
        result.warnings,
        vec!["Tweak \"Firewall Stealth Mode\" requires sudo privileges"]
    );
}

#[test]
fn test_install_order_beats_input_order() {
    let catalog = Catalog::builtin();
    let git = catalog.app("git").unwrap();
    let docker = catalog.app("docker").unwrap();
    assert!(git.install_order < docker.install_order);

    for apps in [["docker", "git"], ["git", "docker"]] {
        let selection = Selection::new().with_app(apps[0]).with_app(apps[1]);
        let script = generate(&selection).script;
        assert!(position(&script, "--cask git") < position(&script, "--cask docker"));
    }
}

#[test]
fn test_tweaks_render_in_selection_order() {
    let selection = Selection::new()
        .with_tweak("auto-hide-dock", true)
        .with_tweak("show-file-extensions", true)
        .with_tweak("dock-icon-size", TweakValue::Int(40));
    let script = generate(&selection).script;
    let dock = position(&script, "com.apple.dock autohide ");
    let ext = position(&script, "AppleShowAllExtensions");
    let size = position(&script, "tilesize -int 40");
    assert!(dock < ext && ext < size);
}

#[test]
fn test_null_tweak_is_deselected() {
    let mut selection = Selection::new().with_app("git");
    selection.tweaks.insert("auto-hide-dock", None);
    let result = generate(&selection);
    assert!(result.is_success());
    assert!(!result.script.contains("autohide"));
    assert!(result.script.contains("# 1 apps, 0 system tweaks"));
}

#[test]
fn test_generation_is_repeatable() {
    let selection = Selection::new()
        .with_app("slack")
        .with_app("xcode")
        .with_tweak("screenshot-format", "jpg");
    let generator = ScriptGenerator::new(ScriptGenerationOptions::default().with_backup(true));
    assert_eq!(
        generator.generate_at(&selection, fixed_time()),
        generator.generate_at(&selection, fixed_time())
    );
}

#[test]
fn test_current_time_generation_succeeds() {
    let result = generate_script(&Selection::new().with_app("git"), ScriptGenerationOptions::default());
    assert!(result.is_success());
    assert!(result.script.contains("# Generated on "));
}

#[test]
fn test_every_preset_generates_cleanly() {
    let catalog = Catalog::builtin();
    for preset in catalog.presets() {
        let mut state = SetupState::new();
        state.apply_preset(catalog, preset.id).unwrap();
        let result = state.generate_at(catalog, fixed_time());
        assert!(result.is_success(), "{} failed: {:?}", preset.id, result.errors);
        assert!(result.estimated_time > 0);
    }
}
