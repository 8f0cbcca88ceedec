//! Script renderer.
//!
//! Builds the bash script text from already-resolved apps and tweaks. The
//! renderer only concatenates strings; it never looks at the clock, the
//! filesystem or the network. The single time-dependent line (the header's
//! generation timestamp) comes in through [`Header`].
//!
//! # Sections
//!
//! | Section | Emitted when |
//! |---------|--------------|
//! | header | always (comment block only with comments on) |
//! | preflight | some app installs through Homebrew or `mas` |
//! | backup | `create_backup` |
//! | install | at least one app |
//! | tweaks | at least one tweak |
//! | verification | `include_verification` and some app can be checked |
//! | footer | always |
//!
//! Turning comments off removes comment lines only. Command lines and their
//! order are identical either way.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::catalog::App;
use crate::config::ScriptGenerationOptions;
use crate::logic::resolver::ResolvedTweak;
use crate::types::InstallSource;

const HOMEBREW_INSTALL_URL: &str = "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// Data for the script's header comment block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub generated_at: DateTime<Utc>,
    pub app_count: usize,
    pub tweak_count: usize,
}

/// Line buffer that drops comments when they are switched off.
struct ScriptWriter {
    lines: Vec<String>,
    comments: bool,
}

impl ScriptWriter {
    fn new(options: &ScriptGenerationOptions) -> Self {
        Self {
            lines: Vec::new(),
            comments: options.include_comments,
        }
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn comment(&mut self, text: impl AsRef<str>) {
        if self.comments {
            self.lines.push(format!("# {}", text.as_ref()));
        }
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn finish(self) -> String {
        let mut script = self.lines.join("\n");
        script.push('\n');
        script
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Render a complete setup script.
///
/// `apps` must already be in install order and `tweaks` in selection order.
pub fn render(
    apps: &[&App],
    tweaks: &[ResolvedTweak<'_>],
    options: &ScriptGenerationOptions,
    header: &Header,
) -> String {
    let mut w = ScriptWriter::new(options);
    write_header(&mut w, header);
    write_preflight(&mut w, apps);
    if options.create_backup {
        write_backup(&mut w, tweaks);
    }
    write_install(&mut w, apps, options.parallel_installs);
    write_tweaks(&mut w, tweaks);
    if options.include_verification {
        write_verification(&mut w, apps);
    }
    w.comment("Setup complete");
    w.line(r#"echo "Setup complete! Restart your machine to apply all changes.""#);
    w.finish()
}

/// Render the stub returned when validation fails.
///
/// The stub exits non-zero so a saved copy cannot be mistaken for a
/// successful setup. Error lines are written even with comments off.
pub fn render_error_stub(errors: &[String], options: &ScriptGenerationOptions, header: &Header) -> String {
    let mut w = ScriptWriter::new(options);
    write_header(&mut w, header);
    w.line("# ERROR: Cannot generate script due to validation errors");
    for error in errors {
        w.line(format!("# {error}"));
    }
    w.line("exit 1");
    w.finish()
}

// ============================================================================
// Sections
// ============================================================================

fn write_header(w: &mut ScriptWriter, header: &Header) {
    w.line("#!/bin/bash");
    w.line("set -e");
    w.blank();
    if w.comments {
        w.comment("macinit generated setup script");
        w.comment(format!(
            "Generated on {}",
            header.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        w.comment(format!(
            "{} apps, {} system tweaks",
            header.app_count, header.tweak_count
        ));
        w.blank();
    }
}

fn write_preflight(w: &mut ScriptWriter, apps: &[&App]) {
    if !apps.iter().any(|app| app.source.needs_homebrew()) {
        return;
    }

    w.comment("Pre-installation checks");
    w.line("if ! command -v brew &> /dev/null; then");
    w.line(r#"  echo "Installing Homebrew...""#);
    w.line(format!(r#"  /bin/bash -c "$(curl -fsSL {HOMEBREW_INSTALL_URL})""#));
    w.line("  if [ -x /opt/homebrew/bin/brew ]; then");
    w.line(r#"    eval "$(/opt/homebrew/bin/brew shellenv)""#);
    w.line("  fi");
    w.line("fi");

    if apps.iter().any(|app| app.source == InstallSource::AppStore) {
        w.line("if ! command -v mas &> /dev/null; then");
        w.line("  brew install mas");
        w.line("fi");
    }
    w.blank();
}

fn write_backup(w: &mut ScriptWriter, tweaks: &[ResolvedTweak<'_>]) {
    let mut domains: Vec<&str> = Vec::new();
    for domain in tweaks.iter().filter_map(|t| t.tweak.domain()) {
        if !domains.contains(&domain) {
            domains.push(domain);
        }
    }

    w.comment("Back up preference domains changed below");
    w.line(r#"BACKUP_DIR="$HOME/macinit-backup-$(date +%Y%m%d-%H%M%S)""#);
    w.line(r#"mkdir -p "$BACKUP_DIR""#);
    if domains.is_empty() {
        w.line(r#"echo "No preference domains to back up""#);
    } else {
        for domain in &domains {
            w.line(format!(
                r#"defaults export {} "$BACKUP_DIR/{}.plist" || true"#,
                domain,
                backup_file_stem(domain)
            ));
        }
        w.line(r#"echo "Preferences backed up to $BACKUP_DIR""#);
    }
    w.blank();
}

fn write_install(w: &mut ScriptWriter, apps: &[&App], parallel: bool) {
    if apps.is_empty() {
        return;
    }

    w.comment("Install Applications");
    if parallel {
        let casks = package_ids(apps, InstallSource::Cask);
        if !casks.is_empty() {
            w.line(format!("brew install --cask {}", casks.join(" ")));
        }
        let store_ids = package_ids(apps, InstallSource::AppStore);
        if !store_ids.is_empty() {
            w.line(format!("mas install {}", store_ids.join(" ")));
        }
        for app in apps.iter().filter(|a| a.source == InstallSource::DirectDownload) {
            w.line(install_command(app));
        }
    } else {
        for app in apps {
            w.line(install_command(app));
        }
    }
    w.blank();
}

fn write_tweaks(w: &mut ScriptWriter, tweaks: &[ResolvedTweak<'_>]) {
    if tweaks.is_empty() {
        return;
    }

    w.comment("Apply System Preferences");
    for resolved in tweaks {
        let tweak = resolved.tweak;
        w.comment(tweak.name);
        if !tweak.description.is_empty() {
            w.comment(tweak.description);
        }
        if let Some(warning) = tweak.warning {
            w.comment(format!("WARNING: {warning}"));
        }
        w.line(resolved.command());
        w.blank();
    }
}

fn write_verification(w: &mut ScriptWriter, apps: &[&App]) {
    let checked: Vec<(&App, String)> = apps
        .iter()
        .filter_map(|app| presence_check(app).map(|check| (*app, check)))
        .collect();
    if checked.is_empty() {
        return;
    }

    w.comment("Verification");
    w.line(r#"echo "Verifying installations...""#);
    for (app, check) in checked {
        w.line(format!("if ! {check}; then"));
        w.line(format!(
            r#"  echo "WARNING: {} may not have installed correctly""#,
            app.name
        ));
        w.line("fi");
    }
    w.blank();
}

// ============================================================================
// Helpers
// ============================================================================

/// Per-app install command for sequential mode.
pub fn install_command(app: &App) -> String {
    match app.source {
        InstallSource::Cask => format!("brew install --cask {}", app.package_id),
        InstallSource::AppStore => format!("mas install {}", app.package_id),
        InstallSource::DirectDownload => {
            format!(r#"echo "Download {} manually: {}""#, app.name, app.package_id)
        }
    }
}

/// Shell condition that holds once `app` is installed; direct downloads have none.
fn presence_check(app: &App) -> Option<String> {
    match app.source {
        InstallSource::Cask => Some(format!("brew list --cask {} &> /dev/null", app.package_id)),
        InstallSource::AppStore => Some(format!(r#"mas list | grep -q "^{} ""#, app.package_id)),
        InstallSource::DirectDownload => None,
    }
}

fn package_ids(apps: &[&App], source: InstallSource) -> Vec<&'static str> {
    apps.iter()
        .filter(|a| a.source == source)
        .map(|a| a.package_id)
        .collect()
}

/// File name (without extension) used for a domain's exported plist.
fn backup_file_stem(domain: &str) -> String {
    domain.trim_start_matches('/').replace('/', "_")
}
