//! macinit - command-line entry point
//!
//! Diagnostics go to stderr through tracing; stdout carries only the script,
//! JSON or share code a command produces, so it can be piped.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::fs;
use std::io;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use macinit::catalog::{App, Catalog, Preset, Tweak};
use macinit::cli::{Cli, Commands, GenerateArgs, ListKind, ShareCommands};
use macinit::config_file::SetupConfiguration;
use macinit::types::{AppCategory, TweakCategory};

/// Initialize tracing on stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(io::stderr);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);
    debug!("CLI arguments parsed");

    match run(cli) {
        Ok(true) => exit(0),
        Ok(false) => exit(1),
        Err(e) => {
            error!("{e:?}");
            eprintln!("✗ {e:#}");
            exit(1);
        }
    }
}

/// Run one command. `Ok(false)` means the command completed but found errors.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Validate { config } => run_validate(&config),
        Commands::List {
            kind,
            category,
            search,
            json,
        } => {
            run_list(kind, category.as_deref(), search.as_deref(), json)?;
            Ok(true)
        }
        Commands::Share { action } => run_share(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "macinit", &mut io::stdout());
            Ok(true)
        }
    }
}

// ============================================================================
// generate
// ============================================================================

fn run_generate(args: &GenerateArgs) -> Result<bool> {
    let catalog = Catalog::builtin();
    let mut state = args.to_state(catalog)?;
    info!(
        apps = state.selection.apps.len(),
        tweaks = state.selection.tweaks.selected_count(),
        "generating setup script"
    );

    let result = state.generate(catalog);
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
    for err in &result.errors {
        eprintln!("error: {err}");
    }

    if args.json {
        let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        println!("{json}");
    } else if let Some(path) = args.output.as_deref().filter(|_| result.is_success()) {
        write_script(path, &result.script)?;
        info!("Wrote script to {:?}", path);
        eprintln!(
            "✓ Wrote {:?} ({} lines, about {} min{}{})",
            path,
            result.line_count(),
            result.estimated_time,
            if result.requires_sudo { ", needs sudo" } else { "" },
            if result.will_restart { ", relaunches system apps" } else { "" },
        );
    } else {
        print!("{}", result.script);
    }

    Ok(result.is_success())
}

/// Write the script and mark it executable.
fn write_script(path: &Path, script: &str) -> Result<()> {
    fs::write(path, script).with_context(|| format!("Failed to write script to {:?}", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to make {:?} executable", path))?;
    }

    Ok(())
}

// ============================================================================
// validate
// ============================================================================

fn run_validate(path: &Path) -> Result<bool> {
    info!("Validating configuration file: {:?}", path);
    let config = SetupConfiguration::load_from_file(path)?;
    config.validate()?;

    let report = config.check(Catalog::builtin());
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    if report.is_fatal() {
        for err in &report.errors {
            eprintln!("✗ {err}");
        }
        return Ok(false);
    }

    println!(
        "✓ Configuration file is valid: {} apps, {} tweaks",
        config.apps.len(),
        config.tweaks.selected_count()
    );
    Ok(true)
}

// ============================================================================
// list
// ============================================================================

fn run_list(kind: ListKind, category: Option<&str>, search: Option<&str>, json: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    match kind {
        ListKind::Apps => {
            let apps = filter_apps(catalog, category, search)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&apps)?);
            } else {
                for app in apps {
                    println!("{:<18} {:<24} {:<14} {}", app.id, app.name, app.category, app.source);
                }
            }
        }
        ListKind::Tweaks => {
            let tweaks = filter_tweaks(catalog, category, search)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tweaks)?);
            } else {
                for tweak in tweaks {
                    let sudo = if tweak.requires_sudo { "sudo" } else { "" };
                    println!(
                        "{:<30} {:<8} {:<12} {:<4} {}",
                        tweak.id, tweak.value_type, tweak.category, sudo, tweak.name
                    );
                }
            }
        }
        ListKind::Presets => {
            let presets = filter_presets(catalog, category, search);
            if json {
                println!("{}", serde_json::to_string_pretty(&presets)?);
            } else {
                for preset in presets {
                    println!(
                        "{:<24} {:<22} {} apps, {} tweaks",
                        preset.id,
                        preset.name,
                        preset.apps.len(),
                        preset.tweaks.len()
                    );
                }
            }
        }
    }
    Ok(())
}

fn filter_apps<'a>(catalog: &'a Catalog, category: Option<&str>, search: Option<&str>) -> Result<Vec<&'a App>> {
    let mut apps: Vec<&App> = match search {
        Some(query) => catalog.search_apps(query),
        None => catalog.apps().iter().collect(),
    };
    if let Some(name) = category {
        let category = AppCategory::from_str(&name.to_lowercase())
            .with_context(|| format!("Unknown app category: {name}"))?;
        apps.retain(|app| app.category == category);
    }
    Ok(apps)
}

fn filter_tweaks<'a>(catalog: &'a Catalog, category: Option<&str>, search: Option<&str>) -> Result<Vec<&'a Tweak>> {
    let mut tweaks: Vec<&Tweak> = match category {
        Some(name) => {
            let category = TweakCategory::from_str(&name.to_lowercase())
                .with_context(|| format!("Unknown tweak category: {name}"))?;
            catalog.tweaks_in(category)
        }
        None => catalog.tweaks().iter().collect(),
    };
    if let Some(query) = search {
        let hits = catalog.search_tweaks(query);
        tweaks.retain(|tweak| hits.iter().any(|hit| hit.id == tweak.id));
    }
    Ok(tweaks)
}

/// Presets have no category; `--category` matches the developer role instead.
fn filter_presets<'a>(catalog: &'a Catalog, role: Option<&str>, search: Option<&str>) -> Vec<&'a Preset> {
    let needle = search.map(|s| s.trim().to_lowercase());
    catalog
        .presets()
        .iter()
        .filter(|p| role.is_none_or(|r| p.role.is_some_and(|pr| pr.eq_ignore_ascii_case(r))))
        .filter(|p| {
            needle.as_deref().is_none_or(|n| {
                p.name.to_lowercase().contains(n) || p.description.to_lowercase().contains(n)
            })
        })
        .collect()
}

// ============================================================================
// share
// ============================================================================

fn run_share(action: ShareCommands) -> Result<bool> {
    match action {
        ShareCommands::Encode { config } => {
            let config = SetupConfiguration::load_from_file(&config)?;
            config.validate()?;
            println!("{}", config.encode_share_code()?);
            eprintln!("{}", config.share_text());
        }
        ShareCommands::Decode { code, output } => {
            let config = SetupConfiguration::decode_share_code(&code)?;
            config.validate()?;
            match output {
                Some(path) => {
                    config.save_to_file(&path)?;
                    eprintln!("✓ Saved configuration to {:?}", path);
                }
                None => println!("{}", serde_json::to_string_pretty(&config)?),
            }
        }
    }
    Ok(true)
}
