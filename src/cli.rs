use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::ScriptGenerationOptions;
use crate::config_file::SetupConfiguration;
use crate::selection::{Selection, TweakValue};
use crate::setup_state::SetupState;

/// macinit - generate a macOS setup script from a catalog of apps and tweaks
#[derive(Parser)]
#[command(name = "macinit")]
#[command(about = "Generate an idempotent macOS setup script for Homebrew apps and system tweaks")]
#[command(version)]
pub struct Cli {
    /// Log more (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a setup script
    Generate(GenerateArgs),
    /// Validate a configuration file against the catalog
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
    /// List catalog entries
    List {
        /// What to list
        #[arg(value_enum)]
        kind: ListKind,
        /// Only entries in this category (e.g. development, finder)
        #[arg(short, long)]
        category: Option<String>,
        /// Case-insensitive search over names and descriptions
        #[arg(short, long)]
        search: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Encode or decode share codes
    Share {
        #[command(subcommand)]
        action: ShareCommands,
    },
    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Apps,
    Tweaks,
    Presets,
}

#[derive(Subcommand)]
pub enum ShareCommands {
    /// Turn a configuration file into a share code
    Encode {
        /// Configuration file to encode
        config: PathBuf,
    },
    /// Turn a share code back into a configuration
    Decode {
        /// Share code produced by `share encode`
        code: String,
        /// Write the configuration here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// A `--tweak ID[=VALUE]` argument before the catalog gives it a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweakArg {
    pub id: String,
    pub value: Option<String>,
}

impl std::str::FromStr for TweakArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (id, value) = match s.split_once('=') {
            Some((id, value)) => (id, Some(value.to_string())),
            None => (s, None),
        };
        let id = id.trim();
        if id.is_empty() {
            return Err("tweak id must not be empty".to_string());
        }
        Ok(Self {
            id: id.to_string(),
            value,
        })
    }
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// App id to install (repeatable)
    #[arg(short, long = "app", value_name = "ID")]
    pub apps: Vec<String>,

    /// Tweak to apply, optionally with a value (repeatable)
    #[arg(short, long = "tweak", value_name = "ID[=VALUE]")]
    pub tweaks: Vec<TweakArg>,

    /// Start from a built-in preset
    #[arg(short, long, conflicts_with = "config")]
    pub preset: Option<String>,

    /// Start from a saved configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Omit comments from the script
    #[arg(long)]
    pub no_comments: bool,

    /// Omit the post-install verification section
    #[arg(long)]
    pub no_verify: bool,

    /// Install each source with a single combined command
    #[arg(long)]
    pub parallel: bool,

    /// Export touched preference domains before applying tweaks
    #[arg(long)]
    pub backup: bool,

    /// Write the script to this file (mode 0755) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the full generation result as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Build the session this invocation describes: a preset or saved
    /// configuration as the base, then the individual flags on top.
    pub fn to_state(&self, catalog: &Catalog) -> Result<SetupState> {
        let mut state = SetupState::new();

        if let Some(path) = &self.config {
            let config = SetupConfiguration::load_from_file(path)?;
            config
                .validate()
                .with_context(|| format!("Invalid configuration in {:?}", path))?;
            state.import(config);
        } else if let Some(preset) = &self.preset {
            state.apply_preset(catalog, preset)?;
        }

        for app in &self.apps {
            state.select_app(app);
        }
        for arg in &self.tweaks {
            let value = tweak_value(catalog, arg)?;
            state.set_tweak(&arg.id, Some(value));
        }

        state.set_options(self.apply_flags(state.options));
        Ok(state)
    }

    /// Flags only ever move options away from their defaults.
    pub fn apply_flags(&self, mut options: ScriptGenerationOptions) -> ScriptGenerationOptions {
        if self.no_comments {
            options.include_comments = false;
        }
        if self.no_verify {
            options.include_verification = false;
        }
        if self.parallel {
            options.parallel_installs = true;
        }
        if self.backup {
            options.create_backup = true;
        }
        options
    }

    pub fn selection(&self, catalog: &Catalog) -> Result<Selection> {
        Ok(self.to_state(catalog)?.selection)
    }
}

/// Type a `--tweak` value using the catalog.
///
/// A bare id means `true`. Unknown ids keep a best-effort value so the
/// generator can report them alongside any other errors.
fn tweak_value(catalog: &Catalog, arg: &TweakArg) -> Result<TweakValue> {
    let Some(raw) = &arg.value else {
        return Ok(TweakValue::Bool(true));
    };
    match catalog.tweak(&arg.id) {
        Some(tweak) => TweakValue::parse_as(tweak.value_type, raw)
            .with_context(|| format!("Invalid value for --tweak {}", arg.id)),
        None => Ok(TweakValue::text(raw.as_str())),
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
