//! macinit library
//!
//! Turns a selection of macOS apps and system tweaks into a deterministic,
//! idempotent bash setup script plus a report of errors, warnings and
//! estimated run time.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod config_file;
pub mod error;
pub mod generator;
pub mod logic;
pub mod selection;
pub mod setup_state;
pub mod types;

// Re-export main types for convenience
pub use catalog::{App, Catalog, Preset, Tweak, TweakSetting};
pub use config::ScriptGenerationOptions;
pub use config_file::SetupConfiguration;
pub use error::{MacInitError, Result};
pub use generator::{ScriptGenerator, generate_script};
pub use logic::report::GenerationResult;
pub use logic::resolver::ResolvedTweak;
pub use logic::validator::ValidationReport;
pub use selection::{Selection, TweakSelections, TweakValue};
pub use setup_state::{SetupState, SetupStep};
pub use types::{AppCategory, ImpactLevel, InstallSource, TweakCategory, ValueType};
