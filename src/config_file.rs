//! Configuration file handling for saving, loading and sharing setups.
//!
//! A `SetupConfiguration` is the portable form of a selection: JSON on disk,
//! or the same JSON packed into a URL-safe base64 share code.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::ScriptGenerationOptions;
use crate::error::MacInitError;
use crate::logic::validator::{self, ValidationReport};
use crate::selection::{Selection, TweakSelections};

/// Version written into new configurations.
pub const CONFIG_VERSION: &str = "1.0.0";

/// Major version this build can read.
const SUPPORTED_MAJOR: &str = "1";

/// A selection plus generation options that can be saved, loaded and shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupConfiguration {
    pub apps: Vec<String>,
    pub tweaks: TweakSelections,
    /// Missing in files written before options were exported.
    #[serde(default)]
    pub options: ScriptGenerationOptions,
    /// Milliseconds since the Unix epoch in JSON.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl SetupConfiguration {
    /// Snapshot `selection` and `options` at the current time.
    pub fn new(selection: &Selection, options: ScriptGenerationOptions) -> Self {
        Self {
            apps: selection.apps.clone(),
            tweaks: selection.tweaks.clone(),
            options,
            timestamp: Utc::now(),
            version: CONFIG_VERSION.to_string(),
        }
    }

    /// Snapshot a setup session.
    pub fn from_state(state: &crate::setup_state::SetupState) -> Self {
        Self::new(&state.selection, state.options)
    }

    pub fn to_selection(&self) -> Selection {
        Selection {
            apps: self.apps.clone(),
            tweaks: self.tweaks.clone(),
        }
    }

    /// Save configuration to a pretty-printed JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration's structure and version
    pub fn validate(&self) -> Result<()> {
        let version = self.version.trim();
        if version.is_empty() {
            anyhow::bail!("Configuration version must be specified");
        }
        let major = version.split('.').next().unwrap_or_default();
        if major != SUPPORTED_MAJOR {
            anyhow::bail!(
                "Unsupported configuration version {} (expected {}.x)",
                version,
                SUPPORTED_MAJOR
            );
        }

        if self.apps.iter().any(|id| id.trim().is_empty()) {
            anyhow::bail!("App ids must not be empty");
        }
        if self.tweaks.entries().any(|(id, _)| id.trim().is_empty()) {
            anyhow::bail!("Tweak ids must not be empty");
        }

        Ok(())
    }

    /// Check the selection against `catalog` the same way generation does.
    pub fn check(&self, catalog: &Catalog) -> ValidationReport {
        let selection = self.to_selection();
        validator::validate(catalog, &selection.unique_app_ids(), &selection.tweaks)
    }

    /// Encode as compact JSON in URL-safe base64 without padding.
    pub fn encode_share_code(&self) -> crate::error::Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// Decode a share code. Trailing `=` padding is tolerated.
    pub fn decode_share_code(code: &str) -> crate::error::Result<Self> {
        let trimmed = code.trim().trim_end_matches('=');
        if trimmed.is_empty() {
            return Err(MacInitError::share_code("empty code"));
        }
        let bytes = URL_SAFE_NO_PAD
            .decode(trimmed)
            .map_err(|e| MacInitError::share_code(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| MacInitError::share_code(e.to_string()))
    }

    /// One-line summary suitable for posting alongside a share code.
    pub fn share_text(&self) -> String {
        let apps = self.to_selection().unique_app_ids().len();
        let tweaks = self.tweaks.selected_count();
        format!("Just set up my Mac with {apps} apps and {tweaks} system tweaks using macinit!")
    }
}
