//! Setup State
//!
//! Caller-owned state for an interactive setup session: the growing
//! selection, the chosen generation options, the wizard step and the most
//! recent generation result.
//!
//! # Design Principles
//!
//! - **Owned by the caller**: nothing here is global; pass `&mut SetupState`
//!   to whatever drives the session
//! - **Engine stays stateless**: `generate` hands a copy of the selection to
//!   [`ScriptGenerator`] and only stores what comes back
//! - **Selection edits clear nothing**: a stale result stays until the next
//!   `generate`, `import` or reset
//!
//! # Step Flow
//!
//! ```text
//! Welcome → Apps → Tweaks → Templates → Generate
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::ScriptGenerationOptions;
use crate::config_file::SetupConfiguration;
use crate::error::{MacInitError, Result};
use crate::generator::ScriptGenerator;
use crate::logic::report::GenerationResult;
use crate::selection::{Selection, TweakValue};

/// Wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum SetupStep {
    #[default]
    Welcome = 0,
    Apps = 1,
    Tweaks = 2,
    Templates = 3,
    Generate = 4,
}

impl SetupStep {
    const LAST: u8 = Self::Generate as u8;

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Percent complete: step index over the last index.
    pub const fn progress(self) -> u8 {
        (self.index() as u16 * 100 / Self::LAST as u16) as u8
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::Apps),
            Self::Apps => Some(Self::Tweaks),
            Self::Tweaks => Some(Self::Templates),
            Self::Templates => Some(Self::Generate),
            Self::Generate => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Welcome => None,
            Self::Apps => Some(Self::Welcome),
            Self::Tweaks => Some(Self::Apps),
            Self::Templates => Some(Self::Tweaks),
            Self::Generate => Some(Self::Templates),
        }
    }
}

/// One setup session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupState {
    pub selection: Selection,
    pub options: ScriptGenerationOptions,
    /// Preset the selection was seeded from, if any.
    pub template: Option<String>,
    pub step: SetupStep,
    pub result: Option<GenerationResult>,
}

impl SetupState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Add an app; selecting it twice is a no-op.
    pub fn select_app(&mut self, id: &str) {
        if !self.is_app_selected(id) {
            self.selection.apps.push(id.to_string());
        }
    }

    pub fn deselect_app(&mut self, id: &str) {
        self.selection.apps.retain(|app| app != id);
    }

    /// Select an unselected app, deselect a selected one.
    pub fn toggle_app(&mut self, id: &str) {
        if self.is_app_selected(id) {
            self.deselect_app(id);
        } else {
            self.select_app(id);
        }
    }

    pub fn is_app_selected(&self, id: &str) -> bool {
        self.selection.apps.iter().any(|app| app == id)
    }

    /// Toggle a tweak without naming a value.
    ///
    /// | Current | After |
    /// |---------|-------|
    /// | unset | `true` |
    /// | boolean | negated |
    /// | any other value | unset |
    pub fn toggle_tweak(&mut self, id: &str) {
        match self.selection.tweaks.value(id) {
            None => self.selection.tweaks.insert(id, Some(TweakValue::Bool(true))),
            Some(TweakValue::Bool(current)) => {
                let flipped = !current;
                self.selection.tweaks.insert(id, Some(TweakValue::Bool(flipped)));
            }
            Some(_) => {
                self.selection.tweaks.remove(id);
            }
        }
    }

    /// Set a tweak to an explicit value; `None` deselects it.
    pub fn set_tweak(&mut self, id: &str, value: Option<TweakValue>) {
        match value {
            Some(value) => self.selection.tweaks.insert(id, Some(value)),
            None => {
                self.selection.tweaks.remove(id);
            }
        }
    }

    // ========================================================================
    // Templates
    // ========================================================================

    /// Replace the selection with a preset's apps and its tweaks' default values.
    pub fn apply_preset(&mut self, catalog: &Catalog, id: &str) -> Result<()> {
        let preset = catalog
            .preset(id)
            .ok_or_else(|| MacInitError::validation(format!("Unknown preset ID: {id}")))?;

        let mut selection = Selection::new();
        for app in preset.apps {
            if !selection.apps.iter().any(|a| a == app) {
                selection.apps.push(app.to_string());
            }
        }
        for tweak_id in preset.tweaks {
            if let Some(tweak) = catalog.tweak(tweak_id) {
                selection.tweaks.insert(*tweak_id, Some(tweak.default_value.clone()));
            }
        }

        debug!(
            preset = id,
            apps = selection.apps.len(),
            tweaks = selection.tweaks.selected_count(),
            "applied preset"
        );
        self.selection = selection;
        self.template = Some(id.to_string());
        Ok(())
    }

    /// Forget which preset seeded the selection. The selection itself stays.
    pub fn clear_template(&mut self) {
        self.template = None;
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub fn set_step(&mut self, step: SetupStep) {
        self.step = step;
    }

    pub fn progress(&self) -> u8 {
        self.step.progress()
    }

    pub fn set_options(&mut self, options: ScriptGenerationOptions) {
        self.options = options;
    }

    /// Load an imported configuration and jump to the final step.
    pub fn import(&mut self, config: SetupConfiguration) {
        self.selection = Selection {
            apps: config.apps,
            tweaks: config.tweaks,
        };
        self.options = config.options;
        self.template = None;
        self.result = None;
        self.step = SetupStep::Generate;
    }

    /// Clear the selection and result but keep the chosen options.
    pub fn reset_selection(&mut self) {
        self.selection = Selection::new();
        self.template = None;
        self.result = None;
        self.step = SetupStep::Welcome;
    }

    /// Back to a fresh session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a script from the current selection and keep the result.
    pub fn generate(&mut self, catalog: &Catalog) -> &GenerationResult {
        self.generate_at(catalog, Utc::now())
    }

    pub fn generate_at(&mut self, catalog: &Catalog, generated_at: DateTime<Utc>) -> &GenerationResult {
        let result = ScriptGenerator::with_catalog(catalog, self.options)
            .generate_at(&self.selection, generated_at);
        self.result.insert(result)
    }
}
