//! Script generator: the single entry point wiring validation, resolution,
//! rendering and reporting together.
//!
//! Generation never fails with `Err`. Bad selections come back as a
//! [`GenerationResult`] whose `errors` are populated and whose script is an
//! error stub.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::ScriptGenerationOptions;
use crate::logic::render::{self, Header};
use crate::logic::report::GenerationResult;
use crate::logic::resolver;
use crate::logic::validator;
use crate::selection::Selection;

/// Stateless generator over a catalog and a fixed set of options.
#[derive(Debug, Clone, Copy)]
pub struct ScriptGenerator<'c> {
    catalog: &'c Catalog,
    options: ScriptGenerationOptions,
}

impl ScriptGenerator<'static> {
    /// Generator over the built-in catalog.
    pub fn new(options: ScriptGenerationOptions) -> Self {
        Self::with_catalog(Catalog::builtin(), options)
    }
}

impl Default for ScriptGenerator<'static> {
    fn default() -> Self {
        Self::new(ScriptGenerationOptions::default())
    }
}

impl<'c> ScriptGenerator<'c> {
    pub fn with_catalog(catalog: &'c Catalog, options: ScriptGenerationOptions) -> Self {
        Self { catalog, options }
    }

    pub fn options(&self) -> &ScriptGenerationOptions {
        &self.options
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Generate a script stamped with the current time.
    pub fn generate(&self, selection: &Selection) -> GenerationResult {
        self.generate_at(selection, Utc::now())
    }

    /// Generate a script stamped with `generated_at`.
    ///
    /// For a fixed timestamp the output is byte-identical across calls.
    pub fn generate_at(&self, selection: &Selection, generated_at: DateTime<Utc>) -> GenerationResult {
        let app_ids = selection.unique_app_ids();
        let header = Header {
            generated_at,
            app_count: app_ids.len(),
            tweak_count: selection.tweaks.selected_count(),
        };

        let report = validator::validate(self.catalog, &app_ids, &selection.tweaks);
        if report.is_fatal() {
            info!(errors = report.errors.len(), "selection rejected");
            let stub = render::render_error_stub(&report.errors, &self.options, &header);
            return GenerationResult::failed(stub, report.errors, report.warnings);
        }

        let apps = resolver::resolve_apps(self.catalog, &app_ids);
        let tweaks = resolver::resolve_tweaks(self.catalog, &selection.tweaks);
        let script = render::render(&apps, &tweaks, &self.options, &header);
        debug!(lines = script.lines().count(), "rendered script");

        GenerationResult::success(
            script,
            report.warnings,
            resolver::estimate_minutes(apps.len(), tweaks.len()),
            resolver::requires_sudo(&tweaks),
            resolver::will_restart(&tweaks),
        )
    }
}

/// Generate against the built-in catalog with `options`.
pub fn generate_script(selection: &Selection, options: ScriptGenerationOptions) -> GenerationResult {
    ScriptGenerator::new(options).generate(selection)
}
