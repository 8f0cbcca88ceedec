//! Generation result returned to callers.

use serde::{Deserialize, Serialize};

/// Script text plus everything a caller needs to present it.
///
/// Serialized with camelCase keys so a saved result reads the same as the
/// configuration files next to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub script: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Minutes.
    pub estimated_time: u32,
    pub requires_sudo: bool,
    pub will_restart: bool,
}

impl GenerationResult {
    /// A rendered script with its aggregates.
    pub fn success(
        script: String,
        warnings: Vec<String>,
        estimated_time: u32,
        requires_sudo: bool,
        will_restart: bool,
    ) -> Self {
        Self {
            script,
            errors: Vec::new(),
            warnings,
            estimated_time,
            requires_sudo,
            will_restart,
        }
    }

    /// An error stub. Aggregates are zeroed because nothing will run.
    pub fn failed(stub: String, errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            script: stub,
            errors,
            warnings,
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.script.lines().count()
    }
}
