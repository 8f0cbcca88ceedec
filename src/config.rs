//! Script generation options
//!
//! Four independent switches controlling what the renderer emits. They never
//! change which apps or tweaks are selected.

use serde::{Deserialize, Serialize};

/// Configuration for one render of the setup script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScriptGenerationOptions {
    /// Emit section headers and per-tweak description/warning comments.
    pub include_comments: bool,
    /// Emit a post-install presence check for every app.
    pub include_verification: bool,
    /// Emit one combined install command per source instead of one per app.
    pub parallel_installs: bool,
    /// Export the touched preference domains before applying tweaks.
    pub create_backup: bool,
}

impl Default for ScriptGenerationOptions {
    fn default() -> Self {
        Self {
            include_comments: true,
            include_verification: true,
            parallel_installs: false,
            create_backup: false,
        }
    }
}

impl ScriptGenerationOptions {
    pub fn with_comments(mut self, enabled: bool) -> Self {
        self.include_comments = enabled;
        self
    }

    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.include_verification = enabled;
        self
    }

    pub fn with_parallel_installs(mut self, enabled: bool) -> Self {
        self.parallel_installs = enabled;
        self
    }

    pub fn with_backup(mut self, enabled: bool) -> Self {
        self.create_backup = enabled;
        self
    }
}
