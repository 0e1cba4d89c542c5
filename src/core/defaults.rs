use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;

/// Optional per-setup overrides, read from the root of SETUP-DIR.
pub const SETUP_CONFIG_FILE: &str = "setup.json";

/// Names of the files making up a setup directory and a generated fixture.
///
/// Every field can be overridden via `setup.json`; missing fields keep the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupLayout {
    #[serde(default = "default_cases_file")]
    pub cases_file: String,

    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    #[serde(default = "default_definitions_file")]
    pub definitions_file: String,

    #[serde(default = "default_suite_file")]
    pub suite_file: String,

    #[serde(default = "default_common_file")]
    pub common_file: String,
}

impl Default for SetupLayout {
    fn default() -> Self {
        Self {
            cases_file: default_cases_file(),
            template_dir: default_template_dir(),
            definitions_file: default_definitions_file(),
            suite_file: default_suite_file(),
            common_file: default_common_file(),
        }
    }
}

impl SetupLayout {
    /// Load the layout for `setup_dir`, falling back to defaults when it has
    /// no `setup.json`.
    pub fn load(setup_dir: &Path) -> Result<Self> {
        let path = setup_dir.join(SETUP_CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = io::read_file(&path, "read setup config")?;
        let layout: SetupLayout = serde_json::from_str(&content)
            .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;
        crate::log_status!("setup", "Using layout overrides from {}", path.display());
        Ok(layout)
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_cases_file() -> String {
    "cases.txt".to_string()
}

fn default_template_dir() -> String {
    "template".to_string()
}

fn default_definitions_file() -> String {
    "defs.xly".to_string()
}

fn default_suite_file() -> String {
    "exactly.suite".to_string()
}

fn default_common_file() -> String {
    "common.xly".to_string()
}
