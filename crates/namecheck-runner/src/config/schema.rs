use serde::Deserialize;

use namecheck_core::allowlist::{AllowList, DEFAULT_NAMES};
use namecheck_core::error::{NameCheckError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    pub version: u32,

    /// Allow-list override.
    #[serde(default = "default_names")]
    pub names: Vec<String>,

    /// Names to check, in order.
    #[serde(default = "default_checks")]
    pub checks: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            names: default_names(),
            checks: default_checks(),
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NameCheckError::UnsupportedVersion);
        }
        if self.checks.is_empty() {
            return Err(NameCheckError::BadConfig("checks must not be empty".into()));
        }
        self.allow_list()?;
        Ok(())
    }

    pub fn allow_list(&self) -> Result<AllowList> {
        AllowList::new(self.names.clone())
    }
}

fn default_names() -> Vec<String> {
    DEFAULT_NAMES.iter().map(|s| s.to_string()).collect()
}
fn default_checks() -> Vec<String> {
    vec!["colin".into(), "nobody".into()]
}
