//! Runner config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use namecheck_core::error::{NameCheckError, Result};

pub use schema::RunnerConfig;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "namecheck.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<RunnerConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        NameCheckError::Io(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RunnerConfig> {
    let cfg: RunnerConfig = serde_yaml::from_str(s)
        .map_err(|e| NameCheckError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` when it exists, otherwise fall back to built-in defaults.
///
/// A dangling symlink counts as present and fails the load.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<RunnerConfig> {
    let path = path.as_ref();
    if fs::symlink_metadata(path).is_ok() {
        load_from_file(path)
    } else {
        tracing::debug!(path = %path.display(), "config file absent, using defaults");
        Ok(RunnerConfig::default())
    }
}
