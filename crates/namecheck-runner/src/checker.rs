//! Checker: turns a lookup outcome into output lines or a fatal failure.

use std::io::Write;
use std::sync::Arc;

use namecheck_core::error::{NameCheckError, Result};

use crate::directory::NameDirectory;

/// First line written for a found name.
pub const FOUND_BANNER: &str = "It was found.";

pub struct Checker {
    directory: Arc<dyn NameDirectory>,
}

impl Checker {
    pub fn new(directory: Arc<dyn NameDirectory>) -> Self {
        Self { directory }
    }

    /// Check one name.
    ///
    /// Found: writes the banner and the value to `out`.
    /// Not found: writes the lookup error to `err` and returns
    /// `NameCheckError::Fatal`. Nothing reaches `out` in that case.
    pub async fn check<O, E>(&self, name: &str, out: &mut O, err: &mut E) -> Result<()>
    where
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        let outcome = self.directory.lookup(name).await;
        tracing::debug!(name, found = outcome.is_ok(), "lookup resolved");

        match outcome {
            Ok(value) => {
                writeln!(out, "{FOUND_BANNER}")?;
                writeln!(out, "{value}")?;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(name, code = e.code().as_str(), "lookup failed");
                writeln!(err, "{e}")?;
                Err(NameCheckError::Fatal)
            }
        }
    }
}
