//! Runs the configured checks in order, stopping at the first fatal failure.

use std::io::Write;
use std::sync::Arc;

use namecheck_core::error::Result;

use crate::checker::Checker;
use crate::config::RunnerConfig;
use crate::directory::StaticDirectory;

/// Build the checker described by `cfg`.
pub fn build_checker(cfg: &RunnerConfig) -> Result<Checker> {
    let list = cfg.allow_list()?;
    Ok(Checker::new(Arc::new(StaticDirectory::new(list))))
}

/// Run every check in `cfg.checks`.
///
/// Returns on the first failure; later names are not checked.
pub async fn run<O, E>(cfg: &RunnerConfig, out: &mut O, err: &mut E) -> Result<()>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let checker = build_checker(cfg)?;
    tracing::info!(checks = cfg.checks.len(), names = cfg.names.len(), "running checks");

    for name in &cfg.checks {
        checker.check(name, out, err).await?;
    }
    Ok(())
}
