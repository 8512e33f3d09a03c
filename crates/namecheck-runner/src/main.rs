//! namecheck runner binary.
//!
//! Loads `namecheck.yaml` when present (defaults otherwise), runs each
//! configured check, and exits non-zero on the first fatal failure.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use namecheck_runner::{config, runner};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cfg = match config::load_or_default(config::DEFAULT_CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "config load failed");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = io::stdout();
    let mut err = io::stderr();

    match runner::run(&cfg, &mut out, &mut err).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "check failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
