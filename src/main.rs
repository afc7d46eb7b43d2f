//! kerrscalar CLI - parameter loader and checker
//!
//! Thin wrapper over [`kerrscalar::cli`]; all logic lives in the library.

use kerrscalar::cli::{run_cli, Args};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kerrscalar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run_cli(Args::parse())
}
