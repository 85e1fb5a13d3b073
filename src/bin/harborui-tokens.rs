//! Composition root for the offline token build.
//!
//! Invoked with no flags: reads the fixed-path token source and writes the
//! CSS/TypeScript/JSON artifacts. Failures go to stderr with a nonzero exit.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use harborui::pipeline;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match build() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("harborui-tokens: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn build() -> anyhow::Result<()> {
    pipeline::run(
        Path::new(pipeline::SOURCE_PATH),
        Path::new(pipeline::OUT_DIR),
    )
    .context("token build failed")?;
    Ok(())
}
