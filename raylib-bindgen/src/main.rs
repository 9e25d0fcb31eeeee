// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Offline binding generator for the raylib symbol table.
//!
//! Reads `raylib.h` from the working directory and writes `generated.rs`
//! next to it, ready to be copied into `raylib-sys/src/`. There are no
//! flags: the tool does one thing against fixed paths. The exit code is
//! nonzero on any I/O or classification failure.

mod classify;
mod emit;
mod error;
mod scrape;

use std::process::ExitCode;

use tracing::{error, info};

use crate::error::Result;

const INPUT_PATH: &str = "raylib.h";
const OUTPUT_PATH: &str = "generated.rs";

fn run() -> Result<()> {
    let source = std::fs::read_to_string(INPUT_PATH)?;
    let lines: Vec<&str> = source.split('\n').collect();
    info!(lines = lines.len(), "read {INPUT_PATH}");

    let versions = scrape::scrape_versions(&lines)?;
    info!(version = %versions.full, "scraped version constants");

    let colors = scrape::scrape_colors(&lines)?;
    info!(colors = colors.len(), "scraped color table");

    let declarations = scrape::scrape_functions(&lines)?;
    info!(functions = declarations.len(), "scraped declarations");

    let rendered = emit::render(&versions, &colors, &declarations)?;
    std::fs::write(OUTPUT_PATH, rendered)?;
    info!("wrote {OUTPUT_PATH}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
