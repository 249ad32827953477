//! # IoT Runtime
//!
//! Entry point for the `iot_runtime` binary. Run with `--help` for options.

#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use runtime::RunConfig;
use std::io::IsTerminal;

fn main() -> Result<()> {
    let config = RunConfig::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runtime::run(&config, &mut out)?;
    Ok(())
}
