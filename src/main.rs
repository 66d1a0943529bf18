// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use simple_logger::SimpleLogger;
use std::io::IsTerminal;

use wafprobe::cli::{usage, Cli};
use wafprobe::runner::Runner;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(cli.log_level())
        .init()
        .context("Failed to initialize logger")?;

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let Some(config) = cli.to_config() else {
        println!("{}", usage());
        return Ok(());
    };

    debug!("Configuration: {:?}", config);
    Runner::run(config).await;
    Ok(())
}
