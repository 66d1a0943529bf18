// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;

use crate::config::{
    ConfigParameter, DEFAULT_BLOCKED_MARKER, DEFAULT_ERROR_LOG, DEFAULT_PAYLOAD_FILE,
    DEFAULT_RESULTS_FILE, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(help = "Target URL; each payload is sent as ?payload=<payload>")]
    pub url: Option<String>,

    #[arg(short = 'i', long = "payloads", default_value = DEFAULT_PAYLOAD_FILE)]
    pub payloads: String,

    #[arg(short = 'o', long = "output", default_value = DEFAULT_RESULTS_FILE)]
    pub output: String,

    #[arg(short = 'e', long = "error-log", default_value = DEFAULT_ERROR_LOG)]
    pub error_log: String,

    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = DEFAULT_TIMEOUT,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(
        long = "marker",
        default_value = DEFAULT_BLOCKED_MARKER,
        help = "Body text that identifies a block page"
    )]
    pub marker: String,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Do not print a line per request"
    )]
    pub quiet: bool,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,
}

impl Cli {
    /// `None` when no target URL was given.
    pub fn to_config(&self) -> Option<ConfigParameter> {
        let url = self.url.as_ref()?;
        let mut config = ConfigParameter::new();
        config.set_base_url(url.as_str());
        config.set_payload_file(self.payloads.as_str());
        config.set_results_file(self.output.as_str());
        config.set_error_log(self.error_log.as_str());
        config.set_timeout(self.timeout);
        config.set_user_agent(self.user_agent.as_str());
        config.set_blocked_marker(self.marker.as_str());
        config.set_quiet(self.quiet);
        Some(config)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Warn,
        }
    }
}

pub fn usage() -> String {
    format!("Usage: {} <URL>", env!("CARGO_PKG_NAME"))
}
