// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

pub const DEFAULT_PAYLOAD_FILE: &str = "./All_Attacks.txt";
pub const DEFAULT_RESULTS_FILE: &str = "results.csv";
pub const DEFAULT_ERROR_LOG: &str = "errors.log";
pub const DEFAULT_TIMEOUT: u64 = 10;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0";
pub const DEFAULT_BLOCKED_MARKER: &str = "Web Page Blocked";

#[derive(Debug, Clone)]
pub struct ConfigParameter {
    base_url: String,
    payload_file: String,
    results_file: String,
    error_log: String,
    timeout: u64,
    user_agent: String,
    blocked_marker: String,
    quiet: bool,
}

impl Default for ConfigParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParameter {
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            payload_file: DEFAULT_PAYLOAD_FILE.to_string(),
            results_file: DEFAULT_RESULTS_FILE.to_string(),
            error_log: DEFAULT_ERROR_LOG.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            blocked_marker: DEFAULT_BLOCKED_MARKER.to_string(),
            quiet: false,
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_payload_file(&mut self, payload_file: impl Into<String>) {
        self.payload_file = payload_file.into();
    }

    pub fn payload_file(&self) -> &str {
        &self.payload_file
    }

    pub fn set_results_file(&mut self, results_file: impl Into<String>) {
        self.results_file = results_file.into();
    }

    pub fn results_file(&self) -> &str {
        &self.results_file
    }

    pub fn set_error_log(&mut self, error_log: impl Into<String>) {
        self.error_log = error_log.into();
    }

    pub fn error_log(&self) -> &str {
        &self.error_log
    }

    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_blocked_marker(&mut self, blocked_marker: impl Into<String>) {
        self.blocked_marker = blocked_marker.into();
    }

    pub fn blocked_marker(&self) -> &str {
        &self.blocked_marker
    }

    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}
