// File: config_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::config::*;

    #[test]
    fn test_config_parameter_default() {
        let config = ConfigParameter::default();

        assert_eq!(config.base_url(), "");
        assert_eq!(config.payload_file(), "./All_Attacks.txt");
        assert_eq!(config.results_file(), "results.csv");
        assert_eq!(config.error_log(), "errors.log");
        assert_eq!(config.timeout(), 10);
        assert_eq!(config.blocked_marker(), "Web Page Blocked");
        assert_eq!(config.quiet(), false);
        assert!(config.user_agent().starts_with("Mozilla/5.0"));
        assert!(config.user_agent().ends_with("Firefox/89.0"));
    }

    #[test]
    fn test_set_base_url() {
        let mut config = ConfigParameter::new();

        config.set_base_url("http://target.local/search");
        assert_eq!(config.base_url(), "http://target.local/search");
    }

    #[test]
    fn test_set_files() {
        let mut config = ConfigParameter::new();

        config.set_payload_file("payloads/xss.txt");
        config.set_results_file("out/xss.csv");
        config.set_error_log("out/xss.log");

        assert_eq!(config.payload_file(), "payloads/xss.txt");
        assert_eq!(config.results_file(), "out/xss.csv");
        assert_eq!(config.error_log(), "out/xss.log");
    }

    #[test]
    fn test_set_timeout() {
        let mut config = ConfigParameter::new();

        config.set_timeout(3);
        assert_eq!(config.timeout(), 3);

        config.set_timeout(DEFAULT_TIMEOUT);
        assert_eq!(config.timeout(), 10);
    }

    #[test]
    fn test_set_marker_and_agent() {
        let mut config = ConfigParameter::new();

        config.set_blocked_marker("Request Rejected");
        config.set_user_agent("wafprobe-test");

        assert_eq!(config.blocked_marker(), "Request Rejected");
        assert_eq!(config.user_agent(), "wafprobe-test");
    }

    #[test]
    fn test_set_quiet() {
        let mut config = ConfigParameter::new();

        config.set_quiet(true);
        assert_eq!(config.quiet(), true);

        config.set_quiet(false);
        assert_eq!(config.quiet(), false);
    }
}
