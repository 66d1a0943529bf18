// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wafprobe::config::ConfigParameter;
use wiremock::{MockServer, ResponseTemplate};

pub const BLOCK_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Request Rejected</title></head>
<body>
    <h1>Web Page Blocked</h1>
    <p>The page you requested was blocked by the security policy.</p>
</body>
</html>"#;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn create_block_response() -> ResponseTemplate {
    ResponseTemplate::new(403).set_body_string(BLOCK_PAGE)
}

pub fn create_html_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(content)
        .append_header("content-type", "text/html")
}

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(payloads: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("All_Attacks.txt"), payloads).unwrap();
        Workspace { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config(&self, base_url: &str) -> ConfigParameter {
        let mut config = ConfigParameter::new();
        config.set_base_url(base_url);
        config.set_payload_file(self.path("All_Attacks.txt").to_str().unwrap());
        config.set_results_file(self.path("results.csv").to_str().unwrap());
        config.set_error_log(self.path("errors.log").to_str().unwrap());
        config
    }

    pub fn results(&self) -> Vec<String> {
        fs::read_to_string(self.path("results.csv"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn error_lines(&self) -> Vec<String> {
        match fs::read_to_string(self.path("errors.log")) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}
