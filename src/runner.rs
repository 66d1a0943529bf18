// File: runner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::classifier::{classify, Verdict};
use crate::config::ConfigParameter;
use crate::errorlog::ErrorLogger;
use crate::getstate::GetState;
use crate::http::Http;
use crate::payload::{build_url, encode_payload, PayloadSource};
use crate::recorder::{ResultRecorder, ResultRow};
use crate::report::Summary;
use colored::*;
use log::{info, warn};
use std::io::{Read, Write};

/// Drives one pass over the payload file, strictly one payload at a time.
pub struct Runner {
    config: ConfigParameter,
    http: Http,
    errors: ErrorLogger,
    state: GetState,
}

impl Runner {
    pub fn new(config: ConfigParameter, http: Http, state: GetState) -> Self {
        let errors = ErrorLogger::new(config.error_log());
        Runner {
            config,
            http,
            errors,
            state,
        }
    }

    pub fn state(&self) -> &GetState {
        &self.state
    }

    /// Runs the whole probe and prints the summary.
    ///
    /// Returns `None` when the results file or the HTTP client cannot be set
    /// up; the cause is in the error log and nothing is printed.
    pub async fn run(config: ConfigParameter) -> Option<Summary> {
        let state = GetState::new();
        let errors = ErrorLogger::new(config.error_log());

        let mut recorder = match ResultRecorder::create(config.results_file()) {
            Ok(recorder) => recorder,
            Err(e) => {
                warn!("{}", e);
                errors.log(&e.to_string());
                return None;
            }
        };

        let http = match Http::new(&config) {
            Ok(http) => http,
            Err(e) => {
                warn!("{}", e);
                errors.log(&e.to_string());
                return None;
            }
        };

        let mut runner = Runner::new(config, http, state);
        match PayloadSource::open(runner.config.payload_file()) {
            Ok(source) => runner.process(source, &mut recorder).await,
            Err(e) => {
                warn!("{}", e);
                runner.errors.log(&e.to_string());
            }
        }

        runner.state.finish();
        let summary = Summary::from_state(&runner.state);
        summary.print();
        Some(summary)
    }

    pub async fn process<R: Read, W: Write>(
        &mut self,
        source: PayloadSource<R>,
        recorder: &mut ResultRecorder<W>,
    ) {
        info!(
            "Probing {} with payloads from {}",
            self.config.base_url(),
            source.path()
        );

        for line in source {
            match line {
                Ok(payload) => self.process_payload(payload, recorder).await,
                Err(e) => {
                    self.errors.log(&e.to_string());
                    break;
                }
            }
        }
    }

    async fn process_payload<W: Write>(
        &mut self,
        payload: String,
        recorder: &mut ResultRecorder<W>,
    ) {
        let url = build_url(self.config.base_url(), &encode_payload(&payload));

        let response = match self.http.send(&url).await {
            Ok(response) => response,
            Err(e) => {
                self.errors.log(&e.to_string());
                self.state.add_failure();
                return;
            }
        };

        let verdict = classify(&response.body_text(), self.config.blocked_marker());
        self.state.record(verdict);

        if !self.config.quiet() {
            let status = match verdict {
                Verdict::Blocked => verdict.as_str().red().bold(),
                Verdict::Success => verdict.as_str().green(),
            };
            println!(" - STATUS: {} | REQUEST SENT: {}", status, response.url());
        }

        let row = ResultRow {
            status: verdict,
            payload,
            http_status: response.status(),
            content_length: response.content_length(),
        };
        if let Err(e) = recorder.write_row(&row) {
            self.errors.log(&e.to_string());
        }
    }
}
