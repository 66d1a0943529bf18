// File: getstate.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::classifier::Verdict;
use std::time::{Duration, Instant};

/// Run counters. `total` always equals `blocked + successful`; failed
/// payloads are counted separately and never reach `total`.
#[derive(Debug, Clone, Copy)]
pub struct GetState {
    total_requests: u64,
    blocked_requests: u64,
    successful_requests: u64,
    failed_requests: u64,
    start_time: Instant,
    end_time: Option<Instant>,
}

impl GetState {
    pub fn new() -> GetState {
        GetState {
            total_requests: 0,
            blocked_requests: 0,
            successful_requests: 0,
            failed_requests: 0,
            start_time: Instant::now(),
            end_time: None,
        }
    }

    pub fn record(&mut self, verdict: Verdict) {
        self.total_requests += 1;
        match verdict {
            Verdict::Blocked => self.blocked_requests += 1,
            Verdict::Success => self.successful_requests += 1,
        }
    }

    pub fn add_failure(&mut self) {
        self.failed_requests += 1;
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub fn blocked_requests(&self) -> u64 {
        self.blocked_requests
    }

    pub fn successful_requests(&self) -> u64 {
        self.successful_requests
    }

    pub fn failed_requests(&self) -> u64 {
        self.failed_requests
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn end_time(&self) -> Option<Instant> {
        self.end_time
    }

    /// Time between construction and `finish`, or until now if still running.
    pub fn elapsed(&self) -> Duration {
        self.end_time
            .unwrap_or_else(Instant::now)
            .duration_since(self.start_time)
    }
}

impl Default for GetState {
    fn default() -> Self {
        Self::new()
    }
}
