// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::getstate::GetState;
use std::fmt;
use std::time::Duration;

/// End-of-run totals as printed to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: u64,
    pub blocked: u64,
    pub successful: u64,
    pub failed: u64,
    pub elapsed: Duration,
}

impl Summary {
    pub fn from_state(state: &GetState) -> Self {
        Summary {
            total: state.total_requests(),
            blocked: state.blocked_requests(),
            successful: state.successful_requests(),
            failed: state.failed_requests(),
            elapsed: state.elapsed(),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn print(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total requests sent: {}", self.total)?;
        writeln!(f, "Blocked requests: {}", self.blocked)?;
        writeln!(f, "Successful requests: {}", self.successful)?;
        writeln!(f, "Failed requests: {}", self.failed)?;
        writeln!(f, "Execution time: {:?}", self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Verdict;

    #[test]
    fn test_render_all_zero() {
        let summary = Summary {
            total: 0,
            blocked: 0,
            successful: 0,
            failed: 0,
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(
            summary.render(),
            "Total requests sent: 0\n\
             Blocked requests: 0\n\
             Successful requests: 0\n\
             Failed requests: 0\n\
             Execution time: 1.5s\n"
        );
    }

    #[test]
    fn test_from_state() {
        let mut state = GetState::new();
        state.record(Verdict::Blocked);
        state.record(Verdict::Success);
        state.add_failure();
        state.finish();

        let summary = Summary::from_state(&state);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.blocked, 1);
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.elapsed, state.elapsed());
    }
}
