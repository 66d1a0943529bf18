// File: classifier.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Blocked,
    Success,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Blocked => "Blocked",
            Verdict::Success => "Success",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive substring match on the body. Status code and headers are
/// not consulted.
pub fn classify(body: &str, marker: &str) -> Verdict {
    if body.contains(marker) {
        Verdict::Blocked
    } else {
        Verdict::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BLOCKED_MARKER;
    use rstest::rstest;

    #[rstest]
    #[case("<html><h1>Web Page Blocked</h1></html>", Verdict::Blocked)]
    #[case("Web Page Blocked", Verdict::Blocked)]
    #[case("prefixWeb Page Blockedsuffix", Verdict::Blocked)]
    #[case("web page blocked", Verdict::Success)]
    #[case("WEB PAGE BLOCKED", Verdict::Success)]
    #[case("Web Page  Blocked", Verdict::Success)]
    #[case("", Verdict::Success)]
    #[case("<html>Welcome</html>", Verdict::Success)]
    fn test_classify(#[case] body: &str, #[case] expected: Verdict) {
        assert_eq!(classify(body, DEFAULT_BLOCKED_MARKER), expected);
    }

    #[test]
    fn test_custom_marker() {
        assert_eq!(classify("Access Denied", "Access Denied"), Verdict::Blocked);
        assert_eq!(classify("Web Page Blocked", "Access Denied"), Verdict::Success);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Blocked.to_string(), "Blocked");
        assert_eq!(Verdict::Success.as_str(), "Success");
    }
}
