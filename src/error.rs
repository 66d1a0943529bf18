// File: error.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;

#[derive(Debug)]
pub enum ProbeError {
    FileAccess { path: String, source: std::io::Error },
    PayloadRead { path: String, source: std::io::Error },
    ResultFile(std::io::Error),
    RequestBuild(String),
    Transport { url: String, source: reqwest::Error },
    BodyRead(reqwest::Error),
    ErrorLog(std::io::Error),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileAccess { path, source } => {
                write!(f, "Failed to open file {}: {}", path, source)
            }
            Self::PayloadRead { path, source } => {
                write!(f, "Error reading file {}: {}", path, source)
            }
            Self::ResultFile(e) => write!(f, "Failed to create CSV file: {}", e),
            Self::RequestBuild(msg) => write!(f, "Failed to create request: {}", msg),
            Self::Transport { url, source } => {
                write!(f, "Failed to send request to {}: {}", url, source)
            }
            Self::BodyRead(e) => write!(f, "Failed to read response body: {}", e),
            Self::ErrorLog(e) => write!(f, "Failed to open error log file: {}", e),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } => Some(source),
            Self::PayloadRead { source, .. } => Some(source),
            Self::ResultFile(e) => Some(e),
            Self::RequestBuild(_) => None,
            Self::Transport { source, .. } => Some(source),
            Self::BodyRead(e) => Some(e),
            Self::ErrorLog(e) => Some(e),
        }
    }
}
