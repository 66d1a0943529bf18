// File: errorlog.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::error::ProbeError;
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only error log. The file is opened and closed around every entry,
/// so no handle is held between calls.
#[derive(Debug, Clone)]
pub struct ErrorLogger {
    path: PathBuf,
}

impl ErrorLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        ErrorLogger {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Appends `message`. A failure to write the log is printed to stdout and
    /// otherwise dropped.
    pub fn log(&self, message: &str) {
        debug!("{}", message);
        if let Err(e) = self.append(message) {
            println!("{}", e);
        }
    }

    pub fn append(&self, message: &str) -> Result<(), ProbeError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(ProbeError::ErrorLog)?;
        writeln!(file, "{}", escape_entry(message)).map_err(ProbeError::ErrorLog)?;
        file.flush().map_err(ProbeError::ErrorLog)
    }
}

/// One entry per line: embedded newlines are dropped and commas get a
/// backslash prefix.
fn escape_entry(message: &str) -> String {
    message
        .trim_end_matches(['\r', '\n'])
        .replace(['\r', '\n'], " ")
        .replace(',', "\\,")
}
