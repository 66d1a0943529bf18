// File: recorder.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::classifier::Verdict;
use crate::error::ProbeError;
use std::fs::File;
use std::io::Write;

pub const HEADER: [&str; 4] = ["Status", "Payload", "HTTP Status", "Content Length"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub status: Verdict,
    pub payload: String,
    pub http_status: u16,
    pub content_length: usize,
}

/// Comma-separated result writer. Every row is flushed as soon as it is
/// written.
pub struct ResultRecorder<W: Write> {
    writer: W,
    rows: u64,
}

impl ResultRecorder<File> {
    /// Truncates any previous results at `path`.
    pub fn create(path: &str) -> Result<Self, ProbeError> {
        let file = File::create(path).map_err(ProbeError::ResultFile)?;
        Self::new(file)
    }
}

impl<W: Write> ResultRecorder<W> {
    pub fn new(writer: W) -> Result<Self, ProbeError> {
        let mut recorder = ResultRecorder { writer, rows: 0 };
        recorder.write_line(&HEADER)?;
        Ok(recorder)
    }

    pub fn write_row(&mut self, row: &ResultRow) -> Result<(), ProbeError> {
        let http_status = row.http_status.to_string();
        let content_length = row.content_length.to_string();
        self.write_line(&[
            row.status.as_str(),
            row.payload.as_str(),
            http_status.as_str(),
            content_length.as_str(),
        ])?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, fields: &[&str]) -> Result<(), ProbeError> {
        let line = fields
            .iter()
            .map(|f| escape_csv(f))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.writer, "{}", line).map_err(ProbeError::ResultFile)?;
        self.writer.flush().map_err(ProbeError::ResultFile)
    }
}

fn escape_csv(field: &str) -> String {
    let needs_quotes = field == "\\."
        || field.contains([',', '"', '\n', '\r'])
        || field.starts_with(char::is_whitespace);
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
