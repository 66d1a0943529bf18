// File: payload.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::error::ProbeError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

/// Forward-only sequence of payload lines, in file order.
///
/// Empty lines are yielded as empty payloads. A read error is yielded once,
/// after which the sequence is exhausted.
pub struct PayloadSource<R> {
    reader: BufReader<R>,
    path: String,
    buf: Vec<u8>,
    done: bool,
}

impl PayloadSource<File> {
    pub fn open(path: &str) -> Result<Self, ProbeError> {
        let file = File::open(path).map_err(|source| ProbeError::FileAccess {
            path: path.to_string(),
            source,
        })?;
        debug!("Reading payloads from {}", path);
        Ok(Self::from_reader(file, path))
    }
}

impl<R: Read> PayloadSource<R> {
    pub fn from_reader(reader: R, path: &str) -> Self {
        PayloadSource {
            reader: BufReader::new(reader),
            path: path.to_string(),
            buf: Vec::new(),
            done: false,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<R: Read> Iterator for PayloadSource<R> {
    type Item = Result<String, ProbeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(source) => {
                self.done = true;
                Some(Err(ProbeError::PayloadRead {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

/// Substitutes spaces with `%20` and `&` with `%28`, nothing else.
///
/// `%28` is the escape for `(`, not `&`. Targets see `%28` in place of every
/// ampersand; changing it would alter the request shape recorded by earlier runs.
pub fn encode_payload(payload: &str) -> String {
    payload.replace(' ', "%20").replace('&', "%28")
}

pub fn build_url(base_url: &str, encoded_payload: &str) -> String {
    format!("{}?payload={}", base_url, encoded_payload)
}
