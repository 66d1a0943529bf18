// File: httpinner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

/// A fully read response to one payload request.
#[derive(Debug, Clone)]
pub struct HttpInner {
    body: Vec<u8>,
    status: u16,
    url: String,
}

impl HttpInner {
    pub fn new_with_all(body: Vec<u8>, status: u16, url: String) -> Self {
        HttpInner { body, status, url }
    }

    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
