// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ConfigParameter;
use crate::error::ProbeError;
use crate::httpinner::HttpInner;
use log::{debug, trace};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Url;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Http {
    client: reqwest::Client,
}

impl Http {
    pub fn new(config: &ConfigParameter) -> Result<Self, ProbeError> {
        let agent = HeaderValue::from_str(config.user_agent())
            .map_err(|e| ProbeError::RequestBuild(format!("invalid user agent: {}", e)))?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, agent);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout()))
            .build()
            .map_err(|e| ProbeError::RequestBuild(e.to_string()))?;
        Ok(Http { client })
    }

    /// Sends one GET and reads the whole body. The response is dropped before
    /// returning on every path.
    ///
    /// URLs holding ASCII control bytes are refused. Other characters the URL
    /// parser escapes in the query (`<`, `>`, `"`, `'`) go out percent-encoded;
    /// the returned `HttpInner::url` is the URL as sent on the wire.
    pub async fn send(&self, url: &str) -> Result<HttpInner, ProbeError> {
        if let Some(pos) = url.bytes().position(|b| b.is_ascii_control()) {
            return Err(ProbeError::RequestBuild(format!(
                "invalid control character in URL at byte {}",
                pos
            )));
        }
        let parsed = Url::parse(url).map_err(|e| ProbeError::RequestBuild(e.to_string()))?;
        let request = self
            .client
            .get(parsed)
            .build()
            .map_err(|e| ProbeError::RequestBuild(e.to_string()))?;

        let sent = request.url().to_string();
        if sent != url {
            trace!("{} normalised to {}", url, sent);
        }
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| ProbeError::Transport {
                url: sent.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(ProbeError::BodyRead)?;
        debug!("{} -> {} ({} bytes)", sent, status, body.len());

        Ok(HttpInner::new_with_all(body.to_vec(), status, sent))
    }
}
