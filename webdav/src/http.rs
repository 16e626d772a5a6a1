// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with Basic authentication.

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::WebDavConfig;
use crate::error::WebDavError;

/// HTTP client for `WebDAV` operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: WebDavConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: WebDavConfig) -> Result<Self, WebDavError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request carrying Basic authentication.
    ///
    /// `WebDAV` here is stateless per request: credentials are attached to
    /// every call, nothing is cached or refreshed.
    pub fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&self.config.username, Some(&self.config.password))
    }

    /// Executes a request, mapping transport failures only.
    ///
    /// Status interpretation stays with the caller: `WebDAV` operations
    /// disagree on which codes mean success (MKCOL treats 405 as fine).
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the transport
    /// failed mid-flight.
    pub async fn send(&self, req: RequestBuilder) -> Result<Response, WebDavError> {
        Ok(req.send().await?)
    }
}
