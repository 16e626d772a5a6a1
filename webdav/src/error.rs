// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// `WebDAV` client errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum WebDavError {
    /// Transport-level failure (DNS, TLS, connection refused, timeout).
    Network(String),

    /// Server answered with an unexpected HTTP status.
    Http(String),
}

impl fmt::Display for WebDavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {e}"),
            Self::Http(e) => write!(f, "HTTP error: {e}"),
        }
    }
}

impl std::error::Error for WebDavError {}

impl From<reqwest::Error> for WebDavError {
    fn from(e: reqwest::Error) -> Self {
        // Connection-class failures get their own variant so callers can
        // tell a dead server apart from a server that said no.
        if e.is_connect() || e.is_timeout() || e.is_request() {
            Self::Network(format!("connection failed: {e}"))
        } else {
            Self::Http(e.to_string())
        }
    }
}
