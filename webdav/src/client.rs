// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `WebDAV` client for remote backup file operations.

use std::sync::Arc;

use jiff::Timestamp;
use jiff::fmt::rfc2822;
use reqwest::Method;

use crate::config::{DEFAULT_SYNC_DIR, WebDavConfig};
use crate::error::WebDavError;
use crate::http::HttpClient;

/// `WebDAV` client for storing and retrieving backup files.
///
/// Stateless between calls aside from the configuration it was built from;
/// every request carries Basic authentication.
///
/// # Example
///
/// ```ignore
/// use fuelog_webdav::{WebDavClient, WebDavConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WebDavConfig {
///     url: "https://dav.example.com".to_string(),
///     username: "user".to_string(),
///     password: "pass".to_string(),
///     path: "backups".to_string(),
///     ..Default::default()
/// };
///
/// let client = WebDavClient::new(config)?;
/// client.test_connection().await?;
/// client.upload_file("fuel-records-backup.csv", b"...").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebDavClient {
    http: Arc<HttpClient>,
    config: WebDavConfig,
}

impl WebDavClient {
    /// Creates a new `WebDAV` client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: WebDavConfig) -> Result<Self, WebDavError> {
        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Resolves the absolute URL of `filename` inside the sync folder.
    ///
    /// Pure and idempotent: the base URL is normalized to exactly one
    /// trailing slash, a blank or `/` sync path falls back to
    /// [`DEFAULT_SYNC_DIR`], and leading/trailing slashes on the path are
    /// normalized away before joining.
    #[must_use]
    pub fn resolve_path(&self, filename: &str) -> String {
        let base = self.config.url.trim_end_matches('/');

        let path = self.config.path.trim();
        let folder = if path.is_empty() || path == "/" {
            DEFAULT_SYNC_DIR
        } else {
            path.trim_start_matches('/').trim_end_matches('/')
        };

        format!("{base}/{folder}/{filename}")
    }

    /// Probes the server with a `Depth: 0` PROPFIND against the base URL.
    ///
    /// 2xx and 207 Multi-Status count as reachable.
    ///
    /// # Errors
    ///
    /// Returns [`WebDavError::Network`] for transport-class failures and
    /// [`WebDavError::Http`] with the status line for anything the server
    /// rejected.
    pub async fn test_connection(&self) -> Result<(), WebDavError> {
        let method = Method::from_bytes(b"PROPFIND")
            .map_err(|e| WebDavError::Http(format!("Invalid method: {e}")))?;

        let resp = self
            .http
            .send(
                self.http
                    .build_request(method, &self.config.url)
                    .header("Depth", "0")
                    .header("Content-Type", "application/xml"),
            )
            .await?;

        let status = resp.status();
        if status.is_success() || status == reqwest::StatusCode::MULTI_STATUS {
            tracing::debug!(url = %self.config.url, status = status.as_u16(), "server reachable");
            Ok(())
        } else {
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            Err(WebDavError::Http(format!(
                "HTTP {}: {reason}",
                status.as_u16()
            )))
        }
    }

    /// Creates the collection at `url` if it does not exist yet.
    ///
    /// 201 Created and 405 Method Not Allowed (collection already exists)
    /// both count as success. `WebDAV` has no atomic create-if-missing, so
    /// this is safe to call unconditionally before every upload.
    pub async fn ensure_directory(&self, url: &str) -> bool {
        match self.mkcol(url).await {
            Ok(ok) => ok,
            Err(err) => {
                tracing::warn!(url = %url, err = %err, "failed to create collection");
                false
            }
        }
    }

    async fn mkcol(&self, url: &str) -> Result<bool, WebDavError> {
        let method = Method::from_bytes(b"MKCOL")
            .map_err(|e| WebDavError::Http(format!("Invalid method: {e}")))?;

        let resp = self.http.send(self.http.build_request(method, url)).await?;
        Ok(matches!(resp.status().as_u16(), 201 | 405))
    }

    /// Uploads `content` as `filename` inside the sync folder.
    ///
    /// The parent collection is created best-effort first; if that fails
    /// the PUT is attempted anyway and fails on its own when the
    /// collection is truly missing.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or any non-2xx status, with
    /// the response body captured for diagnostics.
    pub async fn upload_file(&self, filename: &str, content: &[u8]) -> Result<(), WebDavError> {
        let url = self.resolve_path(filename);

        if let Some(dir) = parent_collection(&url) {
            self.ensure_directory(dir).await;
        }

        tracing::debug!(url = %url, bytes = content.len(), "uploading file");
        let resp = self
            .http
            .send(
                self.http
                    .build_request(Method::PUT, &url)
                    .header("Content-Type", "text/csv; charset=utf-8")
                    .body(content.to_vec()),
            )
            .await?;

        let status = resp.status();
        if status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "upload complete");
            Ok(())
        } else {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response".to_string());
            Err(WebDavError::Http(format!("HTTP {}: {body}", status.as_u16())))
        }
    }

    /// Downloads `filename` from the sync folder.
    ///
    /// Returns the body on 2xx and `None` for any other status.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn download_file(&self, filename: &str) -> Result<Option<String>, WebDavError> {
        let url = self.resolve_path(filename);
        let resp = self
            .http
            .send(self.http.build_request(Method::GET, &url))
            .await?;

        if resp.status().is_success() {
            Ok(Some(resp.text().await?))
        } else {
            Ok(None)
        }
    }

    /// Checks whether `filename` exists in the sync folder.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn file_exists(&self, filename: &str) -> Result<bool, WebDavError> {
        let url = self.resolve_path(filename);
        let resp = self
            .http
            .send(self.http.build_request(Method::HEAD, &url))
            .await?;
        Ok(resp.status().is_success())
    }

    /// Reads the `Last-Modified` time of `filename`, if the server reports
    /// one.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn last_modified(&self, filename: &str) -> Result<Option<Timestamp>, WebDavError> {
        let url = self.resolve_path(filename);
        let resp = self
            .http
            .send(self.http.build_request(Method::HEAD, &url))
            .await?;

        if !resp.status().is_success() {
            return Ok(None);
        }

        let Some(value) = resp
            .headers()
            .get("Last-Modified")
            .and_then(|v| v.to_str().ok())
        else {
            return Ok(None);
        };

        match rfc2822::DateTimeParser::new().parse_timestamp(value) {
            Ok(ts) => Ok(Some(ts)),
            Err(err) => {
                tracing::warn!(value, err = %err, "unparsable Last-Modified header");
                Ok(None)
            }
        }
    }
}

/// Everything up to and including the last `/` of an absolute URL.
fn parent_collection(url: &str) -> Option<&str> {
    url.rfind('/').and_then(|idx| url.get(..=idx))
}
