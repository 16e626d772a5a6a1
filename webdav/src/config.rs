// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Remote folder used when the configured sync path is blank or `/`.
pub const DEFAULT_SYNC_DIR: &str = "fuelog";

/// `WebDAV` server configuration.
///
/// Immutable once a client is constructed from it; changing credentials or
/// paths means building a new client.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct WebDavConfig {
    /// Base URL of the `WebDAV` server.
    pub url: String,
    /// Username for Basic authentication.
    pub username: String,
    /// Password for Basic authentication.
    pub password: String,
    /// Sync folder relative to the base URL. Blank, all-whitespace or `/`
    /// selects [`DEFAULT_SYNC_DIR`].
    #[serde(default)]
    pub path: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("fuelog-webdav/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for WebDavConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: String::new(),
            password: String::new(),
            path: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
