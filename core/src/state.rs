// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Durable sync state, so restarts can still display the last sync time.

use std::io;
use std::path::Path;

use jiff::Timestamp;
use tokio::fs;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    last_sync_time: Timestamp,
}

/// Loads the last successful sync time from disk.
///
/// A missing file means no sync has happened yet; an unreadable or corrupt
/// file is tolerated and treated the same way.
pub(crate) async fn load_last_sync(path: &Path) -> Option<Timestamp> {
    match fs::read_to_string(path).await {
        Ok(content) => match serde_json::from_str::<PersistedState>(&content) {
            Ok(state) => Some(state.last_sync_time),
            Err(err) => {
                tracing::warn!(path = %path.display(), err = %err, "failed to parse sync state");
                None
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => {
            tracing::warn!(path = %path.display(), err = %err, "failed to read sync state");
            None
        }
    }
}

/// Persists the last successful sync time.
///
/// Best-effort: a write failure is logged and never fails the upload that
/// produced it.
pub(crate) async fn store_last_sync(path: &Path, time: Timestamp) {
    let state = PersistedState {
        last_sync_time: time,
    };
    let content = match serde_json::to_string(&state) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(err = %err, "failed to serialize sync state");
            return;
        }
    };

    if let Err(err) = fs::write(path, content).await {
        tracing::warn!(path = %path.display(), err = %err, "failed to write sync state");
    }
}
