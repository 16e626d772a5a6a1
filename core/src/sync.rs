// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `WebDAV` synchronization management: debounced and periodic uploads of
//! the backup document, with serialized uploads and observable status.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fuelog_webdav::{WebDavClient, WebDavConfig, WebDavError};
use jiff::Timestamp;
use tokio::task::JoinHandle;

use crate::backup::{BACKUP_FILENAME, encode_backup};
use crate::record::FuelRecord;
use crate::source::DataSource;
use crate::state;
use crate::vehicle::Vehicle;

/// Quiet period after the last local write before an upload starts.
pub const DEBOUNCE_DELAY: Duration = Duration::from_secs(30);

/// Period of the unconditional background sync.
pub const AUTO_SYNC_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Sync progress as observed from outside.
///
/// Replaced as a whole record on every transition; readers never see a
/// half-updated status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncStatus {
    /// Completion time of the last successful upload.
    pub last_sync_time: Option<Timestamp>,
    /// Whether an upload is currently in flight.
    pub is_syncing: bool,
    /// Message of the last failed upload, cleared by the next success.
    pub error: Option<String>,
}

/// Tunables for a [`SyncManager`].
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Whether [`SyncManager::start_auto_sync`] may arm the periodic timer.
    pub auto_sync: bool,
    /// Debounce window for [`SyncManager::schedule_sync`].
    pub debounce_delay: Duration,
    /// Interval of the periodic sync.
    pub sync_interval: Duration,
    /// Where to persist the last successful sync time, if anywhere.
    pub state_path: Option<PathBuf>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            auto_sync: true,
            debounce_delay: DEBOUNCE_DELAY,
            sync_interval: AUTO_SYNC_INTERVAL,
            state_path: None,
        }
    }
}

type StatusCallback = Arc<dyn Fn(SyncStatus) + Send + Sync>;

struct Inner {
    client: Option<WebDavClient>,
    source: Arc<dyn DataSource>,
    options: SyncOptions,
    status: Mutex<SyncStatus>,
    on_status_change: Mutex<Option<StatusCallback>>,
    upload_lock: tokio::sync::Mutex<()>,
    debounce_timer: Mutex<Option<JoinHandle<()>>>,
    periodic_timer: Mutex<Option<JoinHandle<()>>>,
}

/// Orchestrates backups to a `WebDAV` server.
///
/// Cheap to clone; clones share one sync session. Without a configuration
/// the manager degrades to a no-op: every operation skips silently.
///
/// At most one upload is in flight at any time. A trigger arriving while an
/// upload runs waits for it and executes right after, reading the data
/// source again at that point, so the most recent data is eventually
/// pushed.
///
/// # Example
///
/// ```ignore
/// use fuelog_core::{SyncManager, SyncOptions};
///
/// # async fn example(
/// #     config: fuelog_webdav::WebDavConfig,
/// #     store: std::sync::Arc<dyn fuelog_core::DataSource>,
/// # ) -> Result<(), Box<dyn std::error::Error>> {
/// let manager = SyncManager::new(Some(config), store, SyncOptions::default()).await?;
/// manager.set_on_status_change(|status| println!("{status:?}"));
/// manager.start_auto_sync();
/// manager.schedule_sync(); // after each local write
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SyncManager {
    inner: Arc<Inner>,
}

impl SyncManager {
    /// Creates a new sync manager.
    ///
    /// `config` is injected by the caller; pass `None` when the user has
    /// not configured `WebDAV`, which turns every operation into a no-op.
    /// Reloading changed credentials means building a new manager. The
    /// persisted last-sync time is restored from `options.state_path` when
    /// present.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub async fn new(
        config: Option<WebDavConfig>,
        source: Arc<dyn DataSource>,
        options: SyncOptions,
    ) -> Result<Self, WebDavError> {
        let client = match config {
            Some(config) => Some(WebDavClient::new(config)?),
            None => None,
        };

        let last_sync_time = match &options.state_path {
            Some(path) => state::load_last_sync(path).await,
            None => None,
        };

        Ok(Self {
            inner: Arc::new(Inner {
                client,
                source,
                options,
                status: Mutex::new(SyncStatus {
                    last_sync_time,
                    ..SyncStatus::default()
                }),
                on_status_change: Mutex::new(None),
                upload_lock: tokio::sync::Mutex::new(()),
                debounce_timer: Mutex::new(None),
                periodic_timer: Mutex::new(None),
            }),
        })
    }

    /// Schedules an upload after the debounce window.
    ///
    /// Last call wins: scheduling again before the window expires rearms
    /// the timer, so a burst of local writes collapses into one upload
    /// carrying whatever the data source holds when the timer fires.
    ///
    /// Fire-and-forget; upload failures surface only through status and
    /// logs. Must be called within a tokio runtime.
    pub fn schedule_sync(&self) {
        if self.inner.client.is_none() {
            tracing::debug!("webdav not configured, skipping scheduled sync");
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        let delay = self.inner.options.debounce_delay;

        let mut timer = self.inner.debounce_timer.lock().unwrap();
        if let Some(prev) = timer.take() {
            prev.abort();
        }
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                // The upload runs detached: aborting the timer cancels a
                // pending tick, never an upload that already started.
                tokio::spawn(async move { inner.sync_now().await });
            }
        }));
    }

    /// Arms the periodic sync timer.
    ///
    /// Every interval the current data is uploaded unconditionally; no
    /// dirtiness is tracked across ticks. Does nothing without a
    /// configuration or when auto-sync is disabled in the options. Arming
    /// again replaces a previously armed timer. Must be called within a
    /// tokio runtime.
    pub fn start_auto_sync(&self) {
        if self.inner.client.is_none() {
            tracing::debug!("webdav not configured, skipping auto-sync");
            return;
        }
        if !self.inner.options.auto_sync {
            tracing::debug!("auto-sync disabled, not arming periodic timer");
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        let interval = self.inner.options.sync_interval;

        let mut timer = self.inner.periodic_timer.lock().unwrap();
        if let Some(prev) = timer.take() {
            prev.abort();
        }
        *timer = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                let Some(inner) = weak.upgrade() else { break };
                // Detached for the same reason as the debounce path; the
                // upload mutex still keeps ticks from ever overlapping.
                tokio::spawn(async move { inner.sync_now().await });
            }
        }));
    }

    /// Cancels the debounce and periodic timers.
    ///
    /// Safe to call when neither is armed. Does not wait for an in-flight
    /// upload; that one runs to completion and still updates status.
    pub fn stop_auto_sync(&self) {
        if let Some(handle) = self.inner.periodic_timer.lock().unwrap().take() {
            handle.abort();
        }
        if let Some(handle) = self.inner.debounce_timer.lock().unwrap().take() {
            handle.abort();
        }
    }

    /// Uploads the given snapshot right away.
    ///
    /// The single upload path behind both timers; serialized against any
    /// other upload of this manager. Returns whether the upload succeeded;
    /// without a configuration this is a no-op returning `false`.
    pub async fn upload_data(&self, records: &[FuelRecord], vehicles: &[Vehicle]) -> bool {
        if self.inner.client.is_none() {
            return false;
        }

        let _guard = self.inner.upload_lock.lock().await;
        self.inner.upload_locked(records, vehicles).await
    }

    /// Registers the status observer, replacing any previous registration.
    pub fn set_on_status_change(&self, callback: impl Fn(SyncStatus) + Send + Sync + 'static) {
        *self.inner.on_status_change.lock().unwrap() = Some(Arc::new(callback));
    }

    /// The current status, as a defensive copy.
    #[must_use]
    pub fn status(&self) -> SyncStatus {
        self.inner.status.lock().unwrap().clone()
    }
}

impl fmt::Debug for SyncManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncManager")
            .field("configured", &self.inner.client.is_some())
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

impl Inner {
    /// Uploads whatever the data source currently holds.
    async fn sync_now(&self) {
        let _guard = self.upload_lock.lock().await;

        // Read the source only after the lock is held: a trigger that
        // queued behind a running upload must push the latest data, not
        // what existed when it was requested.
        let records = self.source.fuel_records();
        let vehicles = self.source.vehicles();
        self.upload_locked(&records, &vehicles).await;
    }

    /// The upload itself. Caller holds `upload_lock`.
    async fn upload_locked(&self, records: &[FuelRecord], vehicles: &[Vehicle]) -> bool {
        let Some(client) = &self.client else {
            return false;
        };

        self.replace_status(|status| SyncStatus {
            is_syncing: true,
            error: None,
            ..status
        });

        tracing::debug!(
            records = records.len(),
            vehicles = vehicles.len(),
            "uploading backup"
        );

        let content = encode_backup(records, vehicles);
        match client.upload_file(BACKUP_FILENAME, content.as_bytes()).await {
            Ok(()) => {
                let now = Timestamp::now();
                if let Some(path) = &self.options.state_path {
                    state::store_last_sync(path, now).await;
                }
                self.replace_status(|_| SyncStatus {
                    last_sync_time: Some(now),
                    is_syncing: false,
                    error: None,
                });
                tracing::debug!(time = %now, "backup synced");
                true
            }
            Err(err) => {
                tracing::error!(err = %err, "backup sync failed");
                self.replace_status(|status| SyncStatus {
                    is_syncing: false,
                    error: Some(err.to_string()),
                    ..status
                });
                false
            }
        }
    }

    /// Swaps in a new status as a whole record and notifies the observer.
    fn replace_status(&self, f: impl FnOnce(SyncStatus) -> SyncStatus) {
        let next = {
            let mut status = self.status.lock().unwrap();
            let next = f(status.clone());
            *status = next.clone();
            next
        };

        let callback = self.on_status_change.lock().unwrap().clone();
        if let Some(callback) = callback {
            callback(next);
        }
    }
}
