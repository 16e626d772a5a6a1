// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fuelog core: fuel-expense domain model, backup encoding and `WebDAV`
//! synchronization management.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else, clippy::match_bool)]

mod backup;
mod record;
mod source;
mod state;
mod sync;
mod vehicle;

pub use crate::backup::{BACKUP_FILENAME, encode_backup};
pub use crate::record::{FuelRecord, FuelType};
pub use crate::source::DataSource;
pub use crate::sync::{AUTO_SYNC_INTERVAL, DEBOUNCE_DELAY, SyncManager, SyncOptions, SyncStatus};
pub use crate::vehicle::Vehicle;
