// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::record::FuelRecord;
use crate::vehicle::Vehicle;

/// Read access to the application's current fuel records and vehicles.
///
/// The sync manager reads through this capability at the moment an upload
/// actually starts, never from values captured at scheduling time, so a
/// debounced or queued upload always pushes the latest data.
pub trait DataSource: Send + Sync {
    /// The current fuel records, by value.
    fn fuel_records(&self) -> Vec<FuelRecord>;

    /// The current vehicles, by value.
    fn vehicles(&self) -> Vec<Vehicle>;
}
