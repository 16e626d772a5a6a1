// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;

/// A vehicle that fuel records belong to.
///
/// Owned and mutated exclusively by the record store; the sync subsystem
/// only reads snapshots.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Opaque unique identifier.
    pub id: String,
    /// Vehicle brand.
    pub brand: String,
    /// Vehicle model.
    pub model: String,
    /// Model year.
    pub year: Option<i16>,
    /// Engine displacement, free-form (e.g. "1.5T").
    pub displacement: Option<String>,
    /// Preferred fuel grade, free-form.
    pub fuel_type: Option<String>,
    /// License plate.
    pub license_plate: Option<String>,
    /// Purchase date, free-form.
    pub purchase_date: Option<String>,
    /// Free-text note.
    pub note: Option<String>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last update time.
    pub updated_at: Timestamp,
}
