// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::Timestamp;
use jiff::civil::Date;

/// Fuel grade offered by the application.
///
/// A closed set; the serde names are the labels the upstream data uses on
/// the wire and in exported backups.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FuelType {
    /// 92-octane gasoline.
    #[default]
    #[serde(rename = "92号汽油")]
    Gasoline92,

    /// 95-octane gasoline.
    #[serde(rename = "95号汽油")]
    Gasoline95,

    /// 98-octane gasoline.
    #[serde(rename = "98号汽油")]
    Gasoline98,

    /// Grade 0 diesel.
    #[serde(rename = "0号柴油")]
    Diesel0,

    /// Grade -10 diesel (winter).
    #[serde(rename = "-10号柴油")]
    DieselMinus10,
}

impl FuelType {
    /// The wire label of this fuel grade.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gasoline92 => "92号汽油",
            Self::Gasoline95 => "95号汽油",
            Self::Gasoline98 => "98号汽油",
            Self::Diesel0 => "0号柴油",
            Self::DieselMinus10 => "-10号柴油",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single refueling event.
///
/// Owned and mutated exclusively by the record store; the sync subsystem
/// only reads snapshots.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    /// Opaque unique identifier.
    pub id: String,
    /// Identifier of the owning vehicle.
    pub vehicle_id: String,
    /// Calendar day of the refueling, no time-of-day semantics.
    pub date: Date,
    /// Odometer reading in kilometers, non-negative.
    pub mileage: f64,
    /// Fuel amount in liters, positive.
    pub fuel_amount: f64,
    /// Price per liter.
    pub unit_price: f64,
    /// Total price. Stored independently of `fuel_amount * unit_price`;
    /// may drift when the user overrides it.
    pub total_price: f64,
    /// Fuel grade.
    pub fuel_type: FuelType,
    /// Whether the tank was filled to full.
    pub is_full: bool,
    /// Free-text note.
    pub note: String,
    /// Creation time.
    pub created_at: Timestamp,
}
