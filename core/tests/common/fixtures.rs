// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories and a controllable in-memory data source.

use std::sync::Mutex;
use std::time::Duration;

use fuelog_core::{DataSource, FuelRecord, FuelType, SyncOptions, Vehicle};
use fuelog_webdav::WebDavConfig;
use jiff::civil::date;

/// A fuel record with plausible values, owned by `vehicle_id`.
pub fn sample_record(id: &str, vehicle_id: &str) -> FuelRecord {
    FuelRecord {
        id: id.to_string(),
        vehicle_id: vehicle_id.to_string(),
        date: date(2024, 3, 1),
        mileage: 12345.6,
        fuel_amount: 40.5,
        unit_price: 7.89,
        total_price: 319.55,
        fuel_type: FuelType::Gasoline95,
        is_full: true,
        note: "高速前加满".to_string(),
        created_at: "2024-03-01T08:00:00Z".parse().expect("Invalid timestamp"),
    }
}

/// A vehicle with the given identity.
pub fn sample_vehicle(id: &str, brand: &str, model: &str) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        year: Some(2021),
        displacement: Some("1.5T".to_string()),
        fuel_type: Some("95号汽油".to_string()),
        license_plate: Some("沪A12345".to_string()),
        purchase_date: None,
        note: None,
        created_at: "2021-06-01T00:00:00Z".parse().expect("Invalid timestamp"),
        updated_at: "2024-01-01T00:00:00Z".parse().expect("Invalid timestamp"),
    }
}

/// Configuration pointing at a mock server.
pub fn webdav_config(url: &str) -> WebDavConfig {
    WebDavConfig {
        url: url.to_string(),
        username: "user".to_string(),
        password: "pass".to_string(),
        path: "backups".to_string(),
        ..Default::default()
    }
}

/// Options with millisecond-scale timers so tests finish quickly.
pub fn manager_options(debounce_ms: u64, interval_ms: u64) -> SyncOptions {
    SyncOptions {
        auto_sync: true,
        debounce_delay: Duration::from_millis(debounce_ms),
        sync_interval: Duration::from_millis(interval_ms),
        state_path: None,
    }
}

/// In-memory [`DataSource`] whose contents tests can change mid-flight.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: Mutex<Vec<FuelRecord>>,
    vehicles: Mutex<Vec<Vehicle>>,
}

impl MemorySource {
    pub fn new(records: Vec<FuelRecord>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            records: Mutex::new(records),
            vehicles: Mutex::new(vehicles),
        }
    }

    pub fn push_record(&self, record: FuelRecord) {
        self.records.lock().unwrap().push(record);
    }
}

impl DataSource for MemorySource {
    fn fuel_records(&self) -> Vec<FuelRecord> {
        self.records.lock().unwrap().clone()
    }

    fn vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.lock().unwrap().clone()
    }
}
