// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Backup document encoding.

use crate::record::FuelRecord;
use crate::vehicle::Vehicle;

/// Fixed name of the backup file in the remote sync folder.
pub const BACKUP_FILENAME: &str = "fuel-records-backup.csv";

/// Placeholder for brand/model when a record's vehicle id has no match.
const UNKNOWN_VEHICLE: &str = "未知";

/// Rendering of the tank-filled flag.
const FILLED_YES: &str = "是";
const FILLED_NO: &str = "否";

/// The fixed 13-column header of the backup document.
const HEADER: [&str; 13] = [
    "ID",
    "车辆ID",
    "车辆品牌",
    "车辆型号",
    "日期",
    "里程(km)",
    "加油量(L)",
    "单价(元/L)",
    "总价(元)",
    "油品类型",
    "是否加满",
    "备注",
    "创建时间",
];

/// Encodes the current records and vehicles into the CSV backup document.
///
/// Pure and total: empty input yields header-only content. Rows keep the
/// input order; no sorting is performed. The document starts with a UTF-8
/// byte-order-mark so spreadsheet tools detect the encoding, the header row
/// is unquoted, and every data cell is wrapped in double quotes.
///
/// Embedded double quotes in cells are not escaped. That is a known
/// limitation of the wire format; it is kept as-is so existing backups stay
/// byte-compatible.
#[must_use]
pub fn encode_backup(records: &[FuelRecord], vehicles: &[Vehicle]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.join(","));

    for record in records {
        let vehicle = vehicles.iter().find(|v| v.id == record.vehicle_id);
        let cells = [
            record.id.clone(),
            record.vehicle_id.clone(),
            vehicle.map_or_else(|| UNKNOWN_VEHICLE.to_string(), |v| v.brand.clone()),
            vehicle.map_or_else(|| UNKNOWN_VEHICLE.to_string(), |v| v.model.clone()),
            record.date.to_string(),
            record.mileage.to_string(),
            record.fuel_amount.to_string(),
            record.unit_price.to_string(),
            record.total_price.to_string(),
            record.fuel_type.to_string(),
            if record.is_full { FILLED_YES } else { FILLED_NO }.to_string(),
            record.note.clone(),
            record.created_at.to_string(),
        ];

        let row: Vec<String> = cells.iter().map(|cell| format!("\"{cell}\"")).collect();
        lines.push(row.join(","));
    }

    format!("\u{feff}{}", lines.join("\n"))
}
