// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests: data factories, an
//! in-memory data source and mock-server helpers.

mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{
    MemorySource, manager_options, sample_record, sample_vehicle, webdav_config,
};
