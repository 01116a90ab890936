// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for ductile crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod schedules;

pub use schedules::{insert_schedules, removal_schedules, replay_inserts, replay_removals};
