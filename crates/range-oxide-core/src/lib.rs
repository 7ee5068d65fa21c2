// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod calc;
pub mod constants;
pub mod geo;
pub mod lookup;
pub mod report;
pub mod settings;
pub mod units;

pub use calc::advanced::{
    calculate_advanced_range, AdvancedFlightParameters, CruiseParameters, PhaseParameters,
};
pub use calc::basic::{calculate_basic_range, BasicFlightParameters};
pub use calc::{FlightMode, FlightProfile, RangeResult};
pub use geo::Coordinates;
pub use units::UnitSystem;

use std::path::PathBuf;

/// Returns the per-user configuration directory, falling back to the
/// working directory when the platform has no home.
pub fn get_config_root() -> PathBuf {
    directories::ProjectDirs::from("org", "range-oxide", "Range-Oxide")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
