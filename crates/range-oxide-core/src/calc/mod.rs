// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Range and endurance arithmetic.
//!
//! Both calculators are pure functions from a parameter record to a fresh
//! [`RangeResult`]. Neither raises: degenerate inputs flow through the
//! arithmetic and surface only through `is_limited` and `message`.

pub mod advanced;
pub mod basic;

use crate::constants::NM_TO_METERS;
use serde::{Deserialize, Serialize};

pub use advanced::{calculate_advanced_range, AdvancedFlightParameters};
pub use basic::{calculate_basic_range, BasicFlightParameters};

pub const MSG_CUTS_INTO_RESERVE: &str = "Fuel sufficient for flight but cuts into reserve.";
pub const MSG_INSUFFICIENT_FUEL: &str = "Insufficient fuel for Climb/Descent.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeResult {
    // With the one-hour reserve held back
    pub safe_range_nm: f64,
    pub safe_range_meters: f64,

    // Dry tanks
    pub max_range_nm: f64,
    pub max_range_meters: f64,

    pub endurance_hours: f64,
    pub cruise_time_minutes: f64,
    /// True when the fuel load does not cover climb and descent.
    pub is_limited: bool,
    pub reserve_fuel: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A distance in nautical miles with its metric radius, both floored at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Distance {
    pub nm: f64,
    pub meters: f64,
}

impl Distance {
    pub(crate) fn from_nm(nm: f64) -> Self {
        Self {
            nm: nm.max(0.0),
            meters: (nm * NM_TO_METERS).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightMode {
    #[default]
    Basic,
    Advanced,
}

/// The parameter record for whichever mode the user is editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightProfile {
    Basic(BasicFlightParameters),
    Advanced(AdvancedFlightParameters),
}

impl FlightProfile {
    pub fn mode(&self) -> FlightMode {
        match self {
            FlightProfile::Basic(_) => FlightMode::Basic,
            FlightProfile::Advanced(_) => FlightMode::Advanced,
        }
    }

    pub fn calculate(&self) -> RangeResult {
        match self {
            FlightProfile::Basic(params) => calculate_basic_range(params),
            FlightProfile::Advanced(params) => calculate_advanced_range(params),
        }
    }
}
