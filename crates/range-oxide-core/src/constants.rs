// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::calc::advanced::{AdvancedFlightParameters, CruiseParameters, PhaseParameters};
use crate::calc::basic::BasicFlightParameters;
use crate::geo::Coordinates;
use crate::units::UnitSystem;

/// Exact by definition of the international nautical mile.
pub const NM_TO_METERS: f64 = 1852.0;

/// Fixed reserve, always one hour.
pub const RESERVE_HOURS: f64 = 1.0;

/// Mean earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

pub const MAX_RING_COLOR: &str = "#f59e0b"; // amber, dry tanks
pub const SAFE_RING_COLOR: &str = "#10b981"; // emerald, with reserve

pub const DEFAULT_RING_SEGMENTS: usize = 72;

// Los Angeles
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 34.0522,
    lng: -118.2437,
};

pub const DEFAULT_BASIC: BasicFlightParameters = BasicFlightParameters {
    cruise_speed: 120.0,
    total_endurance: 4.0,
    is_round_trip: false,
};

pub const DEFAULT_ADVANCED: AdvancedFlightParameters = AdvancedFlightParameters {
    unit_system: UnitSystem::Imperial,
    climb: PhaseParameters {
        speed: 90.0,
        time_minutes: 15.0,
        burn_rate: 18.0,
    },
    cruise: CruiseParameters {
        speed: 135.0,
        burn_rate: 12.0,
    },
    descent: PhaseParameters {
        speed: 145.0,
        time_minutes: 20.0,
        burn_rate: 10.0,
    },
    total_fuel: 60.0, // gallons
    is_round_trip: false,
};
