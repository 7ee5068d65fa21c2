// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::{Distance, RangeResult};
use crate::constants::{DEFAULT_BASIC, RESERVE_HOURS};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicFlightParameters {
    pub cruise_speed: f64,    // Knots
    pub total_endurance: f64, // Hours
    pub is_round_trip: bool,
}

impl Default for BasicFlightParameters {
    fn default() -> Self {
        DEFAULT_BASIC
    }
}

/// Range from cruise speed and total endurance alone.
///
/// The safe figure holds back a one-hour reserve. Round trips split the
/// flying time evenly between outbound and inbound legs.
pub fn calculate_basic_range(params: &BasicFlightParameters) -> RangeResult {
    let mut effective_endurance = params.total_endurance;
    let mut safe_endurance = (params.total_endurance - RESERVE_HOURS).max(0.0);

    if params.is_round_trip {
        effective_endurance /= 2.0;
        safe_endurance /= 2.0;
    }

    let max = Distance::from_nm(params.cruise_speed * effective_endurance);
    let safe = Distance::from_nm(params.cruise_speed * safe_endurance);

    debug!(
        "Basic range — speed={} endurance={} round_trip={} max_nm={:.1} safe_nm={:.1}",
        params.cruise_speed, params.total_endurance, params.is_round_trip, max.nm, safe.nm
    );

    RangeResult {
        safe_range_nm: safe.nm,
        safe_range_meters: safe.meters,
        max_range_nm: max.nm,
        max_range_meters: max.meters,
        endurance_hours: params.total_endurance,
        cruise_time_minutes: params.total_endurance * 60.0,
        is_limited: false,
        reserve_fuel: 0.0, // not tracked without a burn model
        message: None,
    }
}
