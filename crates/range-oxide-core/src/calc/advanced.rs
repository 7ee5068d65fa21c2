// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::{Distance, RangeResult, MSG_CUTS_INTO_RESERVE, MSG_INSUFFICIENT_FUEL};
use crate::constants::{DEFAULT_ADVANCED, RESERVE_HOURS};
use crate::units::UnitSystem;
use log::debug;
use serde::{Deserialize, Serialize};

/// A timed phase (climb or descent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseParameters {
    pub speed: f64,        // Knots
    pub time_minutes: f64, // Minutes
    pub burn_rate: f64,    // Unit/hr
}

impl PhaseParameters {
    fn hours(&self) -> f64 {
        self.time_minutes / 60.0
    }

    fn fuel(&self) -> f64 {
        self.hours() * self.burn_rate
    }

    fn distance_nm(&self) -> f64 {
        self.speed * self.hours()
    }
}

/// Cruise lasts for whatever fuel is left after climb and descent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CruiseParameters {
    pub speed: f64,     // Knots
    pub burn_rate: f64, // Unit/hr
}

impl Default for CruiseParameters {
    fn default() -> Self {
        DEFAULT_ADVANCED.cruise
    }
}

/// Missing fields fall back to the default dataset; a climb or descent
/// record, when present, must be complete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedFlightParameters {
    /// Label only; the arithmetic is identical in both systems.
    pub unit_system: UnitSystem,
    pub climb: PhaseParameters,
    pub cruise: CruiseParameters,
    pub descent: PhaseParameters,
    pub total_fuel: f64, // Units
    pub is_round_trip: bool,
}

impl Default for AdvancedFlightParameters {
    fn default() -> Self {
        DEFAULT_ADVANCED
    }
}

/// Outcome of flying one fuel budget through climb, cruise and descent.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FuelLeg {
    distance_nm: f64,
    limited: bool,
    /// `None` when climb and descent alone exhaust the budget.
    cruise_hours: Option<f64>,
}

struct PhaseModel<'a> {
    params: &'a AdvancedFlightParameters,
    climb_descent_fuel: f64,
    climb_descent_dist: f64,
}

impl<'a> PhaseModel<'a> {
    fn new(params: &'a AdvancedFlightParameters) -> Self {
        Self {
            params,
            climb_descent_fuel: params.climb.fuel() + params.descent.fuel(),
            climb_descent_dist: params.climb.distance_nm() + params.descent.distance_nm(),
        }
    }

    fn range_for_fuel(&self, available_fuel: f64) -> FuelLeg {
        let cruise_fuel = available_fuel - self.climb_descent_fuel;

        if cruise_fuel < 0.0 {
            return FuelLeg {
                distance_nm: 0.0,
                limited: true,
                cruise_hours: None,
            };
        }

        let cruise_hours = cruise_fuel / self.params.cruise.burn_rate;
        let cruise_dist = self.params.cruise.speed * cruise_hours;

        let mut total_dist = self.climb_descent_dist + cruise_dist;
        if self.params.is_round_trip {
            total_dist /= 2.0;
        }

        FuelLeg {
            distance_nm: total_dist,
            limited: false,
            cruise_hours: Some(cruise_hours),
        }
    }
}

/// Range from a three-phase climb/cruise/descent fuel model.
///
/// Max range burns the whole tank. Safe range first holds back one hour of
/// fuel at the cruise burn rate. Endurance always reflects the full tank.
pub fn calculate_advanced_range(params: &AdvancedFlightParameters) -> RangeResult {
    let model = PhaseModel::new(params);

    let max_leg = model.range_for_fuel(params.total_fuel);

    let reserve_fuel = RESERVE_HOURS * params.cruise.burn_rate;
    let safe_leg = model.range_for_fuel(params.total_fuel - reserve_fuel);

    // Climb and descent still count when the tank cannot reach cruise.
    let cruise_hours = max_leg.cruise_hours.unwrap_or(0.0);

    let message = if safe_leg.limited && !max_leg.limited {
        Some(MSG_CUTS_INTO_RESERVE.to_string())
    } else if max_leg.limited {
        Some(MSG_INSUFFICIENT_FUEL.to_string())
    } else {
        None
    };

    let max = Distance::from_nm(max_leg.distance_nm);
    let safe = Distance::from_nm(safe_leg.distance_nm);

    debug!(
        "Advanced range — fuel={} reserve={} max_nm={:.1} safe_nm={:.1} limited={}",
        params.total_fuel, reserve_fuel, max.nm, safe.nm, max_leg.limited
    );

    RangeResult {
        safe_range_nm: safe.nm,
        safe_range_meters: safe.meters,
        max_range_nm: max.nm,
        max_range_meters: max.meters,
        endurance_hours: params.climb.hours() + params.descent.hours() + cruise_hours,
        cruise_time_minutes: cruise_hours * 60.0,
        is_limited: max_leg.limited,
        reserve_fuel,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_phase_quantities() {
        let model = PhaseModel::new(&DEFAULT_ADVANCED);
        // 4.5 climb + 3.333 descent
        assert!(approx(model.climb_descent_fuel, 4.5 + 10.0 / 3.0));
        // 22.5 climb + 48.333 descent
        assert!(approx(model.climb_descent_dist, 22.5 + 145.0 / 3.0));
    }

    #[test]
    fn test_range_for_fuel_exactly_covers_climb_descent() {
        let model = PhaseModel::new(&DEFAULT_ADVANCED);
        let leg = model.range_for_fuel(model.climb_descent_fuel);
        assert!(!leg.limited);
        assert_eq!(leg.cruise_hours, Some(0.0));
        assert!(approx(leg.distance_nm, model.climb_descent_dist));
    }

    #[test]
    fn test_range_for_fuel_short() {
        let model = PhaseModel::new(&DEFAULT_ADVANCED);
        let leg = model.range_for_fuel(1.0);
        assert!(leg.limited);
        assert_eq!(leg.distance_nm, 0.0);
        assert_eq!(leg.cruise_hours, None);
    }

    #[test]
    fn test_default_dataset() {
        let r = calculate_advanced_range(&DEFAULT_ADVANCED);
        assert!(approx(r.max_range_nm, 657.708_333_333), "{}", r.max_range_nm);
        assert!(approx(r.safe_range_nm, 522.708_333_333), "{}", r.safe_range_nm);
        assert_eq!(r.reserve_fuel, 12.0);
        assert!(!r.is_limited);
        assert!(r.message.is_none());
        assert!(approx(r.cruise_time_minutes, 260.833_333_333));
        let cruise_hours = (60.0 - 4.5 - 10.0 / 3.0) / 12.0;
        assert!(approx(r.endurance_hours, 0.25 + 1.0 / 3.0 + cruise_hours));
    }

    #[test]
    fn test_limited_uses_climb_descent_time_only() {
        let params = AdvancedFlightParameters {
            total_fuel: 5.0,
            ..DEFAULT_ADVANCED
        };
        let r = calculate_advanced_range(&params);
        assert!(r.is_limited);
        assert_eq!(r.max_range_nm, 0.0);
        assert_eq!(r.cruise_time_minutes, 0.0);
        assert!(approx(r.endurance_hours, 35.0 / 60.0));
        assert_eq!(r.message.as_deref(), Some(MSG_INSUFFICIENT_FUEL));
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let p: AdvancedFlightParameters =
            serde_json::from_str(r#"{"total_fuel": 80, "cruise": {"burn_rate": 9}}"#).unwrap();
        assert_eq!(p.total_fuel, 80.0);
        assert_eq!(p.cruise.burn_rate, 9.0);
        assert_eq!(p.cruise.speed, DEFAULT_ADVANCED.cruise.speed);
        assert_eq!(p.climb, DEFAULT_ADVANCED.climb);
        assert_eq!(p.unit_system, UnitSystem::Imperial);
    }

    #[test]
    fn test_unit_system_does_not_change_arithmetic() {
        let metric = AdvancedFlightParameters {
            unit_system: UnitSystem::Metric,
            ..DEFAULT_ADVANCED
        };
        let a = calculate_advanced_range(&DEFAULT_ADVANCED);
        let b = calculate_advanced_range(&metric);
        assert_eq!(a, b);
    }
}
