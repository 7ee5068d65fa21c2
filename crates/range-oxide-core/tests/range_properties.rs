// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use range_oxide_core::calc::{MSG_CUTS_INTO_RESERVE, MSG_INSUFFICIENT_FUEL};
use range_oxide_core::constants::{DEFAULT_ADVANCED, NM_TO_METERS};
use range_oxide_core::{
    calculate_advanced_range, calculate_basic_range, AdvancedFlightParameters,
    BasicFlightParameters,
};

fn basic(speed: f64, endurance: f64, round_trip: bool) -> BasicFlightParameters {
    BasicFlightParameters {
        cruise_speed: speed,
        total_endurance: endurance,
        is_round_trip: round_trip,
    }
}

fn advanced_with_fuel(fuel: f64) -> AdvancedFlightParameters {
    AdvancedFlightParameters {
        total_fuel: fuel,
        ..DEFAULT_ADVANCED
    }
}

#[test]
fn test_basic_safe_never_exceeds_max() {
    for speed in [0.0, 45.0, 120.0, 480.0] {
        for endurance in [0.0, 0.5, 1.0, 1.5, 4.0, 12.0] {
            for round_trip in [false, true] {
                let r = calculate_basic_range(&basic(speed, endurance, round_trip));
                assert!(r.safe_range_nm >= 0.0);
                assert!(r.max_range_nm >= 0.0);
                assert!(
                    r.safe_range_nm <= r.max_range_nm,
                    "speed={} endurance={} rt={}",
                    speed,
                    endurance,
                    round_trip
                );
            }
        }
    }
}

#[test]
fn test_advanced_safe_never_exceeds_max() {
    for fuel in [0.0, 5.0, 7.9, 15.0, 19.9, 20.0, 60.0, 250.0] {
        let r = calculate_advanced_range(&advanced_with_fuel(fuel));
        assert!(r.safe_range_nm >= 0.0 && r.max_range_nm >= 0.0);
        assert!(r.safe_range_nm <= r.max_range_nm, "fuel={}", fuel);
    }
}

#[test]
fn test_round_trip_is_exactly_half() {
    let one_way = calculate_basic_range(&basic(135.0, 5.5, false));
    let round = calculate_basic_range(&basic(135.0, 5.5, true));
    assert_eq!(round.max_range_nm, one_way.max_range_nm / 2.0);
    assert_eq!(round.safe_range_nm, one_way.safe_range_nm / 2.0);

    let one_way = calculate_advanced_range(&DEFAULT_ADVANCED);
    let round = calculate_advanced_range(&AdvancedFlightParameters {
        is_round_trip: true,
        ..DEFAULT_ADVANCED
    });
    assert_eq!(round.max_range_nm, one_way.max_range_nm / 2.0);
    assert_eq!(round.safe_range_nm, one_way.safe_range_nm / 2.0);
    // Endurance is about the tank, not the leg
    assert_eq!(round.endurance_hours, one_way.endurance_hours);
}

#[test]
fn test_insufficient_fuel_for_climb_descent() {
    // climb + descent needs 4.5 + 3.33 units
    let r = calculate_advanced_range(&advanced_with_fuel(6.0));
    assert_eq!(r.max_range_nm, 0.0);
    assert_eq!(r.safe_range_nm, 0.0);
    assert!(r.is_limited);
    assert_eq!(r.message.as_deref(), Some(MSG_INSUFFICIENT_FUEL));
    assert!(r.endurance_hours.is_finite());
    assert!(r.cruise_time_minutes.is_finite());
}

#[test]
fn test_reserve_only_shortfall() {
    // Covers climb/descent, but not once 12 units of reserve are held back
    let r = calculate_advanced_range(&advanced_with_fuel(15.0));
    assert!(r.max_range_nm > 0.0);
    assert_eq!(r.safe_range_nm, 0.0);
    assert!(!r.is_limited);
    assert_eq!(r.message.as_deref(), Some(MSG_CUTS_INTO_RESERVE));
    assert_eq!(r.reserve_fuel, 12.0);
}

#[test]
fn test_meters_follow_nautical_miles() {
    let results = [
        calculate_basic_range(&basic(120.0, 4.0, false)),
        calculate_basic_range(&basic(97.3, 2.25, true)),
        calculate_advanced_range(&DEFAULT_ADVANCED),
        calculate_advanced_range(&advanced_with_fuel(15.0)),
    ];
    for r in &results {
        assert_eq!(r.max_range_meters, r.max_range_nm * NM_TO_METERS);
        assert_eq!(r.safe_range_meters, r.safe_range_nm * NM_TO_METERS);
    }
}

#[test]
fn test_more_fuel_never_shortens_range() {
    let mut last = 0.0;
    for fuel in (0..=30).map(|i| i as f64 * 5.0) {
        let r = calculate_advanced_range(&advanced_with_fuel(fuel));
        assert!(r.max_range_nm >= last, "fuel={}", fuel);
        last = r.max_range_nm;
    }
}
