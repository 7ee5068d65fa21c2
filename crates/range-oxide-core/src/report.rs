// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::calc::{FlightMode, RangeResult};
use crate::units::UnitSystem;
use std::fmt::Write;

/// `4.5` → `"4h 30m"`. Minutes are rounded, hours floored.
pub fn format_endurance(hours: f64) -> String {
    if !hours.is_finite() {
        return "--".to_string();
    }
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).round();
    format!("{}h {}m", whole as i64, minutes as i64)
}

pub fn format_reserve(result: &RangeResult, mode: FlightMode, units: UnitSystem) -> String {
    match mode {
        FlightMode::Basic => "(1 HR)".to_string(),
        FlightMode::Advanced => format!("{} {}", result.reserve_fuel, units.fuel_label()),
    }
}

/// Multi-line terminal summary of a calculation.
pub fn render_summary(result: &RangeResult, mode: FlightMode, units: UnitSystem) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Safe Range:  {:>6} NM  ({:.0} m)",
        result.safe_range_nm.round(),
        result.safe_range_meters
    );
    let _ = writeln!(
        out,
        "Max Range:   {:>6} NM  ({:.0} m)",
        result.max_range_nm.round(),
        result.max_range_meters
    );
    let _ = writeln!(out, "Endurance:   {}", format_endurance(result.endurance_hours));
    let _ = writeln!(out, "Reserve:     {}", format_reserve(result, mode, units));
    if let Some(msg) = &result.message {
        let _ = writeln!(out, "Warning:     {}", msg);
    }
    out
}
