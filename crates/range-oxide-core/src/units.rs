// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fuel unit system. Only the labels change; every calculation is unit-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitSystem {
    #[default]
    Imperial, // Gallons
    Metric, // Liters
}

impl UnitSystem {
    pub fn fuel_label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "GAL",
            UnitSystem::Metric => "L",
        }
    }

    pub fn burn_label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "GPH",
            UnitSystem::Metric => "LPH",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "Gal / US",
            UnitSystem::Metric => "Liters / SI",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "imperial" | "gal" | "gallons" | "us" => Ok(UnitSystem::Imperial),
            "metric" | "l" | "liters" | "litres" | "si" => Ok(UnitSystem::Metric),
            other => Err(format!(
                "unknown unit system '{}' (expected imperial or metric)",
                other
            )),
        }
    }
}
