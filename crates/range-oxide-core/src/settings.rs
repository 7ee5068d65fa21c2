// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::calc::advanced::AdvancedFlightParameters;
use crate::calc::basic::BasicFlightParameters;
use crate::calc::FlightMode;
use crate::constants::{DEFAULT_ADVANCED, DEFAULT_BASIC, DEFAULT_CENTER, DEFAULT_RING_SEGMENTS};
use crate::geo::Coordinates;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-user defaults for the form fields and the lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: FlightMode,
    pub default_center: Coordinates,
    pub basic: BasicFlightParameters,
    pub advanced: AdvancedFlightParameters,
    pub ring_segments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: FlightMode::Basic,
            default_center: DEFAULT_CENTER,
            basic: DEFAULT_BASIC,
            advanced: DEFAULT_ADVANCED,
            ring_segments: DEFAULT_RING_SEGMENTS,
            gemini_api_key: None,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        crate::get_config_root().join("settings.json")
    }

    /// Missing file yields defaults; a present but malformed file is an error.
    /// Keys absent from the file, at any depth, keep their default value.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            debug!("No settings file, using defaults — path={}", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let overrides: Value = serde_json::from_str(&content)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge_json(&mut merged, overrides);
        let settings = serde_json::from_value(merged)?;
        debug!("Loaded settings — path={}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Overlays `overrides` onto `base`, recursing into objects present in both.
fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(over_map)) => {
            for (key, value) in over_map {
                match base_map.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"mode": "ADVANCED"}"#).unwrap();
        assert_eq!(s.mode, FlightMode::Advanced);
        assert_eq!(s.basic, DEFAULT_BASIC);
        assert_eq!(s.ring_segments, DEFAULT_RING_SEGMENTS);
        assert!(s.gemini_api_key.is_none());
    }

    #[test]
    fn test_merge_keeps_sibling_defaults() {
        let mut base = serde_json::json!({"a": {"x": 1, "y": 2}, "b": 3});
        merge_json(&mut base, serde_json::json!({"a": {"y": 5}, "c": null}));
        assert_eq!(base, serde_json::json!({"a": {"x": 1, "y": 5}, "b": 3, "c": null}));
    }
}
