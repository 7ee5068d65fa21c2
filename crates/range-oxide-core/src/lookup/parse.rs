// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::AirportFix;
use log::warn;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn fenced_json_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap())
}

fn bare_object_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").unwrap())
}

/// Pulls an airport fix out of free-form model text.
///
/// Prefers a ```` ```json ```` fenced block and falls back to the widest
/// `{...}` span. Only accepted when `lat` and `lng` are JSON numbers.
pub fn parse_airport_response(text: &str) -> Option<AirportFix> {
    let candidate = fenced_json_re()
        .captures(text)
        .and_then(|c| c.get(1))
        .or_else(|| bare_object_re().find(text))
        .map(|m| m.as_str());

    let Some(json) = candidate else {
        warn!("Could not parse airport data from response: {}", text);
        return None;
    };

    let value: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            warn!("Airport response is not valid JSON ({}): {}", e, json);
            return None;
        }
    };

    let (Some(lat), Some(lng)) = (
        value.get("lat").and_then(Value::as_f64),
        value.get("lng").and_then(Value::as_f64),
    ) else {
        warn!("Airport response lacks numeric lat/lng: {}", json);
        return None;
    };

    let text_field = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Some(AirportFix {
        lat,
        lng,
        name: text_field("name"),
        city: text_field("city"),
    })
}
