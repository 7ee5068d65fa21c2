// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Airport and city lookup.
//!
//! Resolving a free-text query (an ICAO code or a city name) into a
//! coordinate is network-bound and non-deterministic, so it sits behind the
//! [`AirportLookup`] trait. Callers resolve an origin first and hand the
//! plain [`Coordinates`] to the calculators and ring builder.

mod gemini;
mod parse;

pub use gemini::{GeminiLookup, GEMINI_MODEL};
pub use parse::parse_airport_response;

use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportFix {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
}

impl AirportFix {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    /// "Name, City", dropping whichever half is blank.
    pub fn display_name(&self) -> String {
        match (self.name.trim(), self.city.trim()) {
            ("", "") => format!("{:.4}, {:.4}", self.lat, self.lng),
            (name, "") => name.to_string(),
            ("", city) => city.to_string(),
            (name, city) => format!("{}, {}", name, city),
        }
    }
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No Gemini API key configured (set GEMINI_API_KEY or add gemini_api_key to settings)")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Lookup service returned HTTP {0}")]
    Status(u16),
    #[error("Malformed lookup response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => LookupError::Status(status.as_u16()),
            None => LookupError::Http(e.to_string()),
        }
    }
}

/// Resolves a query to an airport fix.
///
/// `Ok(None)` means the service answered but nothing usable was found;
/// `Err` is reserved for transport and configuration failures.
pub trait AirportLookup: Send + Sync {
    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<AirportFix>, LookupError>> + Send;
}
