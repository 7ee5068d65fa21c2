// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::{parse_airport_response, AirportFix, AirportLookup, LookupError};
use log::{debug, error, info};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of every part of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

fn build_prompt(query: &str) -> String {
    format!(
        r#"Find the precise latitude and longitude, official name, and city for the airport with ICAO code "{query}".
If the ICAO code matches a small airfield (like SDVH or SBBP in Brazil, or others globally), ensure the coordinates are for that specific location.
If the input looks like a city name, search for the main airport in that city.

Return the data in the following JSON format inside a code block:
```json
{{
  "lat": 12.3456,
  "lng": -65.4321,
  "name": "Airport Official Name",
  "city": "City Name"
}}
```
"#
    )
}

/// First non-blank key in priority order.
fn pick_api_key(
    configured: Option<&str>,
    gemini_env: Option<String>,
    api_env: Option<String>,
) -> Option<String> {
    configured
        .map(str::to_string)
        .into_iter()
        .chain(gemini_env)
        .chain(api_env)
        .find(|k| !k.trim().is_empty())
}

/// Airport lookup backed by Gemini with Google Search grounding.
#[derive(Clone)]
pub struct GeminiLookup {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiLookup {
    pub fn new(api_key: impl Into<String>) -> Result<Self, LookupError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LookupError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    /// Picks the key from `configured`, then `GEMINI_API_KEY`, then `API_KEY`.
    pub fn from_env_or(configured: Option<&str>) -> Result<Self, LookupError> {
        let key = pick_api_key(
            configured,
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("API_KEY").ok(),
        )
        .ok_or(LookupError::MissingApiKey)?;
        Self::new(key)
    }

    /// Points requests at another host, e.g. a local proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, GEMINI_MODEL)
    }

    async fn generate(&self, prompt: &str) -> Result<String, LookupError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "tools": [{ "google_search": {} }],
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;
        Ok(parsed.text())
    }
}

impl AirportLookup for GeminiLookup {
    async fn lookup(&self, query: &str) -> Result<Option<AirportFix>, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        info!("Looking up airport — query={} model={}", query, GEMINI_MODEL);
        let text = match self.generate(&build_prompt(query)).await {
            Ok(t) => t,
            Err(e) => {
                error!("Failed to fetch airport data — query={} error={}", query, e);
                return Err(e);
            }
        };

        if text.is_empty() {
            debug!("Empty lookup response — query={}", query);
            return Ok(None);
        }
        Ok(parse_airport_response(&text))
    }
}
