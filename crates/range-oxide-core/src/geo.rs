// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::calc::RangeResult;
use crate::constants::{EARTH_RADIUS_NM, MAX_RING_COLOR, NM_TO_METERS, SAFE_RING_COLOR};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Great-circle distance in nautical miles.
pub fn haversine_nm(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_NM * c
}

/// Point reached from `origin` after `distance_nm` along initial `bearing_deg`.
pub fn destination_point(origin: Coordinates, bearing_deg: f64, distance_nm: f64) -> Coordinates {
    let delta = distance_nm / EARTH_RADIUS_NM;
    let theta = bearing_deg.to_radians();
    let phi1 = origin.lat.to_radians();
    let lambda1 = origin.lng.to_radians();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    // Normalise longitude to [-180, 180)
    let lng = (lambda2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    Coordinates::new(phi2.to_degrees(), lng)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingKind {
    Safe,
    Max,
}

impl RingKind {
    pub fn color(self) -> &'static str {
        match self {
            RingKind::Safe => SAFE_RING_COLOR,
            RingKind::Max => MAX_RING_COLOR,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RingKind::Safe => "Safe Range (1h reserve)",
            RingKind::Max => "Max Range (dry tanks)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeRing {
    pub kind: RingKind,
    pub radius_nm: f64,
    pub radius_meters: f64,
    pub color: &'static str,
    /// Closed polygon (first vertex repeated last). Empty for a zero radius.
    pub points: Vec<Coordinates>,
}

impl RangeRing {
    pub fn new(origin: Coordinates, kind: RingKind, radius_nm: f64, segments: usize) -> Self {
        let radius_nm = radius_nm.max(0.0);
        let segments = segments.max(3);

        let points = if radius_nm > 0.0 {
            let step = 360.0 / segments as f64;
            let mut pts: Vec<Coordinates> = (0..segments)
                .map(|i| destination_point(origin, i as f64 * step, radius_nm))
                .collect();
            pts.push(pts[0]);
            pts
        } else {
            Vec::new()
        };

        Self {
            kind,
            radius_nm,
            radius_meters: radius_nm * NM_TO_METERS,
            color: kind.color(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Max ring first so the safe ring draws on top.
pub fn rings_for(origin: Coordinates, result: &RangeResult, segments: usize) -> Vec<RangeRing> {
    vec![
        RangeRing::new(origin, RingKind::Max, result.max_range_nm, segments),
        RangeRing::new(origin, RingKind::Safe, result.safe_range_nm, segments),
    ]
}

/// GeoJSON FeatureCollection: the origin point plus one polygon per drawable ring.
pub fn to_geojson(origin: Coordinates, origin_name: Option<&str>, rings: &[RangeRing]) -> Value {
    let mut features = vec![json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [origin.lng, origin.lat] },
        "properties": { "role": "origin", "name": origin_name.unwrap_or("Origin") },
    })];

    for ring in rings.iter().filter(|r| !r.is_empty()) {
        let coords: Vec<[f64; 2]> = ring.points.iter().map(|p| [p.lng, p.lat]).collect();
        features.push(json!({
            "type": "Feature",
            "geometry": { "type": "Polygon", "coordinates": [coords] },
            "properties": {
                "role": ring.kind,
                "label": ring.kind.label(),
                "radius_nm": ring.radius_nm,
                "radius_meters": ring.radius_meters,
                "stroke": ring.color,
            },
        }));
    }

    json!({ "type": "FeatureCollection", "features": features })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_pair() {
        // KLAX to KSFO is roughly 293 NM
        let lax = Coordinates::new(33.9425, -118.4081);
        let sfo = Coordinates::new(37.6189, -122.3750);
        let d = haversine_nm(lax, sfo);
        assert!((d - 293.0).abs() < 3.0, "got {}", d);
    }

    #[test]
    fn test_destination_due_north() {
        let origin = Coordinates::new(0.0, 0.0);
        // 60 NM is one degree of latitude on this sphere, near enough
        let p = destination_point(origin, 0.0, 60.0);
        assert!((p.lat - 0.9995).abs() < 0.01, "got {}", p.lat);
        assert!(p.lng.abs() < 1e-9);
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let origin = Coordinates::new(0.0, 179.5);
        let p = destination_point(origin, 90.0, 60.0);
        assert!(p.lng < -179.0, "got {}", p.lng);
        assert!(p.is_valid());
    }

    #[test]
    fn test_ring_vertices_at_radius() {
        let origin = Coordinates::new(34.0522, -118.2437);
        let ring = RangeRing::new(origin, RingKind::Max, 480.0, 36);
        assert_eq!(ring.points.len(), 37);
        assert_eq!(ring.points.first(), ring.points.last());
        for p in &ring.points {
            let d = haversine_nm(origin, *p);
            assert!((d - 480.0).abs() < 0.01, "vertex at {}", d);
        }
    }

    #[test]
    fn test_zero_radius_ring_is_empty() {
        let ring = RangeRing::new(Coordinates::new(10.0, 10.0), RingKind::Safe, 0.0, 72);
        assert!(ring.is_empty());
        assert_eq!(ring.radius_meters, 0.0);
    }

    #[test]
    fn test_geojson_skips_empty_rings() {
        let origin = Coordinates::new(10.0, 20.0);
        let rings = vec![
            RangeRing::new(origin, RingKind::Max, 100.0, 8),
            RangeRing::new(origin, RingKind::Safe, 0.0, 8),
        ];
        let gj = to_geojson(origin, Some("Test Field"), &rings);
        let features = gj["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["geometry"]["coordinates"][0], 20.0);
        assert_eq!(features[0]["properties"]["name"], "Test Field");
        assert_eq!(features[1]["properties"]["role"], "max");
        assert_eq!(features[1]["properties"]["stroke"], "#f59e0b");
    }
}
