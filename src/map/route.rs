// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route polyline decoding and GeoJSON conversion.

use geo::LineString;
use geojson::{Feature, Geometry, JsonObject, Value};

/// Strava encodes summary polylines at precision 5.
pub const POLYLINE_PRECISION: u32 = 5;

/// Decode an encoded route into a coordinate sequence.
///
/// Activities without a route (or with a corrupt polyline) decode to an
/// empty line string; callers treat that as "no route".
pub fn decode_route(encoded: &str) -> LineString<f64> {
    if encoded.is_empty() {
        return LineString::new(Vec::new());
    }
    match polyline::decode_polyline(encoded, POLYLINE_PRECISION) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode route polyline");
            LineString::new(Vec::new())
        }
    }
}

/// GeoJSON feature for a route, with the activity ID as a property so the
/// selection paint expression can match on it.
pub fn route_feature(activity_id: u64, line: &LineString<f64>) -> Feature {
    let coordinates = line.coords().map(|c| vec![c.x, c.y]).collect();

    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), serde_json::json!(activity_id));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(coordinates))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
