// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity models as returned by the activities-list endpoint.

use serde::{Deserialize, Serialize};

/// Summary activity from the Strava activities-list endpoint.
///
/// Immutable once fetched; never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    pub id: u64,
    /// Activity name/title
    pub name: String,
    /// Distance in meters
    pub distance: f64,
    /// Start date/time (ISO 8601)
    pub start_date: String,
    /// Route polylines
    pub map: ActivityMap,
}

/// Activity map data with the encoded route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityMap {
    #[serde(default)]
    pub summary_polyline: String,
}

/// An activity annotated with its distance to a clicked point.
///
/// Distance is in raw coordinate-space units (planar Euclidean over
/// degrees), not meters. Derived on every click, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyActivity {
    #[serde(flatten)]
    pub activity: Activity,
    pub distance_from_click: f64,
}

impl Activity {
    /// Convenience constructor for tests and fixtures.
    pub fn new(id: u64, name: &str, distance: f64, start_date: &str, polyline: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            distance,
            start_date: start_date.to_string(),
            map: ActivityMap {
                summary_polyline: polyline.to_string(),
            },
        }
    }
}
