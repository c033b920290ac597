// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared map state.

use serde::Serialize;

use crate::models::{Activity, NearbyActivity};

/// Current map viewport: zoom level and `[lng, lat]` center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapViewState {
    pub zoom: f64,
    pub center: [f64; 2],
}

/// Initial viewport (central Paris).
pub const INITIAL_VIEW: MapViewState = MapViewState {
    zoom: 10.86,
    center: [2.36, 48.86],
};

/// Shared state read by the renderer and the side panels.
///
/// Owned by the map view controller and scoped to its lifetime; dependents
/// receive it by reference rather than threading each field separately.
#[derive(Debug, Clone)]
pub struct MapContext {
    /// Full fetched activity collection.
    pub activities: Vec<Activity>,
    /// At most one selected activity; affects only the render highlight.
    pub selected_activity: Option<u64>,
    /// Fade-old-activities toggle; affects only the opacity computation.
    pub fade_old_activities: bool,
    /// Result of the last map click, capped and sorted by the finder.
    pub nearby_activities: Vec<NearbyActivity>,
    /// Viewport state, read for display only.
    pub view: MapViewState,
}

impl MapContext {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            selected_activity: None,
            fade_old_activities: false,
            nearby_activities: Vec::new(),
            view: INITIAL_VIEW,
        }
    }
}
