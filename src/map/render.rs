// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route layer reconciliation.

use chrono::{DateTime, Utc};

use super::engine::{LayerSpec, LineColor, MapEngine};
use super::opacity;
use super::route::{decode_route, route_feature};
use crate::models::Activity;

/// Fixed line width for route layers.
pub const LINE_WIDTH: f64 = 4.0;

/// Opacity applied to every route when fading is disabled.
pub const FIXED_OPACITY: f64 = 0.25;

/// Rendering inputs besides the activity collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderSettings {
    pub fade_old_activities: bool,
    pub selected_activity: Option<u64>,
}

/// Layer/source key owned by the renderer for one activity.
pub fn route_key(activity_id: u64) -> String {
    format!("route-{activity_id}")
}

/// Rebuild the route layer set for the given activities.
///
/// Any prior layer/source under a `route-{id}` key is removed before being
/// recreated, never duplicated or left stale, so repeated invocations with
/// identical inputs leave the engine in an identical state. The renderer
/// has exclusive ownership of the keys it creates.
pub fn reconcile_routes(
    engine: &mut dyn MapEngine,
    activities: &[Activity],
    settings: &RenderSettings,
    now: DateTime<Utc>,
) {
    for activity in activities {
        let key = route_key(activity.id);

        if engine.has_layer(&key) {
            engine.remove_layer(&key);
        }
        if engine.has_source(&key) {
            engine.remove_source(&key);
        }

        let line = decode_route(&activity.map.summary_polyline);
        engine.add_source(&key, route_feature(activity.id, &line));

        let alpha = if settings.fade_old_activities {
            opacity::activity_opacity(&activity.start_date, now)
        } else {
            FIXED_OPACITY
        };
        let line_color = if settings.selected_activity == Some(activity.id) {
            LineColor::Selected
        } else {
            LineColor::Faded(alpha)
        };

        engine.add_layer(LayerSpec {
            id: key.clone(),
            source: key,
            line_width: LINE_WIDTH,
            line_color,
        });
    }
}
