// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map view controller: owns the engine handle and the shared context.

use chrono::Utc;
use geo::Coord;

use super::context::{MapContext, MapViewState, INITIAL_VIEW};
use super::engine::MapEngine;
use super::nearby::find_nearby_activities;
use super::render::{reconcile_routes, RenderSettings};
use crate::models::Activity;

/// Lifecycle of the external map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPhase {
    /// No engine attached yet.
    Uninitialized,
    /// Viewport created, waiting for the engine's load signal.
    Loading,
    /// Load signal received; events are processed.
    Ready,
}

/// Owns the map engine handle, the viewport state, and the shared
/// [`MapContext`]. The engine is released exactly once, on drop (or via an
/// explicit [`close`](Self::close)), regardless of exit path.
pub struct MapViewController<E: MapEngine> {
    engine: Option<E>,
    phase: MapPhase,
    context: MapContext,
}

impl<E: MapEngine> MapViewController<E> {
    /// Attach an engine and create the viewport; transitions
    /// Uninitialized → Loading.
    pub fn new(mut engine: E, activities: Vec<Activity>) -> Self {
        let mut controller = Self {
            engine: None,
            phase: MapPhase::Uninitialized,
            context: MapContext::new(activities),
        };
        engine.create_viewport(&INITIAL_VIEW);
        controller.engine = Some(engine);
        controller.phase = MapPhase::Loading;
        controller
    }

    pub fn phase(&self) -> MapPhase {
        self.phase
    }

    pub fn context(&self) -> &MapContext {
        &self.context
    }

    /// Engine access for inspection; `None` after close.
    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    /// Engine load-completion signal; transitions Loading → Ready and
    /// performs the first render.
    pub fn handle_load(&mut self) {
        if self.phase == MapPhase::Loading {
            self.phase = MapPhase::Ready;
            self.render();
        }
    }

    /// Viewport-change event; updates display state only.
    pub fn handle_move(&mut self, view: MapViewState) {
        if self.phase == MapPhase::Ready {
            self.context.view = view;
        }
    }

    /// Click event: replace the nearby-activities list. No other state is
    /// touched.
    pub fn handle_click(&mut self, point: Coord<f64>) {
        if self.phase != MapPhase::Ready {
            return;
        }
        self.context.nearby_activities = find_nearby_activities(point, &self.context.activities);
    }

    /// Sidebar click-to-select; re-renders with the highlight color.
    pub fn select_activity(&mut self, id: Option<u64>) {
        self.context.selected_activity = id;
        self.render();
    }

    /// Toggle age-based fading; re-renders with the new opacities.
    pub fn set_fade_old_activities(&mut self, fade: bool) {
        self.context.fade_old_activities = fade;
        self.render();
    }

    /// Replace the activity collection (after a fetch) and re-render.
    pub fn set_activities(&mut self, activities: Vec<Activity>) {
        self.context.activities = activities;
        self.render();
    }

    fn render(&mut self) {
        if self.phase != MapPhase::Ready {
            return;
        }
        let settings = RenderSettings {
            fade_old_activities: self.context.fade_old_activities,
            selected_activity: self.context.selected_activity,
        };
        if let Some(engine) = self.engine.as_mut() {
            reconcile_routes(engine, &self.context.activities, &settings, Utc::now());
        }
    }

    /// Release the external map engine. Safe to call before drop; the
    /// engine is released at most once either way.
    pub fn close(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.release();
        }
    }
}

impl<E: MapEngine> Drop for MapViewController<E> {
    fn drop(&mut self) {
        self.close();
    }
}
