// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive map model.
//!
//! The external map engine (mapbox-gl in the browser) is wrapped behind the
//! [`engine::MapEngine`] trait; everything above it — nearest-activity
//! search, age-based fading, layer reconciliation, the view controller and
//! the side panels — is plain Rust driven by that trait.

pub mod context;
pub mod engine;
pub mod nearby;
pub mod opacity;
pub mod render;
pub mod route;
pub mod sidebar;
pub mod view;

pub use context::{MapContext, MapViewState, INITIAL_VIEW};
pub use engine::{LayerSpec, LineColor, MapEngine, MemoryEngine};
pub use nearby::find_nearby_activities;
pub use render::{reconcile_routes, RenderSettings};
pub use view::{MapPhase, MapViewController};

/// Errors from the map model.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A presentation component was rendered outside its shared-state scope.
    /// This is a programming-usage error, not a runtime condition.
    #[error("{0} rendered outside of an active map context")]
    MissingContext(&'static str),
}
