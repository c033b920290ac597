// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Map: visualize Strava activity routes on an interactive map.
//!
//! This crate provides the backend for the route map: Strava OAuth,
//! activity fetching, and the map model (nearest-activity search,
//! age-based fading, layer reconciliation).

pub mod config;
pub mod error;
pub mod map;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::StravaClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub strava: StravaClient,
}
