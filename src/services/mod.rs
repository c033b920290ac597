// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - upstream API clients.

pub mod strava;

pub use strava::StravaClient;
