// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Age-based opacity for route rendering.

use chrono::{DateTime, Utc};

/// Activities older than this render at the minimum opacity.
pub const MAX_AGE_DAYS: f64 = 14.0;
/// Opacity floor for old activities.
pub const MIN_OPACITY: f64 = 0.1;
/// Opacity for brand-new activities.
pub const MAX_OPACITY: f64 = 0.25;

const MILLIS_PER_DAY: f64 = 1000.0 * 3600.0 * 24.0;

/// Opacity for an activity started at `start_date`, as of `now`.
///
/// Unparseable dates render at full opacity; the provider controls the
/// field and a bad date should not blank the whole map.
pub fn activity_opacity(start_date: &str, now: DateTime<Utc>) -> f64 {
    let age_days = match DateTime::parse_from_rfc3339(start_date) {
        Ok(start) => (now - start.with_timezone(&Utc)).num_milliseconds() as f64 / MILLIS_PER_DAY,
        Err(_) => 0.0,
    };
    opacity_for_age(age_days)
}

/// Linear decay from [`MAX_OPACITY`] at age 0 to [`MIN_OPACITY`] at
/// [`MAX_AGE_DAYS`], clamped at the floor. Negative ages (clock skew)
/// count as 0.
pub fn opacity_for_age(age_days: f64) -> f64 {
    let age = age_days.max(0.0);
    (MAX_OPACITY - (age / MAX_AGE_DAYS) * (MAX_OPACITY - MIN_OPACITY)).max(MIN_OPACITY)
}
