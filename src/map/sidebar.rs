// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Side-panel view models: the nearby-activities list and the viewport
//! readout. Pure presentation over [`MapContext`]; selection flows back
//! through the controller.

use chrono::DateTime;
use serde::Serialize;

use super::context::MapContext;
use super::MapError;

/// Shown when no click has produced a nearby list yet.
pub const EMPTY_PLACEHOLDER: &str = "Click on the map to see nearby activities";

/// One rendered sidebar row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    pub id: u64,
    pub name: String,
    /// Long-form start date, e.g. "14 June 2024".
    pub start_date: String,
    /// Distance in kilometers with two decimals, e.g. "5.00 km".
    pub distance: String,
    pub selected: bool,
}

/// Sidebar contents: a placeholder or the ordered nearby list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SidebarView {
    Placeholder(&'static str),
    Entries(Vec<SidebarEntry>),
}

/// Build the sidebar from the shared context.
///
/// Fails with [`MapError::MissingContext`] when rendered outside an active
/// map context.
pub fn sidebar_view(context: Option<&MapContext>) -> Result<SidebarView, MapError> {
    let context = context.ok_or(MapError::MissingContext("sidebar"))?;

    if context.nearby_activities.is_empty() {
        return Ok(SidebarView::Placeholder(EMPTY_PLACEHOLDER));
    }

    let entries = context
        .nearby_activities
        .iter()
        .map(|nearby| SidebarEntry {
            id: nearby.activity.id,
            name: nearby.activity.name.clone(),
            start_date: format_start_date(&nearby.activity.start_date),
            distance: format_distance(nearby.activity.distance),
            selected: context.selected_activity == Some(nearby.activity.id),
        })
        .collect();

    Ok(SidebarView::Entries(entries))
}

/// Zoom/center readout for the corner info box.
pub fn view_info(context: Option<&MapContext>) -> Result<String, MapError> {
    let context = context.ok_or(MapError::MissingContext("map info"))?;
    let view = &context.view;
    Ok(format!(
        "Zoom: {:.2} | Center: [{:.2}, {:.2}]",
        view.zoom, view.center[0], view.center[1]
    ))
}

/// Meters to kilometers with two decimal places.
pub fn format_distance(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

/// Long-form date: day, full month name, year. Falls back to the raw
/// string for unparseable dates.
pub fn format_start_date(start_date: &str) -> String {
    match DateTime::parse_from_rfc3339(start_date) {
        Ok(date) => date.format("%-d %B %Y").to_string(),
        Err(_) => start_date.to_string(),
    }
}
