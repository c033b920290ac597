// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Abstraction over the external interactive-map engine.
//!
//! The renderer only ever talks to [`MapEngine`], so the layer/source
//! bookkeeping never leaks mapbox-specific calls into application logic.
//! [`MemoryEngine`] backs the render-plan API and the tests.

use std::collections::BTreeMap;

use geojson::Feature;
use serde_json::{json, Value};

use super::context::MapViewState;

/// Paint color for a route line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineColor {
    /// Solid highlight for the selected activity.
    Selected,
    /// Translucent red with the given alpha.
    Faded(f64),
}

impl LineColor {
    /// CSS color string as used in the layer paint object.
    pub fn css(&self) -> String {
        match self {
            LineColor::Selected => "#0000FF".to_string(),
            LineColor::Faded(alpha) => format!("rgba(255, 0, 0, {alpha})"),
        }
    }
}

/// A line layer derived from one activity route.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub id: String,
    pub source: String,
    pub line_width: f64,
    pub line_color: LineColor,
}

impl LayerSpec {
    /// Mapbox-style layer object for the render plan.
    pub fn to_style_json(&self) -> Value {
        json!({
            "id": self.id,
            "type": "line",
            "source": self.source,
            "layout": {
                "line-join": "round",
                "line-cap": "round",
            },
            "paint": {
                "line-color": self.line_color.css(),
                "line-width": self.line_width,
            },
        })
    }
}

/// Imperative surface of the external interactive-map engine.
pub trait MapEngine {
    /// Create the viewport with an initial zoom and center.
    fn create_viewport(&mut self, view: &MapViewState);
    fn add_source(&mut self, id: &str, data: Feature);
    fn add_layer(&mut self, layer: LayerSpec);
    fn remove_layer(&mut self, id: &str);
    fn remove_source(&mut self, id: &str);
    fn has_layer(&self, id: &str) -> bool;
    fn has_source(&self, id: &str) -> bool;
    /// Release engine resources. Callers must invoke this exactly once.
    fn release(&mut self);
}

/// In-memory layer/source registry implementing [`MapEngine`].
#[derive(Debug, Default)]
pub struct MemoryEngine {
    viewport: Option<MapViewState>,
    sources: BTreeMap<String, Feature>,
    layers: BTreeMap<String, LayerSpec>,
    release_calls: u32,
}

impl MemoryEngine {
    pub fn viewport(&self) -> Option<&MapViewState> {
        self.viewport.as_ref()
    }

    pub fn layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.get(id)
    }

    pub fn source(&self, id: &str) -> Option<&Feature> {
        self.sources.get(id)
    }

    pub fn layers(&self) -> impl Iterator<Item = &LayerSpec> {
        self.layers.values()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn release_count(&self) -> u32 {
        self.release_calls
    }

    /// Full render plan: GeoJSON sources plus style-layer objects, keyed
    /// and ordered by layer ID.
    pub fn to_style_json(&self) -> Value {
        let sources: serde_json::Map<String, Value> = self
            .sources
            .iter()
            .map(|(id, feature)| (id.clone(), json!({ "type": "geojson", "data": feature })))
            .collect();
        let layers: Vec<Value> = self.layers.values().map(LayerSpec::to_style_json).collect();
        json!({ "sources": sources, "layers": layers })
    }
}

impl MapEngine for MemoryEngine {
    fn create_viewport(&mut self, view: &MapViewState) {
        self.viewport = Some(*view);
    }

    fn add_source(&mut self, id: &str, data: Feature) {
        self.sources.insert(id.to_string(), data);
    }

    fn add_layer(&mut self, layer: LayerSpec) {
        self.layers.insert(layer.id.clone(), layer);
    }

    fn remove_layer(&mut self, id: &str) {
        self.layers.remove(id);
    }

    fn remove_source(&mut self, id: &str) {
        self.sources.remove(id);
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn release(&mut self) {
        self.release_calls += 1;
        self.viewport = None;
        self.sources.clear();
        self.layers.clear();
    }
}
