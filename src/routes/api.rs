// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map page and activity APIs.
//!
//! The browser stays thin: the server fetches activities from Strava, runs
//! the nearest-activity search, and computes the route render plan; the
//! page applies the plan to mapbox-gl verbatim.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use geo::Coord;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::map::engine::{MapEngine, MemoryEngine};
use crate::map::{find_nearby_activities, reconcile_routes, RenderSettings, INITIAL_VIEW};
use crate::models::{Activity, NearbyActivity};
use crate::routes::auth::TOKEN_COOKIE;
use crate::services::strava::ACTIVITIES_AFTER_EPOCH;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/api/activities", get(get_activities))
        .route("/api/activities/nearby", get(get_nearby))
        .route("/api/map/layers", get(get_map_layers))
}

/// Access token from the session cookie.
fn session_token(jar: &CookieJar) -> Result<String> {
    jar.get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(AppError::Unauthorized)
}

// ─── Activities ──────────────────────────────────────────────

/// List the user's activities since the fixed start boundary.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Json<Vec<Activity>>> {
    let token = session_token(&jar)?;
    let activities = state
        .strava
        .list_activities(&token, ACTIVITIES_AFTER_EPOCH)
        .await?;

    tracing::debug!(count = activities.len(), "Fetched activities");
    Ok(Json(activities))
}

#[derive(Deserialize)]
struct NearbyQuery {
    lat: f64,
    lng: f64,
}

/// The five activities whose route passes closest to the clicked point.
async fn get_nearby(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<NearbyActivity>>> {
    let token = session_token(&jar)?;
    let activities = state
        .strava
        .list_activities(&token, ACTIVITIES_AFTER_EPOCH)
        .await?;

    let point = Coord {
        x: query.lng,
        y: query.lat,
    };
    Ok(Json(find_nearby_activities(point, &activities)))
}

// ─── Render Plan ─────────────────────────────────────────────

#[derive(Deserialize)]
struct LayersQuery {
    #[serde(default)]
    selected: Option<u64>,
    #[serde(default)]
    fade: bool,
}

/// Route layer render plan for the current activity set.
async fn get_map_layers(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<LayersQuery>,
) -> Result<Json<serde_json::Value>> {
    let token = session_token(&jar)?;
    let activities = state
        .strava
        .list_activities(&token, ACTIVITIES_AFTER_EPOCH)
        .await?;

    let settings = RenderSettings {
        fade_old_activities: query.fade,
        selected_activity: query.selected,
    };

    let mut engine = MemoryEngine::default();
    engine.create_viewport(&INITIAL_VIEW);
    reconcile_routes(&mut engine, &activities, &settings, chrono::Utc::now());

    Ok(Json(engine.to_style_json()))
}

// ─── Map Page ────────────────────────────────────────────────

/// Server-rendered map page.
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = INDEX_HTML
        .replace("__MAPBOX_TOKEN__", &state.config.mapbox_access_token)
        .replace("__ZOOM__", &INITIAL_VIEW.zoom.to_string())
        .replace(
            "__CENTER__",
            &format!("[{}, {}]", INITIAL_VIEW.center[0], INITIAL_VIEW.center[1]),
        );
    Html(page)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Strava Map</title>
  <script src="https://api.mapbox.com/mapbox-gl-js/v2.15.0/mapbox-gl.js"></script>
  <link href="https://api.mapbox.com/mapbox-gl-js/v2.15.0/mapbox-gl.css" rel="stylesheet">
  <style>
    body { margin: 0; font-family: sans-serif; }
    #app { display: flex; flex-direction: column; height: 100vh; }
    #fade-row { padding: 10px; }
    #content { display: flex; flex: 1; }
    #map { width: 75%; }
    #sidebar { width: 25%; overflow-y: auto; padding: 10px; background: #f0f0f0; }
    #sidebar li { cursor: pointer; padding: 10px; margin-bottom: 5px; background: white; border-radius: 5px; list-style: none; }
    #sidebar li.selected { background: #ddd; }
    #sidebar li .name { font-weight: bold; }
    #info { position: absolute; bottom: 10px; right: 27%; background: rgba(255,255,255,0.7); padding: 5px; border-radius: 3px; font-size: 12px; }
  </style>
</head>
<body>
<div id="app">
  <div id="fade-row">
    <label><input type="checkbox" id="fade"> Fade old activities</label>
    <a href="/auth/login" style="float: right">Connect with Strava</a>
  </div>
  <div id="content">
    <div id="map"></div>
    <div id="sidebar">
      <h3>Nearby Activities</h3>
      <div id="nearby"><p>Click on the map to see nearby activities</p></div>
    </div>
  </div>
  <div id="info"></div>
</div>
<script>
  mapboxgl.accessToken = '__MAPBOX_TOKEN__';
  const map = new mapboxgl.Map({
    container: 'map',
    style: 'mapbox://styles/mapbox/streets-v11',
    center: __CENTER__,
    zoom: __ZOOM__,
  });

  let selected = null;
  let applied = [];

  async function applyLayers() {
    const params = new URLSearchParams({ fade: document.getElementById('fade').checked });
    if (selected !== null) params.set('selected', selected);
    const resp = await fetch('/api/map/layers?' + params);
    if (!resp.ok) return;
    const plan = await resp.json();
    for (const id of applied) {
      if (map.getLayer(id)) map.removeLayer(id);
      if (map.getSource(id)) map.removeSource(id);
    }
    applied = [];
    for (const [id, source] of Object.entries(plan.sources)) {
      map.addSource(id, source);
    }
    for (const layer of plan.layers) {
      map.addLayer(layer);
      applied.push(layer.id);
    }
  }

  function updateInfo() {
    const c = map.getCenter();
    document.getElementById('info').textContent =
      'Zoom: ' + map.getZoom().toFixed(2) + ' | Center: [' + c.lng.toFixed(2) + ', ' + c.lat.toFixed(2) + ']';
  }

  function renderSidebar(nearby) {
    const box = document.getElementById('nearby');
    if (!nearby.length) {
      box.innerHTML = '<p>Click on the map to see nearby activities</p>';
      return;
    }
    const list = document.createElement('ul');
    list.style.padding = '0';
    for (const activity of nearby) {
      const item = document.createElement('li');
      if (activity.id === selected) item.classList.add('selected');
      const date = new Date(activity.start_date)
        .toLocaleDateString('en-GB', { day: 'numeric', month: 'long', year: 'numeric' });
      item.innerHTML = '<div class="name"></div><div class="date"></div><div class="dist"></div>';
      item.querySelector('.name').textContent = activity.name;
      item.querySelector('.date').textContent = date;
      item.querySelector('.dist').textContent = (activity.distance / 1000).toFixed(2) + ' km';
      item.onclick = () => { selected = activity.id; applyLayers(); renderSidebar(nearby); };
      list.appendChild(item);
    }
    box.replaceChildren(list);
  }

  map.on('load', applyLayers);
  map.on('move', updateInfo);
  map.on('click', async (e) => {
    const resp = await fetch('/api/activities/nearby?lat=' + e.lngLat.lat + '&lng=' + e.lngLat.lng);
    if (resp.ok) renderSidebar(await resp.json());
  });
  document.getElementById('fade').onchange = applyLayers;
  updateInfo();
</script>
</body>
</html>
"#;
