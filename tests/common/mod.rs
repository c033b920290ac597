// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;

use geo::{Coord, LineString};
use strava_map::config::Config;
use strava_map::routes::create_router;
use strava_map::services::StravaClient;
use strava_map::AppState;

/// Create a test app whose Strava client points at the given upstream
/// base URL (a stub server from [`spawn_upstream`]).
#[allow(dead_code)]
pub fn create_test_app(upstream: &str) -> axum::Router {
    let config = Config::default();
    let strava = StravaClient::with_endpoints(
        config.strava_client_id.clone(),
        config.strava_client_secret.clone(),
        format!("{upstream}/api/v3"),
        format!("{upstream}/oauth/token"),
    );

    let state = Arc::new(AppState { config, strava });
    create_router(state)
}

/// Create a test app with no reachable upstream, for routes that never
/// call Strava.
#[allow(dead_code)]
pub fn create_offline_app() -> axum::Router {
    create_test_app("http://127.0.0.1:9")
}

/// Serve a stub upstream on an ephemeral port; returns its base URL.
#[allow(dead_code)]
pub async fn spawn_upstream(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{addr}")
}

/// Encode a lng/lat path as a precision-5 polyline.
#[allow(dead_code)]
pub fn encoded_line(coords: &[(f64, f64)]) -> String {
    let line = LineString::from(
        coords
            .iter()
            .map(|&(lng, lat)| Coord { x: lng, y: lat })
            .collect::<Vec<_>>(),
    );
    polyline::encode_coordinates(line, 5).expect("encode polyline")
}
