// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth authentication routes.

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::AppState;

/// Cookie holding the raw Strava access token. Not HTTP-only: the map page
/// reads it to know whether the user is connected.
pub const TOKEN_COOKIE: &str = "strava_token";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", get(login))
        .route("/auth/callback", get(callback))
}

/// Start OAuth flow - redirect to Strava authorization.
async fn login(State(state): State<Arc<AppState>>) -> Redirect {
    let auth_url = state.strava.authorize_url(&state.config.strava_redirect_uri);

    tracing::info!(
        client_id = %state.config.strava_client_id,
        "Starting OAuth flow, redirecting to Strava"
    );

    Redirect::temporary(&auth_url)
}

#[derive(Deserialize)]
pub struct CallbackParams {
    code: String,
}

/// OAuth callback - exchange the code for a token, store it in a cookie,
/// and send the user back to the map.
///
/// A provider failure propagates as-is; no cookie is set in that case.
async fn callback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<(CookieJar, Redirect)> {
    tracing::info!("Exchanging authorization code for token");

    let token = state.strava.exchange_code(&params.code).await?;

    tracing::info!("Token exchange successful, setting session cookie");

    let cookie = token_cookie(token.access_token, state.config.cookie_same_site);
    Ok((jar.add(cookie), Redirect::temporary("/")))
}

fn token_cookie(access_token: String, same_site: SameSite) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, access_token);
    cookie.set_path("/");
    cookie.set_http_only(false);
    cookie.set_same_site(same_site);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cookie_attributes() {
        let cookie = token_cookie("tok123".to_string(), SameSite::Lax);

        assert_eq!(cookie.name(), "strava_token");
        assert_eq!(cookie.value(), "tok123");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
