// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client: OAuth token exchange and activity listing.
//!
//! No token refresh and no retry: a failed call surfaces the provider's
//! status and body to the caller unchanged.

use serde::Deserialize;

use crate::error::AppError;
use crate::models::Activity;

const AUTHORIZE_URL: &str = "https://www.strava.com/oauth/authorize";
const TOKEN_URL: &str = "https://www.strava.com/oauth/token";
const API_BASE: &str = "https://www.strava.com/api/v3";

/// OAuth scope requested at authorization.
pub const OAUTH_SCOPE: &str = "activity:read_all";

/// Fixed lower bound for the activities fetch: 2024-01-01T00:00:00Z.
pub const ACTIVITIES_AFTER_EPOCH: i64 = 1_704_067_200;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    api_base: String,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a client against the real Strava endpoints.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::with_endpoints(
            client_id,
            client_secret,
            API_BASE.to_string(),
            TOKEN_URL.to_string(),
        )
    }

    /// Create a client with custom endpoints. Tests point this at a local
    /// stub server.
    pub fn with_endpoints(
        client_id: String,
        client_secret: String,
        api_base: String,
        token_url: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            token_url,
            client_id,
            client_secret,
        }
    }

    /// Provider authorization URL for the OAuth redirect. Creates no local
    /// state.
    pub fn authorize_url(&self, redirect_uri: &str) -> String {
        format!(
            "{AUTHORIZE_URL}?client_id={}&response_type=code&redirect_uri={}&scope={OAUTH_SCOPE}",
            self.client_id,
            urlencoding::encode(redirect_uri),
        )
    }

    /// Exchange an authorization code for an access token.
    ///
    /// A non-2xx provider response fails with [`AppError::UpstreamAuth`]
    /// carrying the provider's body.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AppError> {
        let response = self
            .http
            .post(&self.token_url)
            .json(&serde_json::json!({
                "client_id": self.client_id,
                "client_secret": self.client_secret,
                "code": code,
                "grant_type": "authorization_code",
            }))
            .send()
            .await
            .map_err(|e| AppError::UpstreamAuth(format!("token exchange request failed: {e}")))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamAuth(body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::UpstreamAuth(format!("invalid token response: {e}")))
    }

    /// List the athlete's activities starting after the given Unix
    /// timestamp.
    ///
    /// A non-2xx provider response fails with [`AppError::UpstreamFetch`]
    /// carrying the status and body.
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: i64,
    ) -> Result<Vec<Activity>, AppError> {
        let url = format!("{}/athlete/activities", self.api_base);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("after", after.to_string())])
            .send()
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("activities request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamFetch { status, body });
        }

        response.json().await.map_err(|e| {
            AppError::Internal(anyhow::anyhow!("invalid activities response: {e}"))
        })
    }
}

/// Token exchange response from Strava OAuth.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
