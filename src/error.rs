// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::map::MapError;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Token exchange failed; carries the provider's response body.
    #[error("Strava token exchange failed: {0}")]
    UpstreamAuth(String),

    /// Activities fetch failed; carries the provider's status and body.
    #[error("Strava API error: HTTP {status}: {body}")]
    UpstreamFetch { status: u16, body: String },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::UpstreamAuth(body) => {
                tracing::error!(body = %body, "Strava token exchange failed");
                (StatusCode::BAD_GATEWAY, "upstream_auth_error", Some(body.clone()))
            }
            AppError::UpstreamFetch { status, body } => {
                tracing::error!(status, body = %body, "Strava activities fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_fetch_error",
                    Some(format!("HTTP {status}: {body}")),
                )
            }
            AppError::Map(err) => {
                tracing::error!(error = %err, "Map context error");
                (StatusCode::INTERNAL_SERVER_ERROR, "map_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
