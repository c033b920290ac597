//! Application configuration loaded from environment variables.
//!
//! All Strava credentials are required at startup; the map token is passed
//! through to the page so the browser can load tiles.

use axum_extra::extract::cookie::SameSite;
use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth client ID (public)
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// OAuth redirect URI registered with Strava
    pub strava_redirect_uri: String,
    /// Public Mapbox access token for the map page
    pub mapbox_access_token: String,
    /// SameSite policy for the token cookie
    pub cookie_same_site: SameSite,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            strava_redirect_uri: "http://localhost:8080/auth/callback".to_string(),
            mapbox_access_token: "pk.test".to_string(),
            cookie_same_site: SameSite::Lax,
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            strava_client_id: env::var("STRAVA_CLIENT_ID")
                .map_err(|_| ConfigError::Missing("STRAVA_CLIENT_ID"))?,
            strava_client_secret: env::var("STRAVA_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STRAVA_CLIENT_SECRET"))?,
            strava_redirect_uri: env::var("STRAVA_REDIRECT_URI")
                .map_err(|_| ConfigError::Missing("STRAVA_REDIRECT_URI"))?,
            mapbox_access_token: env::var("MAPBOX_ACCESS_TOKEN")
                .map_err(|_| ConfigError::Missing("MAPBOX_ACCESS_TOKEN"))?,
            cookie_same_site: env::var("COOKIE_SAME_SITE")
                .map(|v| parse_same_site(&v))
                .unwrap_or(SameSite::Lax),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}

/// Parse a SameSite policy name, falling back to Lax for unknown values.
fn parse_same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("STRAVA_CLIENT_ID", "test_id");
        env::set_var("STRAVA_CLIENT_SECRET", "test_secret");
        env::set_var("STRAVA_REDIRECT_URI", "http://localhost:8080/auth/callback");
        env::set_var("MAPBOX_ACCESS_TOKEN", "pk.test");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.strava_client_id, "test_id");
        assert_eq!(config.strava_client_secret, "test_secret");
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_parse_same_site() {
        assert_eq!(parse_same_site("strict"), SameSite::Strict);
        assert_eq!(parse_same_site("None"), SameSite::None);
        assert_eq!(parse_same_site("lax"), SameSite::Lax);
        assert_eq!(parse_same_site("bogus"), SameSite::Lax);
    }
}
