//! Leaderboard service configuration.

use crate::error::LeaderboardError;

/// Environment variable holding the service base URL.
pub const ENV_URL: &str = "HOLDOUT_LEADERBOARD_URL";

/// Environment variable holding the service API key.
pub const ENV_KEY: &str = "HOLDOUT_LEADERBOARD_KEY";

/// Connection settings for the hosted leaderboard service.
#[derive(Debug, Clone)]
pub struct LeaderboardConfig {
    /// Service base URL, without a trailing slash.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
}

impl LeaderboardConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self, LeaderboardError> {
        let base_url =
            std::env::var(ENV_URL).map_err(|_| LeaderboardError::MissingConfig(ENV_URL))?;
        let api_key =
            std::env::var(ENV_KEY).map_err(|_| LeaderboardError::MissingConfig(ENV_KEY))?;
        Ok(Self::new(base_url, api_key))
    }

    /// Full URL of the leaderboard table endpoint.
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/leaderboard", self.base_url)
    }
}
