//! Blocking HTTP client for the hosted leaderboard table.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::LeaderboardConfig;
use crate::error::LeaderboardError;

/// How many rows the top-scores projection returns.
pub const TOP_SCORES_LIMIT: u32 = 10;

/// Request timeout; the game never waits longer than this on the network.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One leaderboard row as stored by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRow {
    pub username: String,
    pub score: u32,
    /// ISO-8601 insert timestamp, assigned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for inserting a new score.
#[derive(Debug, Clone, Serialize)]
struct NewScore<'a> {
    username: &'a str,
    score: u32,
}

/// Client for the remote leaderboard table.
pub struct LeaderboardClient {
    http: reqwest::blocking::Client,
    config: LeaderboardConfig,
}

impl LeaderboardClient {
    /// Build a client with the given configuration.
    pub fn new(config: LeaderboardConfig) -> Result<Self, LeaderboardError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Build a client configured from the environment.
    pub fn from_env() -> Result<Self, LeaderboardError> {
        Self::new(LeaderboardConfig::from_env()?)
    }

    /// Fetch the top rows, highest score first.
    pub fn fetch_top_scores(&self) -> Result<Vec<ScoreRow>, LeaderboardError> {
        let limit = TOP_SCORES_LIMIT.to_string();
        let response = self
            .http
            .get(self.config.table_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .query(&[
                ("select", "username,score,created_at"),
                ("order", "score.desc"),
                ("limit", limit.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeaderboardError::Status(status.as_u16()));
        }

        Ok(response.json()?)
    }

    /// Append one row for a completed run.
    /// Zero scores are dropped without a request so the table doesn't
    /// fill up with abandoned runs.
    pub fn submit_score(&self, username: &str, score: u32) -> Result<(), LeaderboardError> {
        if score == 0 {
            log::debug!("skipping leaderboard submit for zero score");
            return Ok(());
        }

        let response = self
            .http
            .post(self.config.table_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=minimal")
            .json(&[NewScore { username, score }])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeaderboardError::Status(status.as_u16()));
        }

        log::info!("submitted score {score} for {username}");
        Ok(())
    }
}
