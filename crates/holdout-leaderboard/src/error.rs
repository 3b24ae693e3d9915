//! Leaderboard error type.

use thiserror::Error;

/// Everything that can go wrong talking to the leaderboard service.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// A required environment variable is not set.
    #[error("missing leaderboard configuration: {0} is not set")]
    MissingConfig(&'static str),

    /// Transport-level failure (DNS, TLS, timeout, malformed body).
    #[error("leaderboard request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("leaderboard service returned HTTP {0}")]
    Status(u16),
}
