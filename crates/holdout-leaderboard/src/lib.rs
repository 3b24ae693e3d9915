//! Remote leaderboard client for HOLDOUT.
//!
//! Thin blocking client for the hosted leaderboard table: read the
//! top-10 projection, append one row per completed run. Failures are
//! expected to be tolerated by callers — the game never blocks on the
//! leaderboard being reachable.

pub mod client;
pub mod config;
pub mod error;

pub use client::{LeaderboardClient, ScoreRow};
pub use config::LeaderboardConfig;
pub use error::LeaderboardError;
