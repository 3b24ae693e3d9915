//! Tauri shell for HOLDOUT.
//!
//! Hosts the game-loop thread, bridges frontend IPC to the engine,
//! persists the player profile, and forwards scores to the remote
//! leaderboard.

pub mod game_loop;
pub mod ipc;
pub mod profile;
pub mod state;
