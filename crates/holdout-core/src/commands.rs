//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a run from the start screen or the game-over screen.
    /// Ignored while a run is in progress.
    StartGame,
    /// Reset and begin a fresh run from any phase.
    Restart,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
    /// Move the aim point; the defender turns to face it.
    Aim { x: f64, y: f64 },
    /// Fire at a point in logical playfield coordinates.
    Fire { x: f64, y: f64 },
}
