//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Every kind of NPC that can spawn at the screen edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcKind {
    /// Ordinary zombie. Baseline speed, one shot, 10 points.
    #[default]
    Walker,
    /// Fast zombie. 1.8x speed, one shot, 20 points.
    Runner,
    /// Heavy zombie. 0.6x speed, two shots, 50 points.
    Brute,
    /// Friendly. Shooting one costs score; escorting one home earns it.
    Civilian,
    /// Bonus pickup. Heals the defender on arrival, shatters if shot.
    Heart,
}

impl NpcKind {
    /// Whether this kind damages the defender on contact.
    pub fn is_zombie(&self) -> bool {
        matches!(self, NpcKind::Walker | NpcKind::Runner | NpcKind::Brute)
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    StartScreen,
    Active,
    Paused,
    GameOver,
}

/// Which playfield edge an NPC enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}
