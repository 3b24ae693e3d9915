//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, NpcKind};
use crate::events::AudioEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub defender: DefenderView,
    pub npcs: Vec<NpcView>,
    pub stats: RunStatsView,
    pub audio_events: Vec<AudioEvent>,
}

/// The three values the HUD displays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub health: u32,
    pub level: u32,
}

/// Defender position and facing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefenderView {
    pub position: Position,
    /// Rotation toward the last aim point (radians).
    pub rotation: f64,
}

/// One live NPC, in spawn order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcView {
    pub npc_id: u32,
    pub kind: NpcKind,
    pub position: Position,
    /// Travel-direction rotation including the sprite correction (radians).
    pub rotation: f64,
    /// Total render scale: pseudo-depth times the kind's sprite scale.
    pub scale: f64,
    /// Remaining shots; below `max_hit_points` means visibly wounded.
    pub hit_points: u32,
    pub max_hit_points: u32,
}

/// Counters accumulated over the current run, for the game-over screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStatsView {
    pub zombies_killed: u32,
    pub civilians_rescued: u32,
    pub civilians_shot: u32,
    pub hearts_collected: u32,
    /// Zombies that reached the defender.
    pub zombies_breached: u32,
}
