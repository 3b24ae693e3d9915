//! One-shot events emitted by the simulation for audio and FX feedback.
//!
//! The frontend plays a sound or spawns an effect per event and then
//! forgets it; persistent state lives in the snapshot instead.

use serde::{Deserialize, Serialize};

use crate::enums::NpcKind;

/// Audio/FX events drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A shot was fired (every Fire command).
    Gunshot,
    /// A shot hit nothing; dirt kicks up at the impact point.
    GroundSplash { x: f64, y: f64 },
    /// A zombie went down.
    ZombieDeath { kind: NpcKind, x: f64, y: f64 },
    /// A brute took a non-lethal hit.
    BruteWounded { npc_id: u32, x: f64, y: f64 },
    /// A civilian entered the field.
    CivilianScream { npc_id: u32 },
    /// A civilian was shot.
    CivilianShot { x: f64, y: f64 },
    /// A civilian reached the defender alive.
    CivilianRescued { x: f64, y: f64 },
    /// A heart bonus was shot and destroyed.
    HeartShot { x: f64, y: f64 },
    /// A heart reached the defender and healed.
    HeartPickup { health: u32 },
    /// A zombie reached the defender.
    DefenderHit { health: u32 },
    /// The score crossed into a higher difficulty level.
    LevelUp { level: u32 },
    /// The defender's health reached zero.
    GameOver { score: u32 },
}
