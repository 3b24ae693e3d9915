//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::NpcKind;

/// Marks the stationary defender at center screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Defender;

/// Marks a spawned edge NPC (zombie variant, civilian, or heart).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Npc;

/// Identity and combat state of an NPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcProfile {
    /// Stable id assigned at spawn, increasing in spawn order.
    pub npc_id: u32,
    pub kind: NpcKind,
    /// Remaining shots to put this NPC down (only brutes start above 1).
    pub hit_points: u32,
    /// Shots required when freshly spawned.
    pub max_hit_points: u32,
    /// Movement speed in px/s, fixed at spawn time.
    pub speed: f64,
}

/// Facing rotation in radians, toward the travel direction (NPCs)
/// or toward the pointer (defender).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing {
    pub rotation: f64,
}

/// Pseudo-depth scale derived from the NPC's vertical position.
/// Applied on top of the kind's sprite scale for rendering and hit testing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DepthScale {
    pub value: f64,
}
