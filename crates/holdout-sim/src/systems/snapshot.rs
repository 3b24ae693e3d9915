//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use holdout_core::components::{Defender, DepthScale, Facing, Npc, NpcProfile};
use holdout_core::enums::GamePhase;
use holdout_core::events::AudioEvent;
use holdout_core::state::{DefenderView, GameStateSnapshot, HudView, NpcView, RunStatsView};
use holdout_core::types::{Position, SimTime};

use crate::run_state::RunState;
use crate::world_setup::npc_kind_params;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    run: &RunState,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        hud: HudView {
            score: run.score,
            health: run.health,
            level: run.level,
        },
        defender: build_defender(world),
        npcs: build_npcs(world),
        stats: RunStatsView {
            zombies_killed: run.stats.zombies_killed,
            civilians_rescued: run.stats.civilians_rescued,
            civilians_shot: run.stats.civilians_shot,
            hearts_collected: run.stats.hearts_collected,
            zombies_breached: run.stats.zombies_breached,
        },
        audio_events,
    }
}

/// Build DefenderView from the defender entity.
fn build_defender(world: &World) -> DefenderView {
    world
        .query::<(&Defender, &Position, &Facing)>()
        .iter()
        .next()
        .map(|(_, (_, pos, facing))| DefenderView {
            position: *pos,
            rotation: facing.rotation,
        })
        .unwrap_or_default()
}

/// Build NpcView list from all live NPCs, in spawn order.
fn build_npcs(world: &World) -> Vec<NpcView> {
    let mut npcs: Vec<NpcView> = world
        .query::<(&Npc, &NpcProfile, &Position, &Facing, &DepthScale)>()
        .iter()
        .map(|(_, (_, profile, pos, facing, depth))| {
            let (_, _, sprite_scale) = npc_kind_params(profile.kind);
            NpcView {
                npc_id: profile.npc_id,
                kind: profile.kind,
                position: *pos,
                rotation: facing.rotation,
                scale: depth.value * sprite_scale,
                hit_points: profile.hit_points,
                max_hit_points: profile.max_hit_points,
            }
        })
        .collect();

    npcs.sort_by_key(|n| n.npc_id);
    npcs
}
