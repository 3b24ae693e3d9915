//! Tap resolution system — hit-tests a shot against live NPCs and
//! applies the kind's scoring rule exactly once.

use hecs::World;

use holdout_core::components::{DepthScale, Npc, NpcProfile};
use holdout_core::constants::{BRUTE_POINTS, CIVILIAN_PENALTY, NPC_SIZE, RUNNER_POINTS, WALKER_POINTS};
use holdout_core::enums::NpcKind;
use holdout_core::events::AudioEvent;
use holdout_core::types::Position;

use crate::run_state::RunState;
use crate::world_setup::npc_kind_params;

/// Points for putting down a zombie of the given kind.
pub fn kill_points(kind: NpcKind) -> u32 {
    match kind {
        NpcKind::Walker => WALKER_POINTS,
        NpcKind::Runner => RUNNER_POINTS,
        NpcKind::Brute => BRUTE_POINTS,
        NpcKind::Civilian | NpcKind::Heart => 0,
    }
}

/// Whether a shot at `(x, y)` lands inside an NPC's scaled bounds.
/// Bounds are axis-aligned, centered on the NPC.
fn contains(pos: &Position, scale: f64, sprite_scale: f64, x: f64, y: f64) -> bool {
    let half = NPC_SIZE * scale * sprite_scale / 2.0;
    (x - pos.x).abs() <= half && (y - pos.y).abs() <= half
}

/// Resolve one Fire command.
///
/// Emits the gunshot, finds the overlapped NPC with the lowest id
/// (overlaps resolve to the earliest spawn), and applies its rule.
/// Despawns happen here so a later system in the same tick can never
/// touch a dead NPC.
pub fn resolve_shot(
    world: &mut World,
    run: &mut RunState,
    x: f64,
    y: f64,
    audio_events: &mut Vec<AudioEvent>,
) {
    audio_events.push(AudioEvent::Gunshot);

    // Lowest npc_id whose bounds contain the shot.
    let mut hit: Option<(hecs::Entity, u32, NpcKind, Position)> = None;
    for (entity, (_npc, profile, pos, depth)) in world
        .query::<(&Npc, &NpcProfile, &Position, &DepthScale)>()
        .iter()
    {
        let (_, _, sprite_scale) = npc_kind_params(profile.kind);
        if !contains(pos, depth.value, sprite_scale, x, y) {
            continue;
        }
        match hit {
            Some((_, best_id, _, _)) if best_id <= profile.npc_id => {}
            _ => hit = Some((entity, profile.npc_id, profile.kind, *pos)),
        }
    }

    let (entity, npc_id, kind, pos) = match hit {
        Some(h) => h,
        None => {
            audio_events.push(AudioEvent::GroundSplash { x, y });
            return;
        }
    };

    match kind {
        NpcKind::Heart => {
            // Shooting the bonus destroys it; no points either way.
            audio_events.push(AudioEvent::HeartShot { x: pos.x, y: pos.y });
            let _ = world.despawn(entity);
        }
        NpcKind::Civilian => {
            run.penalize(CIVILIAN_PENALTY);
            run.stats.civilians_shot += 1;
            audio_events.push(AudioEvent::CivilianShot { x: pos.x, y: pos.y });
            let _ = world.despawn(entity);
        }
        _ => {
            let dead = match world.get::<&mut NpcProfile>(entity) {
                Ok(mut profile) => {
                    profile.hit_points = profile.hit_points.saturating_sub(1);
                    profile.hit_points == 0
                }
                Err(_) => return,
            };

            if dead {
                if let Some(level) = run.award(kill_points(kind)) {
                    audio_events.push(AudioEvent::LevelUp { level });
                }
                run.stats.zombies_killed += 1;
                audio_events.push(AudioEvent::ZombieDeath {
                    kind,
                    x: pos.x,
                    y: pos.y,
                });
                let _ = world.despawn(entity);
            } else {
                audio_events.push(AudioEvent::BruteWounded {
                    npc_id,
                    x: pos.x,
                    y: pos.y,
                });
            }
        }
    }
}
