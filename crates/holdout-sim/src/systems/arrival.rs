//! Defender contact system — consumes NPCs that reach the defender
//! and applies their type's effect exactly once.

use hecs::{Entity, World};

use holdout_core::components::{Npc, NpcProfile};
use holdout_core::constants::{CIVILIAN_RESCUE_POINTS, DEFENDER_CONTACT_RADIUS};
use holdout_core::enums::NpcKind;
use holdout_core::events::AudioEvent;
use holdout_core::types::Position;

use crate::run_state::RunState;
use crate::systems::movement;

/// Check every NPC against the contact radius.
///
/// Contacted NPCs are pushed onto the despawn buffer (drained by the
/// cleanup system at the end of the tick), so each applies its effect
/// once even if several arrive on the same tick.
pub fn run(
    world: &mut World,
    run: &mut RunState,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let defender_pos = match movement::find_defender(world) {
        Some(p) => p,
        None => return,
    };

    let mut arrivals: Vec<(Entity, NpcKind, Position)> = Vec::new();
    for (entity, (_npc, profile, pos)) in world.query_mut::<(&Npc, &NpcProfile, &Position)>() {
        if pos.distance_to(&defender_pos) < DEFENDER_CONTACT_RADIUS {
            arrivals.push((entity, profile.kind, *pos));
        }
    }

    for (entity, kind, pos) in arrivals {
        match kind {
            NpcKind::Heart => {
                run.stats.hearts_collected += 1;
                if run.heal() {
                    audio_events.push(AudioEvent::HeartPickup { health: run.health });
                }
            }
            NpcKind::Civilian => {
                run.stats.civilians_rescued += 1;
                if let Some(level) = run.award(CIVILIAN_RESCUE_POINTS) {
                    audio_events.push(AudioEvent::LevelUp { level });
                }
                audio_events.push(AudioEvent::CivilianRescued { x: pos.x, y: pos.y });
            }
            _ => {
                run.damage();
                run.stats.zombies_breached += 1;
                audio_events.push(AudioEvent::DefenderHit { health: run.health });
            }
        }
        despawn_buffer.push(entity);
    }
}
