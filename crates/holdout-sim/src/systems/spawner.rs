//! Spawn scheduling system — one NPC per interval, mix by level.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::NpcProfile;
use holdout_core::constants::{HEART_SPAWN_CHANCE, MAX_LEVEL, SPAWN_INTERVAL_TICKS};
use holdout_core::enums::NpcKind;
use holdout_core::events::AudioEvent;

use crate::world_setup;

/// Tracks when the next NPC is due.
#[derive(Debug, Clone)]
pub struct SpawnClock {
    pub next_spawn_tick: u64,
}

impl Default for SpawnClock {
    fn default() -> Self {
        // First spawn one full level-1 interval into the run.
        Self {
            next_spawn_tick: SPAWN_INTERVAL_TICKS[0],
        }
    }
}

/// Spawn interval in ticks at the given level.
pub fn spawn_interval_ticks(level: u32) -> u64 {
    let idx = level.clamp(1, MAX_LEVEL) as usize - 1;
    SPAWN_INTERVAL_TICKS[idx]
}

/// Roll the kind for the next spawn.
///
/// A heart can appear at any level; otherwise the mix shifts with
/// difficulty: runners from level 2, brutes from level 3, and an even
/// four-way split at level 4. Civilians are always in the mix.
pub fn roll_npc_kind(rng: &mut ChaCha8Rng, level: u32) -> NpcKind {
    if rng.gen_bool(HEART_SPAWN_CHANCE) {
        return NpcKind::Heart;
    }

    let roll: f64 = rng.gen_range(0.0..100.0);
    match level {
        1 => {
            if roll < 80.0 {
                NpcKind::Walker
            } else {
                NpcKind::Civilian
            }
        }
        2 => {
            if roll < 50.0 {
                NpcKind::Walker
            } else if roll < 80.0 {
                NpcKind::Runner
            } else {
                NpcKind::Civilian
            }
        }
        3 => {
            if roll < 30.0 {
                NpcKind::Walker
            } else if roll < 50.0 {
                NpcKind::Runner
            } else if roll < 80.0 {
                NpcKind::Brute
            } else {
                NpcKind::Civilian
            }
        }
        _ => {
            if roll < 25.0 {
                NpcKind::Walker
            } else if roll < 50.0 {
                NpcKind::Runner
            } else if roll < 75.0 {
                NpcKind::Brute
            } else {
                NpcKind::Civilian
            }
        }
    }
}

/// Check the clock and spawn the next NPC if it is due.
/// The interval for the following spawn is taken from the current
/// level, so difficulty changes apply from the next spawn onward.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut SpawnClock,
    level: u32,
    current_tick: u64,
    next_npc_id: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
) {
    if current_tick < clock.next_spawn_tick {
        return;
    }

    let kind = roll_npc_kind(rng, level);
    let entity = world_setup::spawn_npc(world, rng, kind, level, next_npc_id);

    if kind == NpcKind::Civilian {
        if let Ok(profile) = world.get::<&NpcProfile>(entity) {
            audio_events.push(AudioEvent::CivilianScream {
                npc_id: profile.npc_id,
            });
        }
    }

    clock.next_spawn_tick = current_tick + spawn_interval_ticks(level);
}
