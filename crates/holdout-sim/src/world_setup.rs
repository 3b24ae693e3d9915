//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the defender and edge NPCs with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::{Defender, DepthScale, Facing, Npc, NpcProfile};
use holdout_core::constants::*;
use holdout_core::enums::{NpcKind, SpawnEdge};
use holdout_core::types::Position;

/// Center of the playfield, where the defender stands.
pub fn defender_position() -> Position {
    Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0)
}

/// Spawn the stationary defender at center screen.
pub fn spawn_defender(world: &mut World) -> hecs::Entity {
    world.spawn((Defender, defender_position(), Facing::default()))
}

/// Kind-specific tuning: (speed multiplier, hit points, sprite scale).
pub fn npc_kind_params(kind: NpcKind) -> (f64, u32, f64) {
    match kind {
        NpcKind::Walker => (1.0, 1, 1.0),
        NpcKind::Runner => (RUNNER_SPEED_FACTOR, 1, RUNNER_SPRITE_SCALE),
        NpcKind::Brute => (BRUTE_SPEED_FACTOR, BRUTE_HIT_POINTS, BRUTE_SPRITE_SCALE),
        NpcKind::Civilian => (CIVILIAN_SPEED_FACTOR, 1, 1.0),
        NpcKind::Heart => (HEART_SPEED_FACTOR, 1, 1.0),
    }
}

/// Base NPC speed (px/s) at the given difficulty level.
pub fn base_speed(level: u32) -> f64 {
    NPC_BASE_SPEED * (1.0 + LEVEL_SPEED_FACTOR * level as f64)
}

/// Pseudo-depth scale at a given vertical position.
/// NPCs lower on the screen render (and hit-test) larger.
pub fn depth_scale(y: f64) -> f64 {
    DEPTH_SCALE_BASE + DEPTH_SCALE_RANGE * (y / WORLD_HEIGHT)
}

/// Pick a random position just outside a random playfield edge.
pub fn random_edge_position(rng: &mut ChaCha8Rng) -> Position {
    let edge = match rng.gen_range(0..4) {
        0 => SpawnEdge::Top,
        1 => SpawnEdge::Right,
        2 => SpawnEdge::Bottom,
        _ => SpawnEdge::Left,
    };
    edge_position(edge, rng)
}

/// Position just outside the given edge, uniform along its length.
pub fn edge_position(edge: SpawnEdge, rng: &mut ChaCha8Rng) -> Position {
    match edge {
        SpawnEdge::Top => Position::new(rng.gen_range(0.0..WORLD_WIDTH), -SPAWN_MARGIN),
        SpawnEdge::Right => {
            Position::new(WORLD_WIDTH + SPAWN_MARGIN, rng.gen_range(0.0..WORLD_HEIGHT))
        }
        SpawnEdge::Bottom => {
            Position::new(rng.gen_range(0.0..WORLD_WIDTH), WORLD_HEIGHT + SPAWN_MARGIN)
        }
        SpawnEdge::Left => Position::new(-SPAWN_MARGIN, rng.gen_range(0.0..WORLD_HEIGHT)),
    }
}

/// Spawn a single NPC at a random edge, heading for the defender.
/// Speed is locked in from the level at spawn time.
pub fn spawn_npc(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: NpcKind,
    level: u32,
    next_npc_id: &mut u32,
) -> hecs::Entity {
    let position = random_edge_position(rng);
    spawn_npc_at(world, kind, level, position, next_npc_id)
}

/// Spawn a single NPC of the given kind at an exact position.
pub fn spawn_npc_at(
    world: &mut World,
    kind: NpcKind,
    level: u32,
    position: Position,
    next_npc_id: &mut u32,
) -> hecs::Entity {
    let (speed_factor, hit_points, _) = npc_kind_params(kind);
    let npc_id = *next_npc_id;
    *next_npc_id += 1;

    let profile = NpcProfile {
        npc_id,
        kind,
        hit_points,
        max_hit_points: hit_points,
        speed: base_speed(level) * speed_factor,
    };

    let rotation = position.angle_to(&defender_position()) + SPRITE_ROTATION_OFFSET;

    world.spawn((
        Npc,
        profile,
        position,
        Facing { rotation },
        DepthScale {
            value: depth_scale(position.y),
        },
    ))
}
