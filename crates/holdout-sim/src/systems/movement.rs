//! Movement system — NPCs converge on the defender, the defender
//! tracks the aim point.
//!
//! Each tick every NPC steps straight toward the defender's position
//! at its fixed speed, refreshes its pseudo-depth scale from its new
//! vertical position, and faces its travel direction.

use hecs::World;

use holdout_core::components::{Defender, DepthScale, Facing, Npc, NpcProfile};
use holdout_core::constants::{DT, SPRITE_ROTATION_OFFSET};
use holdout_core::types::Position;

/// Step all NPCs toward the defender and turn the defender to the aim point.
pub fn run(world: &mut World, aim: Position) {
    let defender_pos = match find_defender(world) {
        Some(p) => p,
        None => return,
    };

    for (_entity, (_npc, profile, pos, facing, scale)) in world.query_mut::<(
        &Npc,
        &NpcProfile,
        &mut Position,
        &mut Facing,
        &mut DepthScale,
    )>() {
        let angle = pos.angle_to(&defender_pos);
        let step = profile.speed * DT;
        pos.x += angle.cos() * step;
        pos.y += angle.sin() * step;

        scale.value = crate::world_setup::depth_scale(pos.y);
        facing.rotation = angle + SPRITE_ROTATION_OFFSET;
    }

    for (_entity, (_defender, pos, facing)) in
        world.query_mut::<(&Defender, &Position, &mut Facing)>()
    {
        facing.rotation = pos.angle_to(&aim);
    }
}

/// Defender position, if one has been spawned.
pub fn find_defender(world: &mut World) -> Option<Position> {
    world
        .query_mut::<(&Defender, &Position)>()
        .into_iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
