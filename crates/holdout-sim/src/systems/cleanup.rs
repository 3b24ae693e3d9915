//! Cleanup system: despawns entities consumed earlier in the tick.

use hecs::{Entity, World};

/// Drain the despawn buffer. Double entries are harmless — hecs
/// ignores despawns of entities that are already gone.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
