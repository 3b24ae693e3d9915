//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine
//! state they need. They do not own state of their own; the one
//! exception is the spawner's clock, which the engine holds.

pub mod arrival;
pub mod cleanup;
pub mod gunfire;
pub mod movement;
pub mod snapshot;
pub mod spawner;
