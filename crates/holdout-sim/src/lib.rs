//! Simulation engine for HOLDOUT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod run_state;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use holdout_core as core;
