//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless (no Tauri dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdout_core::commands::PlayerCommand;
use holdout_core::enums::GamePhase;
use holdout_core::events::AudioEvent;
use holdout_core::state::GameStateSnapshot;
use holdout_core::types::{Position, SimTime};

use crate::run_state::RunState;
use crate::systems;
use crate::systems::spawner::SpawnClock;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_npc_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    run: RunState,
    spawn_clock: SpawnClock,
    /// Last aim point; the defender faces it every tick.
    aim: Position,
}

impl GameEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_npc_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            run: RunState::new(),
            spawn_clock: SpawnClock::default(),
            aim: world_setup::defender_position(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.run, audio_events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the run state.
    pub fn run(&self) -> &RunState {
        &self.run
    }

    /// Spawn an NPC at an exact position (for tests that need
    /// deterministic placement without waiting out the spawn clock).
    #[cfg(test)]
    pub fn spawn_npc_at(
        &mut self,
        kind: holdout_core::enums::NpcKind,
        position: Position,
    ) -> hecs::Entity {
        world_setup::spawn_npc_at(
            &mut self.world,
            kind,
            self.run.level,
            position,
            &mut self.next_npc_id,
        )
    }

    /// Get a mutable reference to the run state (for tests that need
    /// to force a score or health value).
    #[cfg(test)]
    pub fn run_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::StartScreen | GamePhase::GameOver) {
                    self.reset_run();
                }
            }
            PlayerCommand::Restart => {
                self.reset_run();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Aim { x, y } => {
                self.aim = Position::new(x, y);
            }
            PlayerCommand::Fire { x, y } => {
                if self.phase == GamePhase::Active {
                    systems::gunfire::resolve_shot(
                        &mut self.world,
                        &mut self.run,
                        x,
                        y,
                        &mut self.audio_events,
                    );
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawn scheduling
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_clock,
            self.run.level,
            self.time.tick,
            &mut self.next_npc_id,
            &mut self.audio_events,
        );
        // 2. Movement toward the defender + aim tracking
        systems::movement::run(&mut self.world, self.aim);
        // 3. Defender contact (damage, rescue, heal)
        systems::arrival::run(
            &mut self.world,
            &mut self.run,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 4. Despawn everything consumed this tick
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        if self.run.is_dead() {
            self.end_run();
        }
    }

    /// End the run: freeze the simulation in GameOver.
    fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.audio_events.push(AudioEvent::GameOver {
            score: self.run.score,
        });
    }

    /// Clear the world and start a fresh run.
    fn reset_run(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.time = SimTime::default();
        self.run = RunState::new();
        self.spawn_clock = SpawnClock::default();
        world_setup::spawn_defender(&mut self.world);
        self.phase = GamePhase::Active;
    }
}
