//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Logical playfield width in pixels (fixed landscape resolution).
pub const WORLD_WIDTH: f64 = 1280.0;

/// Logical playfield height in pixels.
pub const WORLD_HEIGHT: f64 = 720.0;

/// Distance outside the playfield edge at which NPCs spawn (pixels).
pub const SPAWN_MARGIN: f64 = 50.0;

// --- Defender ---

/// Radius around the defender at which an NPC makes contact (pixels).
pub const DEFENDER_CONTACT_RADIUS: f64 = 60.0;

/// Health at the start of a run.
pub const INITIAL_HEALTH: u32 = 3;

/// Health cap; heart pickups never push health above this.
pub const MAX_HEALTH: u32 = 5;

// --- NPCs ---

/// Nominal NPC body size (width and height, pixels) before scaling.
pub const NPC_SIZE: f64 = 40.0;

/// Base NPC speed at level 0 in the speed formula (px/s).
/// Effective base speed is `NPC_BASE_SPEED * (1 + LEVEL_SPEED_FACTOR * level)`.
pub const NPC_BASE_SPEED: f64 = 60.0;

/// Per-level fractional speed bonus.
pub const LEVEL_SPEED_FACTOR: f64 = 0.1;

/// Runner speed multiplier (fast, fragile).
pub const RUNNER_SPEED_FACTOR: f64 = 1.8;

/// Brute speed multiplier (slow, takes two shots).
pub const BRUTE_SPEED_FACTOR: f64 = 0.6;

/// Civilian speed multiplier.
pub const CIVILIAN_SPEED_FACTOR: f64 = 1.2;

/// Heart bonus speed multiplier.
pub const HEART_SPEED_FACTOR: f64 = 1.5;

/// Shots required to put down a brute.
pub const BRUTE_HIT_POINTS: u32 = 2;

/// Runner sprite scale relative to the nominal body size.
pub const RUNNER_SPRITE_SCALE: f64 = 0.8;

/// Brute sprite scale relative to the nominal body size.
pub const BRUTE_SPRITE_SCALE: f64 = 1.4;

/// Pseudo-depth scale at the top of the screen.
pub const DEPTH_SCALE_BASE: f64 = 0.8;

/// Additional pseudo-depth scale gained across the full screen height.
pub const DEPTH_SCALE_RANGE: f64 = 0.4;

/// Sprite orientation correction applied on top of the travel angle (radians).
pub const SPRITE_ROTATION_OFFSET: f64 = std::f64::consts::PI / 15.0;

// --- Scoring ---

/// Points for a walker kill.
pub const WALKER_POINTS: u32 = 10;

/// Points for a runner kill.
pub const RUNNER_POINTS: u32 = 20;

/// Points for a brute kill.
pub const BRUTE_POINTS: u32 = 50;

/// Points for a civilian that reaches the defender alive.
pub const CIVILIAN_RESCUE_POINTS: u32 = 100;

/// Score penalty for shooting a civilian (score clamps at 0).
pub const CIVILIAN_PENALTY: u32 = 50;

// --- Levels ---

/// Score at which level 2 begins.
pub const LEVEL_2_SCORE: u32 = 500;

/// Score at which level 3 begins.
pub const LEVEL_3_SCORE: u32 = 1500;

/// Score at which level 4 begins.
pub const LEVEL_4_SCORE: u32 = 3000;

/// Highest difficulty level.
pub const MAX_LEVEL: u32 = 4;

// --- Spawning ---

/// Spawn interval per level in ticks, indexed by `level - 1`.
/// 2000 / 1500 / 1200 / 800 ms at 60 Hz.
pub const SPAWN_INTERVAL_TICKS: [u64; 4] = [120, 90, 72, 48];

/// Chance that any spawn is a heart bonus, rolled before the type mix.
pub const HEART_SPAWN_CHANCE: f64 = 0.05;
