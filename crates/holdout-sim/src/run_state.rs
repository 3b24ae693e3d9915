//! Run state — score, health, and difficulty level for the current run.
//!
//! All mutation goes through methods that enforce the clamps:
//! score never goes below 0, health stays in [0, MAX_HEALTH], and
//! level always equals the step function of the current score.

use holdout_core::constants::{
    INITIAL_HEALTH, LEVEL_2_SCORE, LEVEL_3_SCORE, LEVEL_4_SCORE, MAX_HEALTH,
};

/// Counters accumulated over a run, surfaced on the game-over screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    pub zombies_killed: u32,
    pub civilians_rescued: u32,
    pub civilians_shot: u32,
    pub hearts_collected: u32,
    pub zombies_breached: u32,
}

/// Score, health, and level for the run in progress.
#[derive(Debug, Clone)]
pub struct RunState {
    pub score: u32,
    pub health: u32,
    pub level: u32,
    pub stats: RunStats,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Difficulty level as a step function of score.
pub fn level_for_score(score: u32) -> u32 {
    if score < LEVEL_2_SCORE {
        1
    } else if score < LEVEL_3_SCORE {
        2
    } else if score < LEVEL_4_SCORE {
        3
    } else {
        4
    }
}

impl RunState {
    /// Fresh state for a new run.
    pub fn new() -> Self {
        Self {
            score: 0,
            health: INITIAL_HEALTH,
            level: 1,
            stats: RunStats::default(),
        }
    }

    /// Add points and re-derive the level.
    /// Returns the new level if the score crossed into a higher one.
    pub fn award(&mut self, points: u32) -> Option<u32> {
        self.score += points;
        let new_level = level_for_score(self.score);
        let climbed = new_level > self.level;
        self.level = new_level;
        climbed.then_some(new_level)
    }

    /// Subtract points, clamping at 0, and re-derive the level.
    /// A drop back below a threshold lowers the level silently.
    pub fn penalize(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
        self.level = level_for_score(self.score);
    }

    /// Lose one health point.
    pub fn damage(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    /// Gain one health point up to the cap.
    /// Returns false when already at full health.
    pub fn heal(&mut self) -> bool {
        if self.health < MAX_HEALTH {
            self.health += 1;
            true
        } else {
            false
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}
