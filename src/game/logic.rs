//! Per-tick physics, scoring and collision for the simulation.

use super::types::{Crash, GameStatus, Simulation};
use crate::constants::*;

/// What happened during one call to [`Simulation::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutcome {
    /// Obstacles newly passed this tick (each worth half a point).
    pub passed: u32,
    /// Set on the tick that ended the run.
    pub crash: Option<Crash>,
}

impl Simulation {
    /// Advance one fixed step. Does nothing once the run is over.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.is_over() {
            return outcome;
        }

        self.tick_count += 1;

        // Gravity, then integrate. The ceiling clamps but does not kill.
        let character = &mut self.character;
        character.velocity += GRAVITY;
        character.y += character.velocity;
        character.y = character.y.max(0.0);

        let bounds = self.character.bounds();
        for obstacle in &mut self.obstacles {
            obstacle.x -= SCROLL_SPEED;

            if !obstacle.passed && bounds.x > obstacle.right() {
                obstacle.passed = true;
                self.score += SCORE_PER_OBSTACLE;
                outcome.passed += 1;
            }

            if outcome.crash.is_none() && bounds.intersects(&obstacle.bounds()) {
                outcome.crash = Some(Crash::Obstacle(obstacle.role));
            }
        }

        if outcome.crash.is_none() && self.character.y > BOARD_HEIGHT {
            outcome.crash = Some(Crash::OutOfBounds);
        }

        // Anything fully off the left edge was passed long ago.
        self.obstacles.retain(|o| !o.is_offscreen());

        if outcome.crash.is_some() {
            self.status = GameStatus::Over;
            self.crash = outcome.crash;
        }

        outcome
    }

    /// Set the upward flap velocity, replacing whatever the character had.
    /// Ignored once the run is over.
    pub fn flap(&mut self) {
        if self.is_over() {
            return;
        }
        self.character.velocity = FLAP_VELOCITY;
    }

    /// Back to the initial state: no obstacles, zero score, running.
    pub fn restart(&mut self) {
        self.character.reset();
        self.obstacles.clear();
        self.score = 0.0;
        self.status = GameStatus::Running;
        self.crash = None;
        self.tick_count = 0;
    }
}
