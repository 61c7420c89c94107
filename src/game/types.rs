//! Simulation data structures.

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in board pixels. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap on both axes. Rectangles that only share an edge or a
    /// corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// The player-controlled character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub x: f64,
    /// Top edge. Never negative after a tick.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pixels per tick, positive = downward.
    pub velocity: f64,
}

impl Character {
    pub fn new() -> Self {
        Self {
            x: CHARACTER_START_X,
            y: CHARACTER_START_Y,
            width: CHARACTER_WIDTH,
            height: CHARACTER_HEIGHT,
            velocity: 0.0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Put the character back at its start position, at rest.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

/// Which half of a pair an obstacle is. The renderer picks its sprite from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleRole {
    Upper,
    Lower,
}

/// One half of an obstacle pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub role: ObstacleRole,
    /// Set once the character has cleared this obstacle (for scoring).
    pub passed: bool,
}

impl Obstacle {
    pub fn new(role: ObstacleRole, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            role,
            passed: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Entirely left of the board.
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Two-state run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    Over,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crash {
    /// Hit an obstacle.
    Obstacle(ObstacleRole),
    /// Fell below the board.
    OutOfBounds,
}

/// Complete game state for one session. Owned by the caller; there is no
/// shared or global instance.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub character: Character,
    /// Spawn order, which is also left-to-right screen order.
    pub obstacles: Vec<Obstacle>,
    /// Half-point increments; a full pair is worth 1.0.
    pub score: f64,
    pub status: GameStatus,
    /// Why the run ended, while `status` is `Over`.
    pub crash: Option<Crash>,
    /// Ticks advanced since the last (re)start.
    pub tick_count: u64,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            character: Character::new(),
            obstacles: Vec::new(),
            score: 0.0,
            status: GameStatus::Running,
            crash: None,
            tick_count: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Whole pairs passed, as displayed to the player.
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }

    /// Append an upper/lower pair at the right edge of the board.
    ///
    /// `gap_offset` is the top edge of the upper obstacle; the lower one starts
    /// `GAP_SIZE` below the upper one's bottom edge.
    pub fn spawn_obstacle_pair(&mut self, gap_offset: f64) {
        let upper = Obstacle::new(
            ObstacleRole::Upper,
            OBSTACLE_SPAWN_X,
            gap_offset,
            OBSTACLE_WIDTH,
            OBSTACLE_HEIGHT,
        );
        let lower = Obstacle::new(
            ObstacleRole::Lower,
            OBSTACLE_SPAWN_X,
            upper.bottom() + GAP_SIZE,
            OBSTACLE_WIDTH,
            OBSTACLE_HEIGHT,
        );
        self.obstacles.push(upper);
        self.obstacles.push(lower);
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
