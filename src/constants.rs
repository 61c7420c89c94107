//! Game rules. Difficulty is fixed, so these are compile-time constants.

// Board geometry (pixels)
pub const BOARD_WIDTH: f64 = 360.0;
pub const BOARD_HEIGHT: f64 = 640.0;

// Character
pub const CHARACTER_START_X: f64 = BOARD_WIDTH / 8.0;
pub const CHARACTER_START_Y: f64 = BOARD_HEIGHT / 2.0;
pub const CHARACTER_WIDTH: f64 = 34.0;
pub const CHARACTER_HEIGHT: f64 = 24.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 64.0;
pub const OBSTACLE_HEIGHT: f64 = 512.0;
pub const OBSTACLE_SPAWN_X: f64 = BOARD_WIDTH;
/// Vertical opening between the upper and lower obstacle of a pair.
pub const GAP_SIZE: f64 = BOARD_HEIGHT / 4.0;

// Physics (per tick, positive y = downward)
pub const SCROLL_SPEED: f64 = 4.0;
pub const GRAVITY: f64 = 1.0;
pub const FLAP_VELOCITY: f64 = -25.0;

/// Awarded per obstacle, so a passed pair is worth one point.
pub const SCORE_PER_OBSTACLE: f64 = 0.5;

// Timing
pub const TICK_INTERVAL_MS: u64 = 1000 / 60;
pub const SPAWN_INTERVAL_MS: u64 = 1500;
/// Largest frame delta the real-time loop feeds the scheduler after a stall.
pub const MAX_FRAME_MS: u64 = 250;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_starts_left_and_centered() {
        assert_eq!(CHARACTER_START_X, 45.0);
        assert_eq!(CHARACTER_START_Y, 320.0);
    }

    #[test]
    fn test_tick_rate_is_sixty_hz() {
        assert_eq!(TICK_INTERVAL_MS, 16);
        assert!(SPAWN_INTERVAL_MS > TICK_INTERVAL_MS);
    }

    #[test]
    fn test_gap_is_quarter_board() {
        assert_eq!(GAP_SIZE, 160.0);
    }
}
