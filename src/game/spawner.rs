//! Obstacle gap placement.

use crate::constants::OBSTACLE_HEIGHT;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks where the gap of each new obstacle pair sits.
///
/// Generic over the RNG so tests and replays can inject a seeded generator.
#[derive(Debug, Clone)]
pub struct Spawner<R: Rng> {
    rng: R,
}

impl Spawner<StdRng> {
    /// Reproducible spawner: the same seed yields the same gap sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Spawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Top edge of the next upper obstacle, in `(-3/4 h, -1/4 h]` for an
    /// obstacle of height `h`. The upper obstacle always reaches at least a
    /// quarter of its height onto the board.
    pub fn next_gap_offset(&mut self) -> f64 {
        let r: f64 = self.rng.gen();
        -(OBSTACLE_HEIGHT / 4.0) - r * (OBSTACLE_HEIGHT / 2.0)
    }
}
