//! Simulation configuration.

use super::script::FlapScript;

/// How the simulated player decides to flap before each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlapPolicy {
    /// Never flap; the character free-falls.
    Never,
    /// Flap before every Nth tick, starting with the first.
    Every(u32),
    /// Follow a flap script; ticks past its end do not flap.
    Script(FlapScript),
}

impl FlapPolicy {
    pub fn from_script(script: &FlapScript) -> Self {
        Self::Script(script.clone())
    }

    /// Whether to flap before tick `tick_index` (0-based).
    pub fn should_flap(&self, tick_index: u64) -> bool {
        match self {
            Self::Never => false,
            Self::Every(0) => false,
            Self::Every(n) => tick_index % u64::from(*n) == 0,
            Self::Script(script) => script.flap_at(tick_index),
        }
    }
}

/// Configuration for a headless run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Random seed for obstacle gaps (None = random, reported afterwards)
    pub seed: Option<u64>,

    /// Simulated time limit in milliseconds
    pub duration_ms: u64,

    pub policy: FlapPolicy,

    /// Write a JSON report next to the text one
    pub write_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            duration_ms: 60_000,
            policy: FlapPolicy::Never,
            write_json: false,
        }
    }
}
