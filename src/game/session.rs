//! Fixed-timestep scheduling of ticks and spawns.
//!
//! A [`Session`] owns the simulation and the spawner and keeps a millisecond
//! clock with two independent deadlines: one tick every `TICK_INTERVAL_MS`
//! and one obstacle pair every `SPAWN_INTERVAL_MS`. The clock only moves when
//! the caller advances it, so the same code serves the real-time terminal
//! loop and headless replays on a virtual clock.

use super::spawner::Spawner;
use super::types::{Crash, Simulation};
use crate::constants::{SPAWN_INTERVAL_MS, TICK_INTERVAL_MS};
use rand::Rng;

/// Result of the primary action (Space).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Flapped,
    Restarted,
}

/// Everything that happened during one [`Session::advance`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub ticks: u32,
    pub spawned: u32,
    /// Obstacles passed (half a point each).
    pub passed: u32,
    pub crash: Option<Crash>,
}

impl StepReport {
    pub fn changed(&self) -> bool {
        self.ticks > 0 || self.spawned > 0
    }
}

/// One running game: simulation state plus the scheduler driving it.
#[derive(Debug, Clone)]
pub struct Session<R: Rng> {
    simulation: Simulation,
    spawner: Spawner<R>,
    clock_ms: u64,
    next_tick_ms: u64,
    next_spawn_ms: u64,
    /// Pairs spawned since the last (re)start.
    pairs_spawned: u32,
}

impl<R: Rng> Session<R> {
    pub fn new(spawner: Spawner<R>) -> Self {
        Self {
            simulation: Simulation::new(),
            spawner,
            clock_ms: 0,
            next_tick_ms: TICK_INTERVAL_MS,
            next_spawn_ms: SPAWN_INTERVAL_MS,
            pairs_spawned: 0,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn pairs_spawned(&self) -> u32 {
        self.pairs_spawned
    }

    /// Milliseconds until the next tick or spawn is due. `None` while the run
    /// is over, since nothing is scheduled until a restart.
    pub fn ms_until_next_event(&self) -> Option<u64> {
        if self.simulation.is_over() {
            return None;
        }
        let next = self.next_tick_ms.min(self.next_spawn_ms);
        Some(next.saturating_sub(self.clock_ms))
    }

    /// Milliseconds until the next tick is due.
    pub fn ms_until_next_tick(&self) -> u64 {
        self.next_tick_ms.saturating_sub(self.clock_ms)
    }

    /// Move the clock forward by `dt_ms`, running every tick and spawn that
    /// falls due in time order. A tick and a spawn due at the same instant
    /// run tick first. Stops scheduling as soon as the run ends.
    pub fn advance(&mut self, dt_ms: u64) -> StepReport {
        let target = self.clock_ms + dt_ms;
        let mut report = StepReport::default();

        while !self.simulation.is_over() {
            if self.next_tick_ms.min(self.next_spawn_ms) > target {
                break;
            }

            if self.next_tick_ms <= self.next_spawn_ms {
                self.clock_ms = self.next_tick_ms;
                self.next_tick_ms += TICK_INTERVAL_MS;

                let outcome = self.simulation.tick();
                report.ticks += 1;
                report.passed += outcome.passed;
                if let Some(crash) = outcome.crash {
                    report.crash = Some(crash);
                    log::info!(
                        "Game over at tick {} ({:?}), score {}",
                        self.simulation.tick_count,
                        crash,
                        self.simulation.score
                    );
                }
            } else {
                self.clock_ms = self.next_spawn_ms;
                self.next_spawn_ms += SPAWN_INTERVAL_MS;
                self.spawn_pair();
                report.spawned += 1;
            }
        }

        self.clock_ms = target;
        report
    }

    /// Flap while running; restart once the run is over.
    pub fn primary_action(&mut self) -> PrimaryAction {
        if self.simulation.is_over() {
            self.restart();
            PrimaryAction::Restarted
        } else {
            self.simulation.flap();
            PrimaryAction::Flapped
        }
    }

    /// Reset the simulation and re-arm both timers from the current time.
    pub fn restart(&mut self) {
        log::info!(
            "Restarting after {} ticks with score {}",
            self.simulation.tick_count,
            self.simulation.score
        );
        self.simulation.restart();
        self.next_tick_ms = self.clock_ms + TICK_INTERVAL_MS;
        self.next_spawn_ms = self.clock_ms + SPAWN_INTERVAL_MS;
        self.pairs_spawned = 0;
    }

    fn spawn_pair(&mut self) {
        let offset = self.spawner.next_gap_offset();
        log::debug!("Spawning obstacle pair with gap offset {:.1}", offset);
        self.simulation.spawn_obstacle_pair(offset);
        self.pairs_spawned += 1;
    }
}
