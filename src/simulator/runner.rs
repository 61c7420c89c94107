//! Drives a session on a virtual clock.

use super::config::SimConfig;
use super::report::SimReport;
use crate::game::{Session, Spawner};

/// Run one headless game until it ends or the time limit is reached.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "Simulating {}ms with seed {} ({:?})",
        config.duration_ms,
        seed,
        config.policy
    );

    let mut session = Session::new(Spawner::seeded(seed));
    let mut flaps = 0u32;

    while !session.simulation().is_over()
        && session.elapsed_ms() + session.ms_until_next_tick() <= config.duration_ms
    {
        if config.policy.should_flap(session.simulation().tick_count) {
            session.primary_action();
            flaps += 1;
        }
        // Runs any spawn due before the tick, then exactly one tick.
        let step = session.advance(session.ms_until_next_tick());
        if step.passed > 0 {
            log::debug!(
                "Tick {}: passed {} obstacle(s), score {}",
                session.simulation().tick_count,
                step.passed,
                session.simulation().score
            );
        }
    }

    let sim = session.simulation();
    SimReport {
        seed,
        elapsed_ms: session.elapsed_ms(),
        ticks: sim.tick_count,
        pairs_spawned: session.pairs_spawned(),
        flaps,
        score: sim.score,
        game_over: sim.is_over(),
        crash: sim.crash,
        character: sim.character,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TICK_INTERVAL_MS;
    use crate::game::Crash;
    use crate::simulator::config::FlapPolicy;

    #[test]
    fn test_free_fall_ends_out_of_bounds() {
        let config = SimConfig {
            seed: Some(1),
            ..Default::default()
        };
        let report = run_simulation(&config);
        assert!(report.game_over);
        assert_eq!(report.crash, Some(Crash::OutOfBounds));
        assert_eq!(report.flaps, 0);
        // 320 + n(n+1)/2 > 640 first holds at n = 25.
        assert_eq!(report.ticks, 25);
        assert_eq!(report.elapsed_ms, 25 * TICK_INTERVAL_MS);
    }

    #[test]
    fn test_time_limit_stops_run() {
        let config = SimConfig {
            seed: Some(1),
            duration_ms: TICK_INTERVAL_MS * 5,
            ..Default::default()
        };
        let report = run_simulation(&config);
        assert!(!report.game_over);
        assert_eq!(report.ticks, 5);
        assert!(report.crash.is_none());
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = SimConfig {
            seed: Some(99),
            duration_ms: 20_000,
            policy: FlapPolicy::Every(18),
            ..Default::default()
        };
        assert_eq!(run_simulation(&config), run_simulation(&config));
    }

    #[test]
    fn test_random_seed_is_reported() {
        let config = SimConfig {
            duration_ms: TICK_INTERVAL_MS,
            ..Default::default()
        };
        let report = run_simulation(&config);
        let replay = run_simulation(&SimConfig {
            seed: Some(report.seed),
            ..config
        });
        assert_eq!(report, replay);
    }
}
