//! Simulation report generation.

use crate::game::{Character, Crash};
use serde::Serialize;

/// Outcome of one headless run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    /// Seed actually used, so a random run can be replayed.
    pub seed: u64,
    pub elapsed_ms: u64,
    pub ticks: u64,
    pub pairs_spawned: u32,
    pub flaps: u32,
    pub score: f64,
    pub game_over: bool,
    pub crash: Option<Crash>,
    pub character: Character,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Results:\n");
        out.push_str(&format!("  Seed:           {}\n", self.seed));
        out.push_str(&format!(
            "  Simulated time: {:.2}s\n",
            self.elapsed_ms as f64 / 1000.0
        ));
        out.push_str(&format!("  Ticks:          {}\n", self.ticks));
        out.push_str(&format!("  Pairs spawned:  {}\n", self.pairs_spawned));
        out.push_str(&format!("  Flaps:          {}\n", self.flaps));
        out.push_str(&format!("  Score:          {}\n", self.score));
        let ending = match self.crash {
            Some(Crash::Obstacle(role)) => format!("hit {:?} obstacle", role).to_lowercase(),
            Some(Crash::OutOfBounds) => "fell off the board".to_string(),
            None => "still flying".to_string(),
        };
        out.push_str(&format!("  Ending:         {}\n", ending));
        out.push_str(&format!(
            "  Character:      y={:.1} velocity={:+.1}\n",
            self.character.y, self.character.velocity
        ));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ObstacleRole;

    fn sample_report() -> SimReport {
        SimReport {
            seed: 42,
            elapsed_ms: 4_000,
            ticks: 250,
            pairs_spawned: 2,
            flaps: 10,
            score: 1.0,
            game_over: true,
            crash: Some(Crash::Obstacle(ObstacleRole::Upper)),
            character: Character::new(),
        }
    }

    #[test]
    fn test_text_report() {
        let text = sample_report().to_text();
        assert!(text.contains("Seed:           42"));
        assert!(text.contains("Ticks:          250"));
        assert!(text.contains("hit upper obstacle"));
    }

    #[test]
    fn test_json_report() {
        let json = sample_report().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["seed"], 42);
        assert_eq!(value["score"], 1.0);
        assert_eq!(value["game_over"], true);
        assert_eq!(value["crash"]["Obstacle"], "Upper");
    }
}
