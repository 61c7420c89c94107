//! JSON flap scripts for reproducible runs.
//!
//! ```json
//! { "frames": [ { "repeat": 20 }, { "flap": true }, { "repeat": 15 } ] }
//! ```
//!
//! A frame covers `repeat` consecutive ticks (at least one). Frames are looked
//! up in place, so a huge `repeat` costs nothing until the run reaches it.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FlapScript {
    pub frames: Vec<ScriptFrame>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScriptFrame {
    #[serde(default)]
    pub flap: bool,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

impl ScriptFrame {
    fn ticks(&self) -> u64 {
        u64::from(self.repeat.max(1))
    }
}

impl FlapScript {
    /// Number of ticks the script covers.
    pub fn tick_count(&self) -> u64 {
        self.frames.iter().map(ScriptFrame::ticks).sum()
    }

    /// Whether the script flaps before tick `tick_index` (0-based). Ticks past
    /// the end of the script do not flap.
    pub fn flap_at(&self, tick_index: u64) -> bool {
        let mut start = 0u64;
        for frame in &self.frames {
            let end = start + frame.ticks();
            if tick_index < end {
                return frame.flap;
            }
            start = end;
        }
        false
    }
}

pub fn parse_script(raw: &str) -> Result<FlapScript, String> {
    let script: FlapScript =
        serde_json::from_str(raw).map_err(|e| format!("Failed to parse flap script: {e}"))?;
    validate_script(&script)?;
    Ok(script)
}

pub fn load_script_from_path(path: &Path) -> Result<FlapScript, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    parse_script(&raw).map_err(|e| format!("{} ({})", e, path.display()))
}

fn validate_script(script: &FlapScript) -> Result<(), String> {
    if script.frames.is_empty() {
        return Err("Flap script validation failed: frames list is empty".to_string());
    }
    Ok(())
}

const fn default_repeat() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "flappy_script_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    fn flaps(script: &FlapScript, ticks: u64) -> Vec<bool> {
        (0..ticks).map(|i| script.flap_at(i)).collect()
    }

    #[test]
    fn test_frames_with_defaults() {
        let script = parse_script(r#"{"frames":[{"repeat":2},{"flap":true},{}]}"#).unwrap();
        assert_eq!(script.tick_count(), 4);
        assert_eq!(flaps(&script, 5), vec![false, false, true, false, false]);
    }

    #[test]
    fn test_zero_repeat_counts_once() {
        let script = parse_script(r#"{"frames":[{"flap":true,"repeat":0}]}"#).unwrap();
        assert_eq!(script.tick_count(), 1);
        assert_eq!(flaps(&script, 2), vec![true, false]);
    }

    #[test]
    fn test_huge_repeat_is_not_expanded() {
        let script = parse_script(
            r#"{"frames":[{"flap":false,"repeat":4294967295},{"flap":true},{"flap":true,"repeat":4294967295}]}"#,
        )
        .unwrap();
        assert_eq!(script.tick_count(), 2 * u64::from(u32::MAX) + 1);
        assert!(!script.flap_at(0));
        assert!(!script.flap_at(u64::from(u32::MAX) - 1));
        assert!(script.flap_at(u64::from(u32::MAX)));
        assert!(script.flap_at(2 * u64::from(u32::MAX)));
        assert!(!script.flap_at(2 * u64::from(u32::MAX) + 1));
    }

    #[test]
    fn test_empty_script_rejected() {
        let err = parse_script(r#"{"frames":[]}"#).unwrap_err();
        assert!(err.contains("empty"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(parse_script("{frames").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file_path("load");
        fs::write(&path, r#"{"frames":[{"flap":true},{"repeat":3}]}"#).unwrap();
        let script = load_script_from_path(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(script.tick_count(), 4);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = temp_file_path("missing");
        let err = load_script_from_path(&path).unwrap_err();
        assert!(err.contains("Failed to read"));
    }
}
