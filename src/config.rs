//! Command-line configuration for the interactive game.

use std::path::PathBuf;

/// Runtime options. Game rules themselves are fixed in `constants`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for obstacle gaps (None = random).
    pub seed: Option<u64>,
    /// Write logs to this file. The terminal is in use by the game, so
    /// nothing is logged without it.
    pub log_file: Option<PathBuf>,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(AppConfig),
    Version,
    Help,
}

pub const USAGE: &str = "\
Flappy - terminal side-scroller

Usage: flappy [options]

Options:
  --seed <N>         Seed the obstacle generator for a reproducible run
  --log-file <PATH>  Write logs to PATH (filter with RUST_LOG)
  --version          Show version information
  --help             Show this help message

Controls:
  Space/Up/Enter     Flap (restart after game over)
  Esc/q              Quit";

/// Parse `argv` (including the program name at index 0).
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config = AppConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--seed" | "-s" => {
                let value = next_value(args, &mut i)?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed '{}': expected an integer", value))?;
                config.seed = Some(seed);
            }
            "--log-file" => {
                let value = next_value(args, &mut i)?;
                config.log_file = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Command::Play(config))
}

fn next_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("flappy")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_plays_with_defaults() {
        assert_eq!(
            parse_args(&args(&[])),
            Ok(Command::Play(AppConfig::default()))
        );
    }

    #[test]
    fn test_seed_and_log_file() {
        let parsed = parse_args(&args(&["--seed", "42", "--log-file", "game.log"])).unwrap();
        assert_eq!(
            parsed,
            Command::Play(AppConfig {
                seed: Some(42),
                log_file: Some(PathBuf::from("game.log")),
            })
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(&args(&["--version"])), Ok(Command::Version));
        assert_eq!(parse_args(&args(&["-h"])), Ok(Command::Help));
    }

    #[test]
    fn test_invalid_seed() {
        let err = parse_args(&args(&["--seed", "abc"])).unwrap_err();
        assert!(err.contains("abc"));
    }

    #[test]
    fn test_missing_value() {
        let err = parse_args(&args(&["--seed"])).unwrap_err();
        assert!(err.contains("--seed"));
    }

    #[test]
    fn test_unknown_option() {
        assert!(parse_args(&args(&["--fast"])).is_err());
    }
}
