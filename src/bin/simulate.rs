//! Headless run CLI.
//!
//! Replays a game on a virtual clock and prints what happened.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # Free fall, random seed
//!   cargo run --bin simulate -- --seed 42 --flap-every 18
//!   cargo run --bin simulate -- --seed 42 --script run.json --json

use flappy::simulator::{load_script_from_path, run_simulation, FlapPolicy, SimConfig};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(1);
        }
    };

    println!("Configuration:");
    println!("  Duration:       {}ms", config.duration_ms);
    match &config.policy {
        FlapPolicy::Never => println!("  Policy:         never flap"),
        FlapPolicy::Every(n) => println!("  Policy:         flap every {} ticks", n),
        FlapPolicy::Script(script) => {
            println!("  Policy:         script ({} ticks)", script.tick_count())
        }
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if config.write_json {
        let filename = format!(
            "flappy_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-s" | "--seed" => {
                config.seed = Some(parse_number(args, &mut i)?);
            }
            "-d" | "--duration-ms" => {
                config.duration_ms = parse_number(args, &mut i)?;
            }
            "-f" | "--flap-every" => {
                config.policy = FlapPolicy::Every(parse_number(args, &mut i)?);
            }
            "--script" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| "Missing value for --script".to_string())?;
                let script = load_script_from_path(Path::new(path))?;
                config.policy = FlapPolicy::from_script(&script);
            }
            "--json" => {
                config.write_json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(config)
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = &args[*i];
    *i += 1;
    let value = args
        .get(*i)
        .ok_or_else(|| format!("Missing value for {}", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value '{}' for {}", value, flag))
}

fn print_help() {
    println!("Flappy headless simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --seed <S>          Obstacle seed (default: random, printed in the report)");
    println!("    -d, --duration-ms <MS>  Simulated time limit (default: 60000)");
    println!("    -f, --flap-every <N>    Flap before every Nth tick");
    println!("    --script <PATH>         Flap according to a JSON script, one frame per tick");
    println!("    --json                  Save JSON report");
    println!("    -h, --help              Show this help");
    println!();
    println!("Set RUST_LOG=debug to trace spawns and scoring.");
}
