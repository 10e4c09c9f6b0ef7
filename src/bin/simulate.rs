//! Balance simulator CLI.
//!
//! Plays bot sessions of all three mini-games through the real progression
//! pipeline and reports completion, rank, and achievement statistics.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 100 players
//!   cargo run --bin simulate -- -n 20 --skill 0.7
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use std::env;
use surge::simulator::{run_simulation, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════╗");
    println!("║            SURGE BALANCE SIMULATOR            ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:      {}", config.num_runs);
    println!("  Skill:     {:.0}%", config.skill * 100.0);
    println!(
        "  Sessions:  {} x {} levels",
        config.sessions_per_run, config.levels_per_session
    );
    if let Some(seed) = config.seed {
        println!("  Seed:      {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--skill" => {
                if i + 1 < args.len() {
                    config.skill = args[i + 1].parse().unwrap_or(0.85);
                    config.skill = config.skill.clamp(0.0, 1.0);
                    i += 1;
                }
            }
            "--sessions" => {
                if i + 1 < args.len() {
                    config.sessions_per_run = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "--levels" => {
                if i + 1 < args.len() {
                    config.levels_per_session = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--perfect" => {
                config.skill = 1.0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Surge balance simulator");
    println!();
    println!("Options:");
    println!("  -n, --runs N      Number of simulated players (default 100)");
    println!("  -s, --seed N      Seed for reproducible runs");
    println!("      --skill P     Bot accuracy 0.0-1.0 (default 0.85)");
    println!("      --sessions N  Sessions per player (default 20)");
    println!("      --levels N    Level attempts per session (default 10)");
    println!("      --perfect     Shorthand for --skill 1.0");
    println!("  -v, --verbose     Per-run detail");
    println!("  -h, --help        This help");
}
