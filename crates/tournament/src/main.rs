//! Tournament CLI
//!
//! Run matches between engines and track Elo ratings.

use classical_engine::ClassicalEngine;
use othello_core::Engine;
use random_engine::RandomEngine;
use std::env;
use std::path::Path;
use tournament::{
    quick_match, EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults,
};

const ELO_FILE: &str = "tournament_elo.json";

fn print_usage() {
    println!("Othello Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--config FILE]");
    println!("  tournament gauntlet <challenger> [--games N] [--depth D] [--config FILE]");
    println!("  tournament leaderboard");
    println!();
    println!("Engines:");
    println!("  classical     - Alpha-beta with disc/mobility/corner eval");
    println!("  random        - Uniform random legal moves");
    println!();
    println!("Examples:");
    println!("  tournament match classical random --games 20 --depth 2");
    println!("  tournament gauntlet classical --games 10 --config tourney.toml");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "classical" | "classic" => Box::new(ClassicalEngine::new()),
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}", spec);
            Box::new(ClassicalEngine::new())
        }
    }
}

/// Parses `--games`, `--depth`, and `--config` from the argument tail,
/// starting from the tournament config's defaults.
fn parse_options(args: &[String], start: usize) -> TournamentConfig {
    let mut config = TournamentConfig::default();

    // A config file provides the baseline; flags override it.
    let mut i = start;
    while i < args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            match TournamentConfig::load_toml(Path::new(&args[i + 1])) {
                Ok(loaded) => config = loaded,
                Err(e) => eprintln!("Warning: {}", e),
            }
        }
        i += 1;
    }

    let mut i = start;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games_per_match = args[i + 1].parse().unwrap_or(config.games_per_match);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.search_depth = args[i + 1].parse().unwrap_or(config.search_depth);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn match_config(config: &TournamentConfig) -> MatchConfig {
    MatchConfig {
        num_games: config.games_per_match,
        depth: config.search_depth,
        opening_plies: config.opening_plies,
        max_plies: config.max_plies_per_game,
        ..Default::default()
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let config = parse_options(args, 2);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}",
        config.games_per_match, config.search_depth
    );
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let runner = MatchRunner::new(match_config(&config));
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    // Update Elo tracker
    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];
    let config = parse_options(args, 1);

    let opponents = vec!["classical", "random"];

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!(
        "Games per match: {}, Depth: {}",
        config.games_per_match, config.search_depth
    );
    println!();

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        config.clone(),
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_engine(challenger_spec);
        let mut opp_engine = create_engine(opponent);

        let result = quick_match(
            challenger.as_mut(),
            opp_engine.as_mut(),
            config.games_per_match,
            config.search_depth,
        );

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
