use std::env;
use std::io;

use classical_engine::ClassicalEngine;
use othello_agent::run_game;
use othello_core::Engine;
use random_engine::RandomEngine;

fn print_usage() {
    println!("Othello referee-protocol agent");
    println!();
    println!("Usage:");
    println!("  othello_agent [--engine classical|random] [--depth D]");
    println!();
    println!("Engines:");
    println!("  classical     - Alpha-beta with disc/mobility/corner eval (default)");
    println!("  random        - Uniform random legal moves");
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

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut engine_spec = String::from("classical");
    let mut depth: u8 = 2;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--engine" | "-e" => {
                if i + 1 < args.len() {
                    engine_spec = args[i + 1].clone();
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    depth = args[i + 1].parse().unwrap_or(2);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    let mut engine = create_engine(&engine_spec);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_game(stdin.lock(), stdout.lock(), engine.as_mut(), depth) {
        eprintln!("Protocol failure: {}", e);
        std::process::exit(1);
    }
}
