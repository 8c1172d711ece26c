//! Tournament Runner for Othello engines
//!
//! This crate provides infrastructure for:
//! - Running local matches between engine implementations
//! - Tracking Elo ratings across engine versions
//! - Persisting results for later comparison
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the classical and random engines
//! cargo run -p tournament -- match classical random --games 20 --depth 2
//!
//! # Run a gauntlet (one engine vs the stable)
//! cargo run -p tournament -- gauntlet classical --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
