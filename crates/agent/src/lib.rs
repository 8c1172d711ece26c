//! Referee-protocol Othello agent.
//!
//! The binary wires stdin/stdout into [`game::run_game`]; the loop itself
//! lives in the library so it can be driven by scripted transcripts in
//! tests.

pub mod game;

pub use game::{run_game, STARTING_TIME};
