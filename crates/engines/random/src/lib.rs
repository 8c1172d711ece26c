//! Random Move Othello Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! moves, passing when none exist. Useful for:
//! - Testing infrastructure (driver, tournament harness) cheaply
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation over full games

use othello_core::{legal_moves, Board, Engine, Move, SearchLimits, SearchResult, Side};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An Othello engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves, and passes when there are none.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, to_move: Side, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(board, to_move);
        self.nodes = 1;

        let best_move = moves.choose(&mut thread_rng()).copied().unwrap_or(Move::Pass);

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
