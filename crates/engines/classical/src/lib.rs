//! Classical Othello Engine
//!
//! Fixed-depth negamax search with alpha-beta pruning over a positional
//! evaluation (discs, mobility, corners).

mod eval;
mod search;

use othello_core::{Board, Engine, SearchLimits, SearchResult, Side};

/// Classical Othello engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning at a fixed depth
/// - Disc/mobility/corner evaluation with a terminal win bonus
/// - Per-root-candidate deadline checks against the move time budget
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, to_move: Side, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        let outcome = search::pick_best_move(
            board,
            to_move,
            limits.depth,
            &mut self.nodes,
            &limits.time_control,
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{corner_discs, evaluate, frontier_discs, stable_discs, WIN_BONUS};
pub use search::{pick_best_move, SearchOutcome};
