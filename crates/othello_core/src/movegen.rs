use crate::{board::Board, types::*};

/// Generate all legal moves for `side`, returning a freshly allocated
/// vector. Internally delegates to `legal_moves_into`.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, side, &mut out);
    out
}

/// Generate all legal moves for `side` into the provided buffer, reusing
/// it across calls.
///
/// Interior cells are scanned in ascending index order, so the result is
/// deterministic and deduplicated by construction: an empty cell that
/// captures in several directions still yields exactly one `Place`. An
/// empty result is the normal "must pass" condition, not an error.
pub fn legal_moves_into(board: &Board, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for index in playable_indices() {
        if board.cell(index) != Cell::Empty {
            continue;
        }
        if DIRECTIONS
            .iter()
            .any(|&dir| board.captures_in_direction(side, index, dir))
        {
            out.push(Move::Place(index));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
