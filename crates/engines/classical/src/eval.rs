//! Positional evaluation: discs, mobility, corners.

use othello_core::{legal_moves, playable_indices, Board, Cell, Side, CORNERS, DIRECTIONS};

/// Returned for a finished game the evaluated side has won on discs.
pub const WIN_BONUS: i32 = 750;

const DISC_WEIGHT: i32 = 1;
const MOBILITY_WEIGHT: i32 = 100;
const CORNER_WEIGHT: i32 = 1000;

/// Evaluates the board from `side`'s perspective; higher is better.
///
/// When neither side can place, the game is over: a strict disc majority
/// for `side` is worth [`WIN_BONUS`], while ties and losses both score 0.
/// Otherwise the score stacks three tiers, each an order of magnitude
/// heavier than the last: disc count, then mobility, then corners.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let own_moves = legal_moves(board, side);
    let rival_moves = legal_moves(board, side.other());
    let own_discs = board.count(side.cell()) as i32;

    if own_moves.is_empty() && rival_moves.is_empty() {
        let rival_discs = board.count(side.other().cell()) as i32;
        if own_discs > rival_discs {
            return WIN_BONUS;
        }
        return 0;
    }

    own_discs * DISC_WEIGHT
        + own_moves.len() as i32 * MOBILITY_WEIGHT
        + corner_discs(board, side) as i32 * CORNER_WEIGHT
}

/// Number of corner cells held by `side`.
pub fn corner_discs(board: &Board, side: Side) -> usize {
    CORNERS
        .iter()
        .filter(|&&index| board.cell(index) == side.cell())
        .count()
}

/// Number of empty cells adjacent to at least one of `side`'s discs.
///
/// Experimental: measures how exposed a position is, but is not part of
/// [`evaluate`].
pub fn frontier_discs(board: &Board, side: Side) -> usize {
    playable_indices()
        .filter(|&index| {
            board.cell(index) == Cell::Empty
                && DIRECTIONS
                    .iter()
                    .any(|&dir| board.cell((index as isize + dir) as usize) == side.cell())
        })
        .count()
}

/// Number of `side`'s discs that the rival cannot capture on the next
/// placement: corners, plus discs with no adjacent empty cell the rival
/// could legally play.
///
/// Experimental: an under-estimate of true stability, not part of
/// [`evaluate`].
pub fn stable_discs(board: &Board, side: Side) -> usize {
    playable_indices()
        .filter(|&index| board.cell(index) == side.cell() && is_stable(board, side, index))
        .count()
}

fn is_stable(board: &Board, side: Side, index: usize) -> bool {
    if CORNERS.contains(&index) {
        return true;
    }
    let rival = side.other();
    DIRECTIONS.iter().all(|&dir| {
        let neighbor = (index as isize + dir) as usize;
        board.cell(neighbor) != Cell::Empty || !board.is_legal_move(rival, neighbor)
    })
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
