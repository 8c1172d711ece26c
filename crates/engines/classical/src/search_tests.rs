use super::*;
use othello_core::{Board, Cell, Color};

/// Walks a few plies of first-generated moves to reach varied positions.
fn position_after(plies: usize) -> Board {
    let mut board = Board::start(Color::Black);
    let mut side = Side::Own;
    for _ in 0..plies {
        let mv = legal_moves(&board, side)
            .first()
            .copied()
            .unwrap_or(Move::Pass);
        board.apply_move(side, mv);
        side = side.other();
    }
    board
}

/// One-ply greedy reference: arg-max of the successor evaluations, first
/// generated move winning ties.
fn greedy_reference(board: &Board, side: Side) -> (Move, i32) {
    let mut best = Move::Pass;
    let mut best_score = i32::MIN + 1;
    for mv in legal_moves(board, side) {
        let mut child = board.clone();
        child.apply_move(side, mv);
        let score = evaluate(&child, side);
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }
    (best, best_score)
}

/// Explicit two-ply minimax reference without pruning.
fn minimax2_reference(board: &Board, side: Side) -> (Move, i32) {
    let mut best = Move::Pass;
    let mut best_score = i32::MIN + 1;
    for mv in legal_moves(board, side) {
        let mut child = board.clone();
        child.apply_move(side, mv);
        let mut replies = legal_moves(&child, side.other());
        if replies.is_empty() {
            replies.push(Move::Pass);
        }
        let mut worst = i32::MAX;
        for reply in replies {
            let mut grandchild = child.clone();
            grandchild.apply_move(side.other(), reply);
            worst = worst.min(evaluate(&grandchild, side));
        }
        if worst > best_score {
            best_score = worst;
            best = mv;
        }
    }
    (best, best_score)
}

#[test]
fn depth_zero_search_is_the_one_ply_greedy_argmax() {
    for plies in [0, 1, 3, 5, 8] {
        let board = position_after(plies);
        let side = if plies % 2 == 0 { Side::Own } else { Side::Rival };
        let mut nodes = 0;
        let tc = TimeControl::new(None);
        tc.start();
        let outcome = pick_best_move(&board, side, 0, &mut nodes, &tc);
        let (expected_move, expected_score) = greedy_reference(&board, side);
        assert_eq!(outcome.best_move, expected_move, "after {} plies", plies);
        assert_eq!(outcome.score, expected_score, "after {} plies", plies);
        assert!(!outcome.stopped);
    }
}

#[test]
fn depth_two_search_matches_explicit_minimax() {
    for plies in [0, 2, 4, 7] {
        let board = position_after(plies);
        let side = if plies % 2 == 0 { Side::Own } else { Side::Rival };
        let mut nodes = 0;
        let tc = TimeControl::new(None);
        tc.start();
        let outcome = pick_best_move(&board, side, 2, &mut nodes, &tc);
        let (expected_move, expected_score) = minimax2_reference(&board, side);
        assert_eq!(outcome.best_move, expected_move, "after {} plies", plies);
        assert_eq!(outcome.score, expected_score, "after {} plies", plies);
        assert!(nodes > 0);
    }
}

#[test]
fn symmetric_openings_break_ties_by_generation_order() {
    let board = Board::start(Color::Black);
    let mut nodes = 0;
    let tc = TimeControl::new(None);
    tc.start();
    let outcome = pick_best_move(&board, Side::Own, 2, &mut nodes, &tc);
    // All four openings are equivalent by symmetry; the first generated
    // (lowest index) must win.
    assert_eq!(outcome.best_move, Move::Place(34));
}

#[test]
fn moveless_root_passes_without_searching() {
    let board = Board::empty(Color::Black);
    let mut nodes = 0;
    let tc = TimeControl::new(None);
    tc.start();
    let outcome = pick_best_move(&board, Side::Own, 2, &mut nodes, &tc);
    assert_eq!(outcome.best_move, Move::Pass);
    assert_eq!(nodes, 0);
    assert!(!outcome.stopped);
}

#[test]
fn expired_clock_returns_a_legal_move_and_flags_the_stop() {
    let board = Board::start(Color::Black);
    let mut nodes = 0;
    let tc = TimeControl::new(None);
    tc.start();
    tc.stop();
    let outcome = pick_best_move(&board, Side::Own, 2, &mut nodes, &tc);
    assert!(outcome.stopped);
    assert!(board.is_legal(Side::Own, outcome.best_move));
}

#[test]
fn search_recurses_through_a_forced_pass() {
    // Every cell is ours except a lone rival disc behind the last empty
    // cell; taking it leaves the rival with nothing, so the reply ply in
    // the tree is a synthetic pass.
    let mut board = Board::empty(Color::Black);
    for index in othello_core::playable_indices() {
        board.set_cell(index, Cell::Own);
    }
    board.set_cell(11, Cell::Empty);
    board.set_cell(12, Cell::Rival);
    let mut nodes = 0;
    let tc = TimeControl::new(None);
    tc.start();
    let outcome = pick_best_move(&board, Side::Own, 2, &mut nodes, &tc);
    assert_eq!(outcome.best_move, Move::Place(11));
    assert_eq!(outcome.score, crate::eval::WIN_BONUS);
}
