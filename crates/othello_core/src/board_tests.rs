use super::*;

#[test]
fn empty_board_has_border_ring_and_clear_interior() {
    let board = Board::empty(Color::Black);
    for index in 0..GRID_CELLS {
        if is_playable(index) {
            assert_eq!(board.cell(index), Cell::Empty, "index {}", index);
        } else {
            assert_eq!(board.cell(index), Cell::Border, "index {}", index);
        }
    }
    assert_eq!(board.count(Cell::Empty), 64);
}

#[test]
fn start_layouts_mirror_by_assigned_color() {
    let as_black = Board::start(Color::Black);
    assert_eq!(as_black.cell(45), Cell::Own);
    assert_eq!(as_black.cell(54), Cell::Own);
    assert_eq!(as_black.cell(44), Cell::Rival);
    assert_eq!(as_black.cell(55), Cell::Rival);

    let as_white = Board::start(Color::White);
    assert_eq!(as_white.cell(44), Cell::Own);
    assert_eq!(as_white.cell(55), Cell::Own);
    assert_eq!(as_white.cell(45), Cell::Rival);
    assert_eq!(as_white.cell(54), Cell::Rival);

    // Same physical position either way: Black holds 45/54, White 44/55.
    for board in [&as_black, &as_white] {
        assert_eq!(board.count(Cell::Own), 2);
        assert_eq!(board.count(Cell::Rival), 2);
        assert_eq!(board.count(Cell::Empty), 60);
    }
}

#[test]
fn capture_requires_a_terminated_rival_run() {
    let board = Board::start(Color::Black);
    // 34 -> south: rival 44 then own 54 terminates the run.
    assert!(board.captures_in_direction(Side::Own, 34, 10));
    // 34 -> north walks straight onto empty cells.
    assert!(!board.captures_in_direction(Side::Own, 34, -10));
    // First step onto an own disc never captures.
    assert!(!board.captures_in_direction(Side::Own, 35, 10));
    // First step onto the border never captures.
    assert!(!board.captures_in_direction(Side::Own, 11, -10));
    assert!(!board.captures_in_direction(Side::Own, 11, -11));
}

#[test]
fn unterminated_run_into_empty_or_border_does_not_capture() {
    let mut board = Board::empty(Color::Black);
    board.set_cell(45, Cell::Rival);
    // 35 -> south crosses the rival disc but lands on empty 55.
    assert!(!board.captures_in_direction(Side::Own, 35, 10));
    // Rival run riding into the border ring.
    board.set_cell(18, Cell::Rival);
    assert!(!board.captures_in_direction(Side::Own, 17, 1));
}

#[test]
fn is_legal_move_needs_an_empty_cell() {
    let board = Board::start(Color::Black);
    assert!(board.is_legal_move(Side::Own, 34));
    // Occupied cell, even with a capturing neighbor run.
    assert!(!board.is_legal_move(Side::Own, 44));
    // Empty but captures nothing.
    assert!(!board.is_legal_move(Side::Own, 11));
    // Border and out-of-grid indices.
    assert!(!board.is_legal_move(Side::Own, 0));
    assert!(!board.is_legal_move(Side::Own, 110));
}

#[test]
fn pass_is_always_legal_and_applies_as_a_noop() {
    let mut board = Board::start(Color::Black);
    assert!(board.is_legal(Side::Own, Move::Pass));
    assert!(board.is_legal(Side::Rival, Move::Pass));
    let before = board.clone();
    board.apply_move(Side::Own, Move::Pass);
    assert_eq!(board, before);
}

#[test]
fn applying_an_opening_move_flips_exactly_one_disc() {
    let mut board = Board::start(Color::Black);
    board.apply_move(Side::Own, Move::Place(34));
    assert_eq!(board.cell(34), Cell::Own);
    assert_eq!(board.cell(44), Cell::Own, "sandwiched disc flips");
    assert_eq!(board.cell(55), Cell::Rival, "unrelated rival disc stays");
    assert_eq!(board.count(Cell::Own), 4);
    assert_eq!(board.count(Cell::Rival), 1);
}

#[test]
fn applying_a_move_flips_every_capturing_direction() {
    let mut board = Board::empty(Color::Black);
    // Two rival runs meeting at 44: west run 43/42 and north run 34.
    board.set_cell(41, Cell::Own);
    board.set_cell(42, Cell::Rival);
    board.set_cell(43, Cell::Rival);
    board.set_cell(24, Cell::Own);
    board.set_cell(34, Cell::Rival);
    assert!(board.is_legal_move(Side::Own, 44));
    board.apply_move(Side::Own, Move::Place(44));
    for index in [41, 42, 43, 24, 34, 44] {
        assert_eq!(board.cell(index), Cell::Own, "index {}", index);
    }
    assert_eq!(board.count(Cell::Rival), 0);
}

#[test]
fn legal_moves_conserve_the_interior_cell_count() {
    let mut board = Board::start(Color::Black);
    let mut side = Side::Own;
    for _ in 0..16 {
        let mv = playable_indices()
            .find(|&i| board.is_legal_move(side, i))
            .map(Move::Place)
            .unwrap_or(Move::Pass);
        board.apply_move(side, mv);
        assert_eq!(
            board.count(Cell::Own) + board.count(Cell::Rival) + board.count(Cell::Empty),
            64
        );
        side = side.other();
    }
}

#[test]
fn capture_grows_the_mover_and_shrinks_the_rival() {
    let mut board = Board::start(Color::Black);
    let mut side = Side::Own;
    for _ in 0..16 {
        let mv = match playable_indices().find(|&i| board.is_legal_move(side, i)) {
            Some(index) => Move::Place(index),
            None => break,
        };
        let movers = board.count(side.cell());
        let rivals = board.count(side.other().cell());
        board.apply_move(side, mv);
        assert!(board.count(side.cell()) > movers);
        assert!(board.count(side.other().cell()) < rivals);
        side = side.other();
    }
}

#[test]
fn game_over_when_neither_side_can_place() {
    assert!(!Board::start(Color::Black).game_over());
    // No discs at all: nothing to sandwich, nobody can move.
    assert!(Board::empty(Color::Black).game_over());
    // One side owns every cell.
    let mut full = Board::empty(Color::Black);
    for index in playable_indices() {
        full.set_cell(index, Cell::Own);
    }
    assert!(full.game_over());
}

#[test]
fn side_color_mapping_follows_the_assignment() {
    let board = Board::start(Color::White);
    assert_eq!(board.own_color(), Color::White);
    assert_eq!(board.color_of(Side::Own), Color::White);
    assert_eq!(board.color_of(Side::Rival), Color::Black);
    assert_eq!(board.side_of(Color::Black), Side::Rival);
    assert_eq!(board.side_of(Color::White), Side::Own);
}

#[test]
fn display_renders_labels_and_assigned_colors() {
    let text = Board::start(Color::Black).to_string();
    assert!(text.contains("a b c d e f g h"));
    assert!(text.contains("4 - - - W B - - -"));
    assert!(text.contains("5 - - - B W - - -"));
}
