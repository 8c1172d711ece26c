//! The game loop behind the referee's line protocol.
//!
//! One authoritative board lives here for the whole game; the engine only
//! ever sees it by reference and searches over its own clones. Lines
//! starting with `C ` are diagnostics for whoever reads the transcript;
//! the referee ignores them.

use std::io::{BufRead, Write};
use std::time::Duration;

use othello_core::{
    format_move, handshake_reply, legal_moves, move_time_budget, parse_handshake, parse_move_line,
    Board, Cell, Color, Engine, ProtocolError, SearchLimits, Side,
};

/// Total game clock granted to this agent at startup.
pub const STARTING_TIME: Duration = Duration::from_secs(600);

/// Plays one full game: handshake, then alternating turns until neither
/// side can place.
///
/// The move-time ledger follows the allocation table and deducts each
/// move's full budget whether or not the search used all of it. A rival
/// move that fails to parse is a [`ProtocolError`]; a rival move that
/// parses but is illegal is logged and applied as-is.
pub fn run_game<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    engine: &mut dyn Engine,
    depth: u8,
) -> Result<(), ProtocolError> {
    let mut line = String::new();

    writeln!(output, "C Initializing board")?;
    if input.read_line(&mut line)? == 0 {
        return Err(ProtocolError::UnexpectedEof);
    }
    let my_color = parse_handshake(&line);
    writeln!(output, "{}", handshake_reply(my_color))?;
    output.flush()?;

    let mut board = Board::start(my_color);
    // Black always opens.
    let mut to_move = board.side_of(Color::Black);
    let mut remaining = STARTING_TIME;
    let mut move_num = 0usize;

    while !board.game_over() {
        if to_move == Side::Own {
            print_board(&mut output, &board)?;
            print_moves(&mut output, &board, my_color)?;

            move_num += 1;
            let budget = move_time_budget(move_num, remaining);
            writeln!(output, "C Move time: {}s", budget.as_secs())?;

            let limits = SearchLimits::depth_and_time(depth, budget);
            limits.start();
            let result = engine.search(&board, Side::Own, limits);
            if result.stopped {
                writeln!(output, "C Search hit the move time limit")?;
            }
            remaining = remaining.saturating_sub(budget);
            writeln!(output, "C Remaining time: {}s", remaining.as_secs())?;

            writeln!(output, "{}", format_move(my_color, result.best_move))?;
            output.flush()?;
            board.apply_move(Side::Own, result.best_move);
        } else {
            writeln!(output, "C Waiting for opponent's move...")?;
            output.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(ProtocolError::UnexpectedEof);
            }
            let (_, mv) = parse_move_line(line.trim())?;
            if !board.is_legal(Side::Rival, mv) {
                writeln!(output, "C Opponent performed an illegal move!")?;
            }
            board.apply_move(Side::Rival, mv);
        }
        to_move = to_move.other();
    }

    writeln!(
        output,
        "C Final score: {} {} - {} {}",
        my_color.letter(),
        board.count(Cell::Own),
        my_color.other().letter(),
        board.count(Cell::Rival),
    )?;
    output.flush()?;
    Ok(())
}

fn print_board<W: Write>(output: &mut W, board: &Board) -> Result<(), ProtocolError> {
    writeln!(output, "C Current board")?;
    for row in board.to_string().lines() {
        writeln!(output, "C {}", row)?;
    }
    Ok(())
}

fn print_moves<W: Write>(
    output: &mut W,
    board: &Board,
    my_color: Color,
) -> Result<(), ProtocolError> {
    writeln!(output, "C Possible moves")?;
    for mv in legal_moves(board, Side::Own) {
        writeln!(output, "C {}", format_move(my_color, mv))?;
    }
    Ok(())
}
