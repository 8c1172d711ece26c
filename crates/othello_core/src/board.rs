use std::fmt;

use crate::types::*;

/// The playing surface: a 10×10 grid whose outer ring is a `Border`
/// sentinel, plus the agent's assigned color (which fixes the
/// `Side::Own` ↔ color mapping for the whole game).
///
/// Boards are plain values; the search engine clones one per explored
/// node and the driver mutates exactly one authoritative instance per
/// real move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; GRID_CELLS],
    own_color: Color,
}

impl Board {
    /// An empty board: border ring set, interior cleared.
    pub fn empty(own_color: Color) -> Self {
        let mut cells = [Cell::Border; GRID_CELLS];
        for index in playable_indices() {
            cells[index] = Cell::Empty;
        }
        Board { cells, own_color }
    }

    /// The canonical starting layout. The two configurations (assigned
    /// Black vs White) are mirror images across the center diagonals.
    pub fn start(own_color: Color) -> Self {
        let mut board = Board::empty(own_color);
        match own_color {
            Color::Black => {
                board.cells[45] = Cell::Own;
                board.cells[54] = Cell::Own;
                board.cells[44] = Cell::Rival;
                board.cells[55] = Cell::Rival;
            }
            Color::White => {
                board.cells[44] = Cell::Own;
                board.cells[55] = Cell::Own;
                board.cells[45] = Cell::Rival;
                board.cells[54] = Cell::Rival;
            }
        }
        board
    }

    pub fn own_color(&self) -> Color {
        self.own_color
    }

    pub fn color_of(&self, side: Side) -> Color {
        match side {
            Side::Own => self.own_color,
            Side::Rival => self.own_color.other(),
        }
    }

    pub fn side_of(&self, color: Color) -> Side {
        if color == self.own_color {
            Side::Own
        } else {
            Side::Rival
        }
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn set_cell(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Counts interior cells matching `cell`; border cells are excluded.
    pub fn count(&self, cell: Cell) -> usize {
        playable_indices()
            .filter(|&index| self.cells[index] == cell)
            .count()
    }

    /// Walks from `index` along `dir` one step at a time. True iff the
    /// immediately adjacent cell starts a run of rival discs that
    /// terminates on one of `side`'s own discs; a walk that crosses zero
    /// rival discs never captures.
    pub fn captures_in_direction(&self, side: Side, index: usize, dir: isize) -> bool {
        let rival = side.other().cell();
        let mut at = (index as isize + dir) as usize;
        if self.cells[at] != rival {
            return false;
        }
        while self.cells[at] == rival {
            at = (at as isize + dir) as usize;
        }
        self.cells[at] == side.cell()
    }

    /// True if `index` is an empty playable cell with at least one
    /// capturing direction for `side`.
    pub fn is_legal_move(&self, side: Side, index: usize) -> bool {
        is_playable(index)
            && self.cells[index] == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&dir| self.captures_in_direction(side, index, dir))
    }

    /// A pass is always legal at the protocol level; a placement defers
    /// to [`Board::is_legal_move`].
    pub fn is_legal(&self, side: Side, mv: Move) -> bool {
        match mv {
            Move::Pass => true,
            Move::Place(index) => self.is_legal_move(side, index),
        }
    }

    /// Places a disc and flips every captured run. A pass is a no-op.
    ///
    /// The caller is expected to have validated legality; an illegal
    /// placement is applied as a bare disc with no flips, which leaves a
    /// position unreachable by legal play.
    pub fn apply_move(&mut self, side: Side, mv: Move) {
        let index = match mv {
            Move::Pass => return,
            Move::Place(index) => index,
        };
        self.cells[index] = side.cell();
        for &dir in &DIRECTIONS {
            if self.captures_in_direction(side, index, dir) {
                self.flip_run(side, index, dir);
            }
        }
    }

    /// Flips the rival run starting one step along `dir`, up to but not
    /// including the terminating own-side disc. Only called for
    /// directions known to capture.
    fn flip_run(&mut self, side: Side, index: usize, dir: isize) {
        let own = side.cell();
        let mut at = (index as isize + dir) as usize;
        while self.cells[at] != own {
            self.cells[at] = own;
            at = (at as isize + dir) as usize;
        }
    }

    /// True if some playable cell is a legal placement for `side`.
    pub fn has_any_move(&self, side: Side) -> bool {
        playable_indices().any(|index| self.is_legal_move(side, index))
    }

    /// The game is over when both sides have zero legal placements.
    pub fn game_over(&self) -> bool {
        !self.has_any_move(Side::Own) && !self.has_any_move(Side::Rival)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in b'a'..=b'h' {
            write!(f, " {}", col as char)?;
        }
        writeln!(f)?;
        for row in 1..=8 {
            write!(f, "{}", row)?;
            for col in 1..=8 {
                let glyph = match self.cells[index_at(row, col)] {
                    Cell::Own => self.own_color.letter(),
                    Cell::Rival => self.own_color.other().letter(),
                    Cell::Empty => '-',
                    Cell::Border => 'X',
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
