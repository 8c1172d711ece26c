//! The referee's line protocol.
//!
//! One line per event on stdin/stdout. The handshake line `I B` assigns
//! this agent Black (anything else assigns White) and is answered with
//! `R <letter>`. Move lines are `<letter>` for a pass or
//! `<letter> <col> <row>` with col `a`-`h` and row `1`-`8`. Lines
//! starting with `C ` are diagnostics and not part of the move protocol.

use thiserror::Error;

use crate::types::*;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed move line: {0:?}")]
    MalformedMove(String),
    #[error("column {0:?} out of range a-h")]
    BadColumn(char),
    #[error("row {0:?} out of range 1-8")]
    BadRow(char),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// `"I B"` assigns this agent Black; any other handshake assigns White.
pub fn parse_handshake(line: &str) -> Color {
    if line.trim() == "I B" {
        Color::Black
    } else {
        Color::White
    }
}

pub fn handshake_reply(color: Color) -> String {
    format!("R {}", color.letter())
}

/// Column letter for a playable index (`a` for column 1 through `h`).
pub fn col_letter(index: usize) -> char {
    (b'a' + col_of(index) as u8 - 1) as char
}

fn col_offset(letter: char) -> Result<usize, ProtocolError> {
    match letter {
        'a'..='h' => Ok((letter as u8 - b'a') as usize + 1),
        _ => Err(ProtocolError::BadColumn(letter)),
    }
}

fn row_offset(digit: char) -> Result<usize, ProtocolError> {
    match digit {
        '1'..='8' => Ok(digit as usize - '0' as usize),
        _ => Err(ProtocolError::BadRow(digit)),
    }
}

/// Renders a move as a protocol line, without the trailing newline.
pub fn format_move(color: Color, mv: Move) -> String {
    match mv {
        Move::Pass => color.letter().to_string(),
        Move::Place(index) => {
            format!("{} {} {}", color.letter(), col_letter(index), row_of(index))
        }
    }
}

/// Parses a move line into the mover's color and the move itself.
///
/// The one-token form is a pass; the three-token form is a placement.
/// Anything else is a [`ProtocolError`], not a panic.
pub fn parse_move_line(line: &str) -> Result<(Color, Move), ProtocolError> {
    let malformed = || ProtocolError::MalformedMove(line.to_string());

    let mut tokens = line.split_whitespace();
    let color_token = tokens.next().ok_or_else(malformed)?;
    let mut color_chars = color_token.chars();
    let color = match (color_chars.next(), color_chars.next()) {
        (Some(c), None) => Color::from_letter(c).ok_or_else(malformed)?,
        _ => return Err(malformed()),
    };

    match (tokens.next(), tokens.next(), tokens.next()) {
        (None, _, _) => Ok((color, Move::Pass)),
        (Some(col_token), Some(row_token), None) => {
            let col_char = single_char(col_token).ok_or_else(malformed)?;
            let row_char = single_char(row_token).ok_or_else(malformed)?;
            let col = col_offset(col_char)?;
            let row = row_offset(row_char)?;
            Ok((color, Move::Place(index_at(row, col))))
        }
        _ => Err(malformed()),
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
