//! End-of-game detection.
//!
//! Evaluated before each move is requested, in this order: a side with no
//! legal move is stalemated (not in check) or checkmated (in check); otherwise
//! the fifty-move rule, threefold repetition and insufficient material are
//! tested in turn.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{board::Material, board::Position, movegen::has_legal_move, types::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    FiftyMove,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::FiftyMove => write!(f, "50-Move Rule"),
            DrawReason::ThreefoldRepetition => write!(f, "Threefold Repetition"),
            DrawReason::InsufficientMaterial => write!(f, "Insufficient Material"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl TerminalState {
    pub fn is_over(self) -> bool {
        self != TerminalState::Ongoing
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalState::Ongoing => write!(f, "Game in progress"),
            TerminalState::Checkmate { winner } => write!(f, "Checkmate! {winner} won!"),
            TerminalState::Stalemate => write!(f, "Draw! Stalemate"),
            TerminalState::Draw(reason) => write!(f, "Draw! {reason}"),
        }
    }
}

pub fn terminal_state(pos: &Position) -> TerminalState {
    let us = pos.side_to_move;
    let state = if !has_legal_move(pos) {
        if pos.in_check(us) {
            TerminalState::Checkmate { winner: us.other() }
        } else {
            TerminalState::Stalemate
        }
    } else if pos.is_fifty_move_draw() {
        TerminalState::Draw(DrawReason::FiftyMove)
    } else if pos.is_threefold_repetition() {
        TerminalState::Draw(DrawReason::ThreefoldRepetition)
    } else if pos.is_insufficient_material() {
        TerminalState::Draw(DrawReason::InsufficientMaterial)
    } else {
        TerminalState::Ongoing
    };

    if state.is_over() {
        debug!(%state, fullmove = pos.fullmove_number, "terminal position");
    }
    state
}

impl Position {
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && !has_legal_move(self)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && !has_legal_move(self)
    }

    /// One hundred half-moves without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    /// Each side is down to a bare king, or king plus a single bishop or knight.
    pub fn is_insufficient_material(&self) -> bool {
        [Color::White, Color::Black]
            .into_iter()
            .all(|c| is_bare(self.board.material(c)))
    }
}

/// Nothing beyond the king except at most one minor piece.
fn is_bare(m: Material) -> bool {
    let mut minors = 0;
    for kind in PieceKind::ALL.into_iter().filter(|&k| k != PieceKind::King) {
        match m.count(kind) {
            0 => {}
            n if kind.is_minor() => minors += n,
            _ => return false,
        }
    }
    minors <= 1
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod terminal_tests;
