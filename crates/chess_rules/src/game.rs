//! Entry points for a game driver.
//!
//! A driver owns one `Position`, feeds it move tokens and asks for the
//! terminal state before prompting again. Both the in-place
//! (`Position::submit`) and copy-on-accept (`submit_move`) styles are offered.

use thiserror::Error;
use tracing::debug;

use crate::{
    board::Position,
    legality::IllegalMove,
    notation::{ParseError, parse_move},
    types::Move,
};

/// Why a submitted token was not played. `Display` gives the text to show a player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("malformed move: {0}")]
    Malformed(#[from] ParseError),
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
}

#[derive(Debug, Clone)]
pub enum LegalityResult {
    Accepted(Position),
    Rejected(Rejection),
}

impl LegalityResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LegalityResult::Accepted(_))
    }
}

/// The standard starting position.
pub fn new_game() -> Position {
    Position::startpos()
}

/// Plays `token` on a copy of `position`; the original is never modified.
pub fn submit_move(position: &Position, token: &str) -> LegalityResult {
    let mut next = position.clone();
    match next.submit(token) {
        Ok(_) => LegalityResult::Accepted(next),
        Err(reason) => LegalityResult::Rejected(reason),
    }
}

/// Whether the side to move is currently in check.
pub fn is_in_check(position: &Position) -> bool {
    position.in_check(position.side_to_move)
}

impl Position {
    /// Parses and plays `token` in place. On rejection the position is unchanged.
    pub fn submit(&mut self, token: &str) -> Result<Move, Rejection> {
        let result = parse_move(token.trim())
            .map_err(Rejection::from)
            .and_then(|mv| self.play(mv).map(|_| mv).map_err(Rejection::from));

        match &result {
            Ok(mv) => debug!(
                %mv,
                side = %self.side_to_move.other(),
                halfmove_clock = self.halfmove_clock,
                "move accepted"
            ),
            Err(reason) => debug!(token, %reason, "move rejected"),
        }
        result
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
