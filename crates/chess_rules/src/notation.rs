//! Move token parsing.
//!
//! Accepted forms:
//! - `<file><rank><file><rank>`, e.g. `a2a3`
//! - the same followed by a promotion letter in `B`, `R`, `N`, `Q`, e.g. `a7a8Q`
//! - `0-0` (kingside castle) and `0-0-0` (queenside castle)
//!
//! Parsing is purely syntactic; nothing here looks at a position.

use std::str::FromStr;

use thiserror::Error;

use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 4 or 5 characters, got {0}")]
    WrongLength(usize),
    #[error("`{0}` is not a file (a-h)")]
    BadFile(char),
    #[error("`{0}` is not a rank (1-8)")]
    BadRank(char),
    #[error("`{0}` is not a promotion piece (B, R, N or Q)")]
    BadPromotion(char),
}

pub fn parse_move(token: &str) -> Result<Move, ParseError> {
    match token {
        "0-0" => return Ok(Move::Castle(CastleSide::King)),
        "0-0-0" => return Ok(Move::Castle(CastleSide::Queen)),
        _ => {}
    }

    let chars: Vec<char> = token.chars().collect();
    if !(4..=5).contains(&chars.len()) {
        return Err(ParseError::WrongLength(chars.len()));
    }

    let from = square_at(chars[0], chars[1])?;
    let to = square_at(chars[2], chars[3])?;
    let promo = match chars.get(4) {
        None => None,
        Some(&c) => Some(promotion_kind(c)?),
    };

    Ok(Move::Normal { from, to, promo })
}

fn square_at(file: char, rank: char) -> Result<Square, ParseError> {
    if !('a'..='h').contains(&file) {
        return Err(ParseError::BadFile(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(ParseError::BadRank(rank));
    }
    // Both characters are ASCII at this point.
    let (f, r) = ((file as u8 - b'a') as i8, (rank as u8 - b'1') as i8);
    Square::new(f, r).ok_or(ParseError::BadFile(file))
}

fn promotion_kind(c: char) -> Result<PieceKind, ParseError> {
    match c {
        'B' => Ok(PieceKind::Bishop),
        'R' => Ok(PieceKind::Rook),
        'N' => Ok(PieceKind::Knight),
        'Q' => Ok(PieceKind::Queen),
        _ => Err(ParseError::BadPromotion(c)),
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
