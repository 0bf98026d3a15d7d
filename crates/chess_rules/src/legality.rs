//! Full move legality on top of the shared attack rules.
//!
//! On top of plain geometry this layer enforces turn ownership, pawn pushes,
//! en passant, promotion, castling preconditions, and the rule that a move
//! may not leave the mover's own king attacked.

use thiserror::Error;

use crate::apply::play_on_board;
use crate::attacks::{self, Reach, piece_reach};
use crate::board::Position;
use crate::types::*;

/// Why a well-formed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("there is no piece on {0}")]
    EmptyOrigin(Square),
    #[error("the piece on {0} belongs to the other side")]
    NotYourPiece(Square),
    #[error("{0} is occupied by one of your own pieces")]
    OwnPieceOnTarget(Square),
    #[error("that piece does not move that way")]
    BadGeometry,
    #[error("another piece is in the way")]
    PathBlocked,
    #[error("a pawn cannot advance onto an occupied square")]
    PawnBlocked,
    #[error("a pawn only moves diagonally when capturing")]
    NothingToCapture,
    #[error("a pawn may only advance two squares from its starting rank")]
    DoubleStepNotAllowed,
    #[error("a pawn reaching the last rank must promote")]
    MissingPromotion,
    #[error("only a pawn reaching the last rank may promote")]
    UnexpectedPromotion,
    #[error("a pawn cannot promote to a {0:?}")]
    InvalidPromotion(PieceKind),
    #[error("that castling right has been lost")]
    CastlingRightLost,
    #[error("pieces stand between the king and the rook")]
    CastlingPathBlocked,
    #[error("you cannot castle while in check")]
    CastlingOutOfCheck,
    #[error("the king would pass through or land on an attacked square")]
    CastlingThroughCheck,
    #[error("that move leaves your king in check")]
    LeavesKingInCheck,
}

pub fn is_legal(pos: &Position, mv: Move) -> bool {
    check_move(pos, mv).is_ok()
}

/// Decides whether `mv` is legal for the side to move, with the reason when it is not.
pub fn check_move(pos: &Position, mv: Move) -> Result<(), IllegalMove> {
    let (from, to, promo) = match mv {
        Move::Castle(side) => return check_castle(pos, side),
        Move::Normal { from, to, promo } => (from, to, promo),
    };

    let us = pos.side_to_move;
    let pc = pos.piece_at(from).ok_or(IllegalMove::EmptyOrigin(from))?;
    if pc.color != us {
        return Err(IllegalMove::NotYourPiece(from));
    }
    if let Some(target) = pos.piece_at(to)
        && target.color == us
    {
        return Err(IllegalMove::OwnPieceOnTarget(to));
    }

    match pc.kind {
        PieceKind::Pawn => check_pawn(pos, from, to, us)?,
        kind => match piece_reach(&pos.board, kind, from, to) {
            Reach::Clear => {}
            Reach::WrongShape => return Err(IllegalMove::BadGeometry),
            Reach::Blocked => return Err(IllegalMove::PathBlocked),
        },
    }

    check_promotion(pc, to, promo)?;

    let mut scratch = pos.board;
    play_on_board(&mut scratch, us, mv);
    if attacks::in_check(&scratch, us) {
        return Err(IllegalMove::LeavesKingInCheck);
    }
    Ok(())
}

fn check_pawn(pos: &Position, from: Square, to: Square, us: Color) -> Result<(), IllegalMove> {
    let fwd = us.forward();
    let df = (to.file() - from.file()).abs();
    let advance = (to.rank() - from.rank()) * fwd;

    match (df, advance) {
        (0, 1) => {
            if !pos.board.is_empty(to) {
                return Err(IllegalMove::PawnBlocked);
            }
        }
        (0, 2) => {
            if from.rank() != us.pawn_rank() {
                return Err(IllegalMove::DoubleStepNotAllowed);
            }
            let jumped = from.offset(0, fwd).ok_or(IllegalMove::BadGeometry)?;
            if !pos.board.is_empty(jumped) || !pos.board.is_empty(to) {
                return Err(IllegalMove::PawnBlocked);
            }
        }
        (1, 1) => {
            // Own pieces on `to` were already refused, so occupied means enemy.
            if pos.board.is_empty(to) && !is_en_passant(pos, from, to, us) {
                return Err(IllegalMove::NothingToCapture);
            }
        }
        _ => return Err(IllegalMove::BadGeometry),
    }
    Ok(())
}

/// A diagonal pawn step onto the en passant target, capturing the enemy pawn
/// that stood on its home rank one ply ago and now sits beside `from`.
pub(crate) fn is_en_passant(pos: &Position, from: Square, to: Square, us: Color) -> bool {
    if pos.en_passant != Some(to) || !pos.board.is_empty(to) {
        return false;
    }
    let their_pawn = Some(Piece::new(us.other(), PieceKind::Pawn));
    if let Some(victim) = Square::new(to.file(), from.rank())
        && let Some(origin) = to.offset(0, us.forward())
    {
        pos.board.piece_at(victim) == their_pawn
            && pos.previous_board.piece_at(origin) == their_pawn
            && pos.previous_board.is_empty(victim)
    } else {
        false
    }
}

fn check_promotion(pc: Piece, to: Square, promo: Option<PieceKind>) -> Result<(), IllegalMove> {
    let reaches_last_rank = pc.kind == PieceKind::Pawn && to.rank() == pc.color.promotion_rank();
    match promo {
        None if reaches_last_rank => Err(IllegalMove::MissingPromotion),
        Some(_) if !reaches_last_rank => Err(IllegalMove::UnexpectedPromotion),
        Some(kind) if !PieceKind::PROMOTIONS.contains(&kind) => {
            Err(IllegalMove::InvalidPromotion(kind))
        }
        _ => Ok(()),
    }
}

fn check_castle(pos: &Position, side: CastleSide) -> Result<(), IllegalMove> {
    let us = pos.side_to_move;
    let plan = side.plan(us);
    let king = Piece::new(us, PieceKind::King);
    let rook = Piece::new(us, PieceKind::Rook);

    if side.between(us).iter().any(|&sq| !pos.board.is_empty(sq)) {
        return Err(IllegalMove::CastlingPathBlocked);
    }
    if !pos.castling.get(us, side)
        || pos.piece_at(plan.king_from) != Some(king)
        || pos.piece_at(plan.rook_from) != Some(rook)
    {
        return Err(IllegalMove::CastlingRightLost);
    }
    if pos.in_check(us) {
        return Err(IllegalMove::CastlingOutOfCheck);
    }

    // Stand the king on each square it crosses and ask whether it is attacked there.
    for sq in side.transit(us) {
        let mut scratch = pos.board;
        scratch.set(plan.king_from, None);
        scratch.set(sq, Some(king));
        if attacks::in_check(&scratch, us) {
            return Err(IllegalMove::CastlingThroughCheck);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
