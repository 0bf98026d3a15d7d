//! Geometric reachability shared by check detection and move legality.
//!
//! `attacks` answers "could the piece on `from` capture on `to`" from the
//! placement alone. It never asks whose turn it is, never castles, and never
//! looks at whether the attacker's own king would be exposed, so check
//! detection can call it without recursing into full legality.

use crate::board::Board;
use crate::types::*;

/// Outcome of testing a non-pawn movement pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reach {
    Clear,
    WrongShape,
    Blocked,
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Whether the piece standing on `from` attacks `to`.
///
/// False when `from` is empty or `to` holds a piece of the attacker's color.
/// Pawns attack only the two diagonal squares ahead of them for their own color.
pub fn attacks(board: &Board, from: Square, to: Square) -> bool {
    let Some(pc) = board.piece_at(from) else {
        return false;
    };
    if from == to {
        return false;
    }
    if let Some(target) = board.piece_at(to)
        && target.color == pc.color
    {
        return false;
    }
    match pc.kind {
        PieceKind::Pawn => pawn_attacks(pc.color, from, to),
        kind => piece_reach(board, kind, from, to) == Reach::Clear,
    }
}

pub(crate) fn pawn_attacks(color: Color, from: Square, to: Square) -> bool {
    (to.file() - from.file()).abs() == 1 && to.rank() - from.rank() == color.forward()
}

/// Movement pattern check for every kind except pawns, whose pushes and
/// captures differ and are handled by the legality layer.
pub(crate) fn piece_reach(board: &Board, kind: PieceKind, from: Square, to: Square) -> Reach {
    let df = to.file() - from.file();
    let dr = to.rank() - from.rank();
    if df == 0 && dr == 0 {
        return Reach::WrongShape;
    }
    let straight = df == 0 || dr == 0;
    let diagonal = df.abs() == dr.abs();

    match kind {
        PieceKind::Rook if straight => slide(board, from, to),
        PieceKind::Bishop if diagonal => slide(board, from, to),
        PieceKind::Queen if straight || diagonal => slide(board, from, to),
        PieceKind::King if df.abs() <= 1 && dr.abs() <= 1 => Reach::Clear,
        PieceKind::Knight if KNIGHT_DELTAS.contains(&(df, dr)) => Reach::Clear,
        PieceKind::Pawn => {
            if dr.abs() == 1 && df.abs() == 1 {
                Reach::Clear
            } else {
                Reach::WrongShape
            }
        }
        _ => Reach::WrongShape,
    }
}

/// Every square strictly between `from` and `to` must be empty.
/// Caller guarantees the two squares share a rank, file or diagonal.
fn slide(board: &Board, from: Square, to: Square) -> Reach {
    let df = (to.file() - from.file()).signum();
    let dr = (to.rank() - from.rank()).signum();
    let mut cur = from.offset(df, dr);
    while let Some(sq) = cur {
        if sq == to {
            return Reach::Clear;
        }
        if !board.is_empty(sq) {
            return Reach::Blocked;
        }
        cur = sq.offset(df, dr);
    }
    Reach::WrongShape
}

/// Whether any piece of color `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, pc)| pc.color == by)
        .any(|(from, _)| attacks(board, from, target))
}

/// Whether `side`'s king is attacked by any enemy piece.
///
/// A board without that king is reported as not in check; the move applier
/// never removes a king, so that only happens for hand-built boards.
pub fn in_check(board: &Board, side: Color) -> bool {
    board
        .king_sq(side)
        .is_some_and(|k| is_square_attacked(board, k, side.other()))
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
