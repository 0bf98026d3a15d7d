use crate::{board::Position, legality::is_legal, types::*};

static PROMOTION_CHOICES: [Option<PieceKind>; 4] = [
    Some(PieceKind::Queen),
    Some(PieceKind::Rook),
    Some(PieceKind::Bishop),
    Some(PieceKind::Knight),
];
static NO_PROMOTION: [Option<PieceKind>; 1] = [None];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    out.extend(candidates(pos).filter(|&mv| is_legal(pos, mv)));
}

/// True as soon as one legal move is found.
pub fn has_legal_move(pos: &Position) -> bool {
    candidates(pos).any(|mv| is_legal(pos, mv))
}

/// Every (own piece, destination) pair on the board, with each promotion
/// choice spelled out for pawns landing on the last rank, plus both castles.
/// The legality layer does all filtering.
fn candidates(pos: &Position) -> impl Iterator<Item = Move> + '_ {
    let us = pos.side_to_move;
    let steps = pos
        .board
        .pieces()
        .filter(move |(_, pc)| pc.color == us)
        .flat_map(move |(from, pc)| {
            Square::all().flat_map(move |to| {
                let promotes = pc.kind == PieceKind::Pawn && to.rank() == us.promotion_rank();
                let promos: &'static [Option<PieceKind>] =
                    if promotes { &PROMOTION_CHOICES } else { &NO_PROMOTION };
                promos.iter().map(move |&promo| Move::Normal { from, to, promo })
            })
        });
    steps.chain([
        Move::Castle(CastleSide::King),
        Move::Castle(CastleSide::Queen),
    ])
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
