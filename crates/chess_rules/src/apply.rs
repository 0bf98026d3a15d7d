use crate::board::{Board, Position};
use crate::legality::{IllegalMove, check_move};
use crate::types::*;

/// Board-only effect of a move: relocation, castling rook co-move, en passant
/// removal and promotion. Used both for real moves and for scratch
/// simulation during legality checks.
pub(crate) fn play_on_board(board: &mut Board, color: Color, mv: Move) {
    match mv {
        Move::Castle(side) => {
            let plan = side.plan(color);
            let king = board.piece_at(plan.king_from);
            let rook = board.piece_at(plan.rook_from);
            board.set(plan.king_from, None);
            board.set(plan.rook_from, None);
            board.set(plan.king_to, king);
            board.set(plan.rook_to, rook);
        }
        Move::Normal { from, to, promo } => {
            let Some(moved) = board.piece_at(from) else {
                return;
            };

            // A pawn stepping diagonally onto an empty square is capturing en passant;
            // the captured pawn sits one rank behind the destination.
            if moved.kind == PieceKind::Pawn && from.file() != to.file() && board.is_empty(to) {
                if let Some(victim) = to.offset(0, -moved.color.forward()) {
                    board.set(victim, None);
                }
            }

            let placed = match promo {
                Some(kind) if moved.kind == PieceKind::Pawn => Piece::new(moved.color, kind),
                _ => moved,
            };
            board.set(from, None);
            board.set(to, Some(placed));
        }
    }
}

impl Position {
    /// Applies a move that `check_move` already accepted. Does not re-validate.
    ///
    /// Updates the board and castling rights and passes the turn. The
    /// half-move clock, en passant target, repetition history and one-ply
    /// snapshot are left to the caller; `play_unchecked` does all of it.
    pub fn apply(&mut self, mv: Move) {
        play_on_board(&mut self.board, self.side_to_move, mv);
        // A right is lost for good once its king or rook leaves home.
        self.castling.restrict_to(&self.board);

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();
    }

    /// Validates and plays `mv`, leaving the position untouched when illegal.
    pub fn play(&mut self, mv: Move) -> Result<(), IllegalMove> {
        check_move(self, mv)?;
        self.play_unchecked(mv);
        Ok(())
    }

    /// `apply` plus the per-ply bookkeeping. The move must already be legal.
    pub fn play_unchecked(&mut self, mv: Move) {
        let before = self.board;
        self.apply(mv);
        self.refresh_after(&before, mv);
    }

    fn refresh_after(&mut self, before: &Board, mv: Move) {
        // Fifty-move clock: any capture changes the piece count, any pawn
        // move (promotion included) changes the pawn-only projection.
        let reset = before.occupied_count() != self.board.occupied_count()
            || before.pawn_projection() != self.board.pawn_projection();
        self.halfmove_clock = if reset { 0 } else { self.halfmove_clock + 1 };

        self.en_passant = match mv {
            Move::Normal { from, to, .. }
                if before
                    .piece_at(from)
                    .is_some_and(|pc| pc.kind == PieceKind::Pawn)
                    && (to.rank() - from.rank()).abs() == 2 =>
            {
                from.offset(0, (to.rank() - from.rank()) / 2)
            }
            _ => None,
        };

        self.previous_board = *before;
        self.record_repetition();
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
