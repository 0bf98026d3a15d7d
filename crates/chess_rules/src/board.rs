use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::attacks;
use crate::legality;
use crate::types::*;

/// Piece placement only: 64 squares, each empty or holding one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board([Option<Piece>; 64]);

/// Per-kind piece counts for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Material {
    counts: [u8; 6],
}

impl Material {
    pub fn count(&self, kind: PieceKind) -> u8 {
        self.counts[kind.idx()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board([None; 64])
    }

    /// The standard initial arrangement.
    pub fn standard() -> Self {
        let mut b = Board::empty();

        // Pawns
        for f in 0..8 {
            b.0[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.0[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.0[f] = Some(Piece::new(Color::White, kind));
            b.0[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.0[sq.index()]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.0[sq.index()].is_none()
    }

    pub(crate) fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.0[sq.index()] = pc;
    }

    /// Occupied squares in index order (a1, b1, ... h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.is(c, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    pub fn occupied_count(&self) -> usize {
        self.0.iter().filter(|pc| pc.is_some()).count()
    }

    /// The same board with everything except pawns removed.
    pub fn pawn_projection(&self) -> Board {
        let mut out = *self;
        for slot in out.0.iter_mut() {
            if !matches!(slot, Some(pc) if pc.kind == PieceKind::Pawn) {
                *slot = None;
            }
        }
        out
    }

    /// Pieces `color` still has on the board.
    pub fn material(&self, color: Color) -> Material {
        let mut m = Material::default();
        for (_, pc) in self.pieces().filter(|(_, pc)| pc.color == color) {
            m.counts[pc.kind.idx()] += 1;
        }
        m
    }

    /// Text diagram seen from `perspective`'s side of the board.
    pub fn render(&self, glyphs: Glyphs, perspective: Color) -> String {
        let (files, ranks): (Vec<i8>, Vec<i8>) = match perspective {
            Color::White => ((0..8).collect(), (0..8).rev().collect()),
            Color::Black => ((0..8).rev().collect(), (0..8).collect()),
        };
        let header: String = files.iter().map(|&f| (b'a' + f as u8) as char).collect();

        let mut out = String::new();
        out.push_str(&format!("  {header}\n"));
        for &r in &ranks {
            let label = (b'1' + r as u8) as char;
            out.push(label);
            out.push(' ');
            for &f in &files {
                let ch = Square::new(f, r)
                    .and_then(|sq| self.piece_at(sq))
                    .map(|pc| match glyphs {
                        Glyphs::Unicode => pc.glyph(),
                        Glyphs::Letters => pc.letter(),
                    })
                    .unwrap_or('.');
                out.push(ch);
            }
            out.push(' ');
            out.push(label);
            out.push('\n');
        }
        out.push_str(&format!("  {header}\n"));
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        CastlingRights {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        CastlingRights {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn get(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::King) => self.wk,
            (Color::White, CastleSide::Queen) => self.wq,
            (Color::Black, CastleSide::King) => self.bk,
            (Color::Black, CastleSide::Queen) => self.bq,
        }
    }

    /// Drops every right whose king or rook is no longer on its home square.
    pub(crate) fn restrict_to(&mut self, board: &Board) {
        for color in [Color::White, Color::Black] {
            let king = Piece::new(color, PieceKind::King);
            let rook = Piece::new(color, PieceKind::Rook);
            for side in [CastleSide::King, CastleSide::Queen] {
                let plan = side.plan(color);
                if board.piece_at(plan.king_from) != Some(king)
                    || board.piece_at(plan.rook_from) != Some(rook)
                {
                    self.forfeit(color, side);
                }
            }
        }
    }

    /// Rights are only ever removed, never restored.
    pub(crate) fn forfeit(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::King) => self.wk = false,
            (Color::White, CastleSide::Queen) => self.wq = false,
            (Color::Black, CastleSide::King) => self.bk = false,
            (Color::Black, CastleSide::Queen) => self.bq = false,
        }
    }
}

/// What has to match for two positions to count as a repetition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepetitionKey {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>, // square behind a pawn that just advanced 2
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    /// Placement exactly one ply ago; only en passant looks at it.
    pub(crate) previous_board: Board,
    pub(crate) repetitions: HashMap<RepetitionKey, u32>,
}

impl Position {
    pub fn startpos() -> Self {
        let board = Board::standard();
        Position::from_parts(
            board,
            board,
            Color::White,
            CastlingRights::all(),
            None,
            0,
            1,
        )
    }

    /// Start building a custom position.
    pub fn setup() -> Setup {
        Setup::new()
    }

    fn from_parts(
        board: Board,
        previous_board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut p = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            previous_board,
            repetitions: HashMap::new(),
        };
        p.record_repetition();
        p
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn previous_board(&self) -> &Board {
        &self.previous_board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.board.king_sq(c)
    }

    pub fn in_check(&self, c: Color) -> bool {
        attacks::in_check(&self.board, c)
    }

    /// The en passant target only takes part when a capture onto it is legal;
    /// otherwise the position is the same as one without a target.
    pub fn repetition_key(&self) -> RepetitionKey {
        RepetitionKey {
            board: self.board,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant.filter(|&ep| self.en_passant_capturable(ep)),
        }
    }

    fn en_passant_capturable(&self, ep: Square) -> bool {
        let us = self.side_to_move;
        let pawn = Some(Piece::new(us, PieceKind::Pawn));
        [-1, 1]
            .into_iter()
            .filter_map(|df| ep.offset(df, -us.forward()))
            .filter(|&from| self.board.piece_at(from) == pawn)
            .any(|from| legality::is_legal(self, Move::new(from, ep)))
    }

    /// How many times the current position has occurred, this one included.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions
            .get(&self.repetition_key())
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn record_repetition(&mut self) {
        *self.repetitions.entry(self.repetition_key()).or_insert(0) += 1;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board.render(Glyphs::Unicode, Color::White))?;
        write!(f, "{} to move", self.side_to_move)
    }
}

// =============================================================================
// Custom position setup
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{color} must have exactly one king, found {found}")]
    KingCount { color: Color, found: usize },
    #[error("en passant square {0} does not sit behind a pawn that just double-stepped")]
    BadEnPassant(Square),
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),
}

/// Builder for positions other than the initial one.
#[derive(Debug, Clone)]
pub struct Setup {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Setup {
    pub fn new() -> Self {
        Setup {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn place(mut self, sq: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set(sq, Some(Piece::new(color, kind)));
        self
    }

    pub fn side_to_move(mut self, c: Color) -> Self {
        self.side_to_move = c;
        self
    }

    /// Rights whose king or rook is off its home square are dropped by `build`.
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Marks `sq` as the en passant target: the opponent's pawn just passed over it.
    pub fn en_passant(mut self, sq: Square) -> Self {
        self.en_passant = Some(sq);
        self
    }

    pub fn halfmove_clock(mut self, n: u32) -> Self {
        self.halfmove_clock = n;
        self
    }

    pub fn fullmove_number(mut self, n: u32) -> Self {
        self.fullmove_number = n;
        self
    }

    pub fn build(self) -> Result<Position, SetupError> {
        for color in [Color::White, Color::Black] {
            let found = self.board.material(color).count(PieceKind::King) as usize;
            if found != 1 {
                return Err(SetupError::KingCount { color, found });
            }
        }

        // Otherwise the side to move could capture the king.
        let waiting = self.side_to_move.other();
        if attacks::in_check(&self.board, waiting) {
            return Err(SetupError::OpponentInCheck(waiting));
        }

        // The ply before had the double-stepping pawn still on its home rank.
        let mut previous = self.board;
        if let Some(ep) = self.en_passant {
            let mover = self.side_to_move.other();
            let pawn = Piece::new(mover, PieceKind::Pawn);
            let landed = ep.offset(0, mover.forward());
            let origin = ep.offset(0, -mover.forward());
            match (landed, origin) {
                (Some(landed), Some(origin))
                    if origin.rank() == mover.pawn_rank()
                        && self.board.piece_at(landed) == Some(pawn)
                        && self.board.is_empty(ep)
                        && self.board.is_empty(origin) =>
                {
                    previous.set(landed, None);
                    previous.set(origin, Some(pawn));
                }
                _ => return Err(SetupError::BadEnPassant(ep)),
            }
        }

        let mut castling = self.castling;
        castling.restrict_to(&self.board);

        Ok(Position::from_parts(
            self.board,
            previous,
            self.side_to_move,
            castling,
            self.en_passant,
            self.halfmove_clock,
            self.fullmove_number,
        ))
    }
}

impl Default for Setup {
    fn default() -> Self {
        Setup::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
