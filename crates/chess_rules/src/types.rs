use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank step a pawn of this color advances by.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank (0-based) holding this side's king and rooks at the start.
    pub fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank (0-based) from which this side's pawns may double-step.
    pub fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank (0-based) on which this side's pawns must promote.
    pub fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may become, in the order the move generator offers them.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Uppercase letter used in move tokens and letter rendering.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Letter form: uppercase for White, lowercase for Black.
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Unicode chess glyph.
    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

/// A board coordinate. Index layout is `rank * 8 + file`, so a1 = 0 and h8 = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Square at `file`/`rank` (both 0-based), or `None` off the board.
    pub fn new(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank as u8) * 8 + (file as u8)))
        } else {
            None
        }
    }

    /// All 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
    pub fn file(self) -> i8 {
        (self.0 % 8) as i8
    }
    pub fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }

    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::new(self.file() + df, self.rank() + dr)
    }

    /// Parses a two-character coordinate such as `e4`.
    pub fn parse(s: &str) -> Option<Square> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Square::new((f - b'a') as i8, (r - b'1') as i8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + (self.0 % 8)) as char;
        let rank = (b'1' + (self.0 / 8)) as char;
        write!(f, "{file}{rank}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    King,
    Queen,
}

/// Squares involved in one castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlePlan {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

impl CastleSide {
    pub fn plan(self, color: Color) -> CastlePlan {
        let r = color.back_rank();
        let at = |file: i8| Square(((r as u8) * 8) + file as u8);
        match self {
            CastleSide::King => CastlePlan {
                king_from: at(4),
                king_to: at(6),
                rook_from: at(7),
                rook_to: at(5),
            },
            CastleSide::Queen => CastlePlan {
                king_from: at(4),
                king_to: at(2),
                rook_from: at(0),
                rook_to: at(3),
            },
        }
    }

    /// Squares strictly between king and rook, which must all be empty.
    pub fn between(self, color: Color) -> Vec<Square> {
        let plan = self.plan(color);
        let (lo, hi) = match self {
            CastleSide::King => (plan.king_from.file() + 1, plan.rook_from.file()),
            CastleSide::Queen => (plan.rook_from.file() + 1, plan.king_from.file()),
        };
        (lo..hi)
            .filter_map(|file| Square::new(file, color.back_rank()))
            .collect()
    }

    /// Squares the king crosses or lands on; none may be attacked.
    pub fn transit(self, color: Color) -> [Square; 2] {
        let plan = self.plan(color);
        [plan.rook_to, plan.king_to]
    }
}

/// A structured move descriptor, produced by the notation parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Normal {
        from: Square,
        to: Square,
        promo: Option<PieceKind>,
    },
    Castle(CastleSide),
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move::Normal {
            from,
            to,
            promo: None,
        }
    }

    pub fn promote(from: Square, to: Square, kind: PieceKind) -> Self {
        Move::Normal {
            from,
            to,
            promo: Some(kind),
        }
    }

    pub fn castle(side: CastleSide) -> Self {
        Move::Castle(side)
    }

    pub fn is_castle(self) -> bool {
        matches!(self, Move::Castle(_))
    }

    pub fn promo(self) -> Option<PieceKind> {
        match self {
            Move::Normal { promo, .. } => promo,
            Move::Castle(_) => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Normal { from, to, promo } => {
                write!(f, "{from}{to}")?;
                if let Some(kind) = promo {
                    write!(f, "{}", kind.letter())?;
                }
                Ok(())
            }
            Move::Castle(CastleSide::King) => write!(f, "0-0"),
            Move::Castle(CastleSide::Queen) => write!(f, "0-0-0"),
        }
    }
}

/// How a board snapshot renders its pieces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    #[default]
    Unicode,
    Letters,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
