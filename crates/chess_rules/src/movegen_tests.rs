use super::*;
use crate::board::CastlingRights;

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

#[test]
fn test_startpos_has_twenty_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 20);
    assert!(moves.contains(&Move::new(sq("e2"), sq("e4"))));
    assert!(moves.contains(&Move::new(sq("b1"), sq("a3"))));
    assert!(!moves.iter().any(|m| m.is_castle()));
}

#[test]
fn test_promotions_are_spelled_out() {
    let pos = Position::setup()
        .place(sq("e1"), Color::White, PieceKind::King)
        .place(sq("h6"), Color::Black, PieceKind::King)
        .place(sq("a7"), Color::White, PieceKind::Pawn)
        .build()
        .unwrap();
    let from_a7: Vec<Move> = legal_moves(&pos)
        .into_iter()
        .filter(|m| matches!(m, Move::Normal { from, .. } if *from == sq("a7")))
        .collect();
    assert_eq!(from_a7.len(), 4);
    for kind in PieceKind::PROMOTIONS {
        assert!(from_a7.contains(&Move::promote(sq("a7"), sq("a8"), kind)));
    }
}

#[test]
fn test_castles_listed_when_available() {
    let pos = Position::setup()
        .place(sq("e1"), Color::White, PieceKind::King)
        .place(sq("a1"), Color::White, PieceKind::Rook)
        .place(sq("h1"), Color::White, PieceKind::Rook)
        .place(sq("e8"), Color::Black, PieceKind::King)
        .castling(CastlingRights::all())
        .build()
        .unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.contains(&Move::castle(CastleSide::King)));
    assert!(moves.contains(&Move::castle(CastleSide::Queen)));
    // Castling is never also reachable as a two-square king step
    assert!(!moves.contains(&Move::new(sq("e1"), sq("g1"))));
}

#[test]
fn test_stalemated_side_has_no_moves() {
    let pos = Position::setup()
        .place(sq("e1"), Color::White, PieceKind::King)
        .place(sq("b6"), Color::White, PieceKind::Queen)
        .place(sq("a8"), Color::Black, PieceKind::King)
        .side_to_move(Color::Black)
        .build()
        .unwrap();
    assert!(legal_moves(&pos).is_empty());
    assert!(!has_legal_move(&pos));
}

#[test]
fn test_every_generated_move_is_legal() {
    let mut pos = Position::startpos();
    for token in ["e2e4", "d7d5", "e4d5", "g8f6", "f1b5"] {
        pos.submit(token).unwrap();
    }
    let moves = legal_moves(&pos);
    assert!(!moves.is_empty());
    for mv in &moves {
        assert!(is_legal(&pos, *mv), "{mv}");
    }
    // Black is in check from b5; only answers to it are listed.
    assert!(pos.in_check(Color::Black));
    assert!(moves.contains(&Move::new(sq("c7"), sq("c6"))));
    assert!(!moves.contains(&Move::new(sq("a7"), sq("a6"))));
}

#[test]
fn test_buffer_is_cleared_between_calls() {
    let pos = Position::startpos();
    let mut buf = vec![Move::castle(CastleSide::King); 7];
    legal_moves_into(&pos, &mut buf);
    assert_eq!(buf.len(), 20);
    legal_moves_into(&pos, &mut buf);
    assert_eq!(buf.len(), 20);
}
