//! Whole-game scenarios driven through the move-token interface.

use chess_rules::{
    CastleSide, Color, IllegalMove, LegalityResult, Piece, PieceKind, Position, Rejection, Square,
    TerminalState, is_in_check, legal_moves, new_game, submit_move, terminal_state,
};

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

fn play(pos: &mut Position, tokens: &[&str]) {
    for token in tokens {
        pos.submit(token)
            .unwrap_or_else(|e| panic!("{token} rejected: {e}"));
    }
}

fn piece(color: Color, kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(color, kind))
}

// =============================================================================
// Checkmates
// =============================================================================

#[test]
fn test_fools_mate() {
    let mut pos = new_game();
    play(&mut pos, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(is_in_check(&pos));
    assert!(legal_moves(&pos).is_empty());
    assert_eq!(
        terminal_state(&pos),
        TerminalState::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(terminal_state(&pos).to_string(), "Checkmate! Black won!");
}

#[test]
fn test_scholars_mate() {
    let mut pos = new_game();
    play(
        &mut pos,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert_eq!(
        terminal_state(&pos),
        TerminalState::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_check_that_can_be_answered_is_not_mate() {
    let mut pos = new_game();
    play(&mut pos, &["e2e4", "e7e5", "d1h5", "b8c6", "h5f7"]);
    // Unprotected queen: the king takes back.
    assert!(is_in_check(&pos));
    assert_eq!(terminal_state(&pos), TerminalState::Ongoing);
    play(&mut pos, &["e8f7"]);
    assert!(!is_in_check(&pos));
}

// =============================================================================
// Castling
// =============================================================================

#[test]
fn test_castle_both_sides_in_play() {
    let mut pos = new_game();
    play(
        &mut pos,
        &[
            "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "d7d6", "0-0", "c8e6", "d2d3", "d8d7",
        ],
    );
    assert_eq!(pos.piece_at(sq("g1")), piece(Color::White, PieceKind::King));
    assert_eq!(pos.piece_at(sq("f1")), piece(Color::White, PieceKind::Rook));

    play(&mut pos, &["b1c3", "0-0-0"]);
    assert_eq!(pos.piece_at(sq("c8")), piece(Color::Black, PieceKind::King));
    assert_eq!(pos.piece_at(sq("d8")), piece(Color::Black, PieceKind::Rook));
    assert!(!pos.castling().get(Color::Black, CastleSide::King));
}

#[test]
fn test_castling_refused_after_king_returns_home() {
    let mut pos = new_game();
    play(
        &mut pos,
        &["e2e4", "e7e5", "g1f3", "g8f6", "f1e2", "f8e7", "e1f1", "e8f8", "f1e1", "f8e8"],
    );
    assert_eq!(
        pos.submit("0-0"),
        Err(Rejection::Illegal(IllegalMove::CastlingRightLost))
    );
}

#[test]
fn test_castling_refused_while_in_check() {
    let mut pos = new_game();
    play(
        &mut pos,
        &["e2e4", "e7e5", "g1f3", "g8f6", "f1c4", "b8c6", "d2d3", "f8b4"],
    );
    assert!(is_in_check(&pos));
    assert_eq!(
        pos.submit("0-0"),
        Err(Rejection::Illegal(IllegalMove::CastlingOutOfCheck))
    );
}

#[test]
fn test_castling_refused_through_attacked_square() {
    let mut pos = new_game();
    play(
        &mut pos,
        &["e2e4", "b7b6", "g2g3", "c8a6", "g1f3", "e7e6", "f1h3", "e6e5"],
    );
    // The a6 bishop sweeps down to f1.
    assert!(!is_in_check(&pos));
    assert_eq!(
        pos.submit("0-0"),
        Err(Rejection::Illegal(IllegalMove::CastlingThroughCheck))
    );
}

// =============================================================================
// En passant
// =============================================================================

#[test]
fn test_en_passant_capture_from_either_side() {
    for capturer in ["d4", "f4"] {
        let mut pos = new_game();
        let lead_in: &[&str] = if capturer == "d4" {
            &["a2a3", "d7d5", "a3a4", "d5d4"]
        } else {
            &["a2a3", "f7f5", "a3a4", "f5f4"]
        };
        play(&mut pos, lead_in);
        play(&mut pos, &["e2e4"]);
        assert_eq!(pos.en_passant(), Some(sq("e3")));

        let token = format!("{capturer}e3");
        pos.submit(&token).unwrap();
        assert_eq!(pos.piece_at(sq("e3")), piece(Color::Black, PieceKind::Pawn));
        assert_eq!(pos.piece_at(sq("e4")), None, "{capturer}");
        assert_eq!(pos.halfmove_clock(), 0);
    }
}

#[test]
fn test_en_passant_lapses_after_intervening_move() {
    let mut pos = new_game();
    play(&mut pos, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4", "h7h6", "h2h3"]);
    assert_eq!(
        pos.submit("d4e3"),
        Err(Rejection::Illegal(IllegalMove::NothingToCapture))
    );
}

#[test]
fn test_en_passant_needs_a_double_step() {
    // Two single steps land the pawn in the same spot, but no capture is allowed.
    let mut pos = new_game();
    play(
        &mut pos,
        &["a2a3", "d7d5", "a3a4", "d5d4", "e2e3", "h7h6", "e3e4"],
    );
    assert_eq!(pos.en_passant(), None);
    assert!(pos.submit("d4e3").is_err());
}

// =============================================================================
// Promotion
// =============================================================================

#[test]
fn test_underpromotion_in_play() {
    let mut pos = new_game();
    play(
        &mut pos,
        &[
            "h2h4", "g7g5", "h4g5", "h7h6", "g5h6", "g8f6", "h6h7", "f6g8", "h7g8N",
        ],
    );
    assert_eq!(pos.piece_at(sq("g8")), piece(Color::White, PieceKind::Knight));
    assert_eq!(pos.board().material(Color::White).count(PieceKind::Pawn), 7);
}

#[test]
fn test_promotion_without_letter_is_rejected() {
    let mut pos = new_game();
    play(
        &mut pos,
        &["h2h4", "g7g5", "h4g5", "h7h6", "g5h6", "g8f6", "h6h7", "f6g8"],
    );
    assert_eq!(
        pos.submit("h7g8"),
        Err(Rejection::Illegal(IllegalMove::MissingPromotion))
    );
    assert!(pos.submit("h7g8Q").is_ok());
}

// =============================================================================
// Driver-facing helpers
// =============================================================================

#[test]
fn test_submit_move_chain() {
    let mut pos = new_game();
    for token in ["e2e4", "e7e5", "g1f3"] {
        pos = match submit_move(&pos, token) {
            LegalityResult::Accepted(next) => next,
            LegalityResult::Rejected(reason) => panic!("{token}: {reason}"),
        };
    }
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.fullmove_number(), 2);
    assert!(!submit_move(&pos, "e5e4").is_accepted());
}
