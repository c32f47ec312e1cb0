//! Cross-module scenarios for the duck-chess rules engine: full games,
//! en-passant timing, king safety, and serialization round trips.

use duck_core::{Color, FenParser, Piece, PieceKind, Square};
use duck_engine::perft::{perft, perft_divide};
use duck_engine::{Board, GameStatus};
use proptest::prelude::*;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

/// Builds a placement field with single pieces dropped on given squares,
/// spelling every empty square as its own '1' digit.
fn placement(pieces: &[(Square, char)]) -> String {
    let mut cells = ['1'; 64];
    for &(square, symbol) in pieces {
        cells[square.index()] = symbol;
    }
    cells
        .chunks(8)
        .map(|rank| rank.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}

fn board_with(pieces: &[(Square, char)], side: char) -> Board {
    let fen = format!("{} {} - - 0 1", placement(pieces), side);
    Board::from_fen(&fen).unwrap()
}

#[test]
fn startpos_roundtrip_preserves_all_fields() {
    let board = Board::startpos();
    assert_eq!(board.to_fen(), FenParser::STARTPOS);
}

#[test]
fn game_until_king_capture() {
    // 1. e4 e5 2. Qh5 Nc6 3. Qxf7 -- no check rules stop Black from
    // ignoring the queen -- 3... Nf6 4. Qxe8 wins by king capture.
    let mut board = Board::startpos();
    board.move_piece(sq("e2"), sq("e4")).unwrap();
    board.move_piece(sq("e7"), sq("e5")).unwrap();
    board.move_piece(sq("d1"), sq("h5")).unwrap();
    board.move_piece(sq("b8"), sq("c6")).unwrap();
    board.move_piece(sq("h5"), sq("f7")).unwrap();
    assert_eq!(board.status(), GameStatus::Ongoing);

    board.move_piece(sq("g8"), sq("f6")).unwrap();
    assert!(board.moves_from(sq("f7")).contains(sq("e8")));
    board.move_piece(sq("f7"), sq("e8")).unwrap();

    assert_eq!(board.status(), GameStatus::Win);
    assert_eq!(board.winner(), Some(Color::White));
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn en_passant_window_closes_after_one_ply() {
    // White double-pushes past a black pawn; the capture is available
    // on the very next ply and on no later one.
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/8/3p4/8/PPPPPPPP/RNBQKBNR w KQkq - 0 3").unwrap();
    board.move_piece(sq("e2"), sq("e4")).unwrap();
    assert!(board.moves_from(sq("d4")).contains(sq("e3")));

    // Black declines; two plies after the push the target is gone
    // from every generated move list.
    board.move_piece(sq("a7"), sq("a6")).unwrap();
    board.move_piece(sq("a2"), sq("a3")).unwrap();
    assert_eq!(board.en_passant_target(), None);
    for (_, set) in board.all_moves(None) {
        assert!(!set.contains(sq("e3")));
    }
}

#[test]
fn black_push_keeps_field_one_ply_longer() {
    // The reference gives a Black double push a TTL of 2, so the field
    // still names the target after White's reply.
    let mut board =
        Board::from_fen("rnbqkbnr/pppppppp/8/3P4/8/8/PPP1PPPP/RNBQKBNR b KQkq - 0 2").unwrap();
    board.move_piece(sq("e7"), sq("e5")).unwrap();
    assert!(board.moves_from(sq("d5")).contains(sq("e6")));

    board.move_piece(sq("a2"), sq("a3")).unwrap();
    assert_eq!(board.en_passant_target(), Some(sq("e6")));

    board.move_piece(sq("a7"), sq("a6")).unwrap();
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn king_moves_never_enter_attacked_squares() {
    let positions = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "8/8/3r4/8/8/3K4/8/8 w - - 0 1",
        "4k3/8/8/2q5/8/8/5N2/4K3 w - - 0 1",
        "8/2b5/8/8/8/5k2/8/R3K3 b - - 0 1",
    ];
    for fen in positions {
        let board = Board::from_fen(fen).unwrap();
        let king = Piece::new(PieceKind::King, board.side_to_move());
        let Some(from) = board.find_piece(king) else {
            continue;
        };
        for to in board.moves_from(from).iter() {
            assert!(
                !board.attacked_squares().contains(&to),
                "{}: king move {} lands on an attacked square",
                fen,
                to
            );
        }
    }
}

#[test]
fn duck_blocks_rays_and_never_moves() {
    let board =
        Board::from_fen("4k3/8/8/3D4/8/3R4/8/4K3 w - - 0 1").unwrap();
    // the rook's file ray stops at (and includes) the duck
    let rook = board.moves_from(sq("d3"));
    assert!(rook.contains(sq("d4")));
    assert!(rook.contains(sq("d5")));
    assert!(!rook.contains(sq("d6")));
    // the duck itself never generates anything
    assert!(board.moves_from(sq("d5")).is_empty());
}

#[test]
fn perft_agrees_with_per_piece_sums() {
    // Depth-1 perft must equal summing the per-square queries a
    // renderer would issue, for any reachable position.
    let mut board = Board::startpos();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")] {
        let tally: u64 = board
            .all_moves(Some(board.side_to_move()))
            .iter()
            .map(|(_, set)| set.len() as u64)
            .sum();
        assert_eq!(perft(&board, 1), tally);

        let divide = perft_divide(&board, 2);
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&board, 2));

        board.move_piece(sq(from), sq(to)).unwrap();
    }
}

#[test]
fn single_digit_placement_spelling_is_accepted() {
    // "11111111" is a legal spelling of an empty rank; the encoder
    // normalizes it back to "8".
    let board = board_with(&[(sq("d5"), 'R')], 'w');
    assert_eq!(
        board.to_fen(),
        "8/8/8/3R4/8/8/8/8 w KQkq - 0 1"
    );
}

proptest! {
    #[test]
    fn lone_rook_always_has_14_destinations(x in 0u8..8, y in 0u8..8) {
        let from = Square::from_xy(x, y).unwrap();
        let board = board_with(&[(from, 'R')], 'w');
        prop_assert_eq!(board.moves_from(from).len(), 14);
    }

    #[test]
    fn lone_bishop_mobility_matches_diagonal_lengths(x in 0u8..8, y in 0u8..8) {
        let from = Square::from_xy(x, y).unwrap();
        let board = board_with(&[(from, 'B')], 'w');
        let (x, y) = (x as usize, y as usize);
        let expected = x.min(y) + (7 - x).min(7 - y) + x.min(7 - y) + (7 - x).min(y);
        prop_assert_eq!(board.moves_from(from).len(), expected);
    }

    #[test]
    fn lone_queen_is_rook_plus_bishop(x in 0u8..8, y in 0u8..8) {
        let from = Square::from_xy(x, y).unwrap();
        let rook = board_with(&[(from, 'R')], 'w').moves_from(from).len();
        let bishop = board_with(&[(from, 'B')], 'w').moves_from(from).len();
        let queen = board_with(&[(from, 'Q')], 'w').moves_from(from).len();
        prop_assert_eq!(queen, rook + bishop);
    }

    #[test]
    fn algebraic_roundtrip(x in 0u8..8, y in 0u8..8) {
        let square = Square::from_xy(x, y).unwrap();
        prop_assert_eq!(Square::from_algebraic(&square.to_algebraic()), Some(square));
    }
}
