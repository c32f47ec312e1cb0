//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth. The counts
//! here are internal-consistency oracles for this variant's generator,
//! not canonical chess perft values: castling and check-exposure
//! legality are deliberately absent from the rules.

use crate::Board;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.all_moves(Some(board.side_to_move()));

    if depth == 1 {
        return moves.iter().map(|(_, set)| set.len() as u64).sum();
    }

    let mut nodes = 0u64;
    for (from, set) in moves {
        for to in set.iter() {
            let mut next = board.clone();
            next.move_piece(from, to)
                .expect("all_moves returns occupied sources");
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}

/// Perft with divide - shows the node count below each first move.
/// Useful for pinpointing which move's subtree disagrees.
pub fn perft_divide(board: &Board, depth: u32) -> Vec<(String, u64)> {
    let moves = board.all_moves(Some(board.side_to_move()));
    let mut results = Vec::new();

    for (from, set) in moves {
        for to in set.iter() {
            let mut next = board.clone();
            next.move_piece(from, to)
                .expect("all_moves returns occupied sources");
            let nodes = if depth > 1 {
                perft(&next, depth - 1)
            } else {
                1
            };
            results.push((format!("{}{}", from, to), nodes));
        }
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_startpos_depth_0() {
        let board = Board::startpos();
        assert_eq!(perft(&board, 0), 1);
    }

    #[test]
    fn perft_startpos_depth_1() {
        // 16 pawn moves and 4 knight moves; the kings are boxed in
        let board = Board::startpos();
        assert_eq!(perft(&board, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        // No first move by White can interfere with any of Black's 20
        // replies, so the count is exactly 20 * 20.
        let board = Board::startpos();
        assert_eq!(perft(&board, 2), 400);
    }

    #[test]
    fn perft_lone_rooks() {
        // White rook d5, black rook g1, no shared line.
        let board = Board::from_fen("8/8/8/3R4/8/8/8/6r1 w - - 0 1").unwrap();
        assert_eq!(perft(&board, 1), 14);
        // After Rd1 or Rg5 the white rook shortens the black rook's
        // ray to 11 replies; the other 12 moves leave all 14.
        assert_eq!(perft(&board, 2), 12 * 14 + 2 * 11);
    }

    #[test]
    fn perft_divide_sums_to_perft() {
        let board = Board::startpos();
        for depth in 1..=3 {
            let divide = perft_divide(&board, depth);
            let total: u64 = divide.iter().map(|(_, n)| n).sum();
            assert_eq!(total, perft(&board, depth));
        }
    }

    #[test]
    fn perft_divide_depth_1_lists_every_move() {
        let board = Board::startpos();
        let divide = perft_divide(&board, 1);
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, n)| *n == 1));
        // sorted by move text
        assert_eq!(divide[0].0, "a2a3");
    }
}
