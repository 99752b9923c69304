//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the occupancy grid for debugging,
//! tests, and diagnostics in text environments. Together with
//! `Board::get_piece` this is the whole read surface an external UI needs.

use crate::board::board::Board;
use crate::board::board_types::{PieceKind, Player, Square};

/// Render the board to a Unicode string for terminal output, rank 7 at the
/// top so White plays "upward" as the coordinates suggest.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8).rev() {
        out.push(char::from(b'1' + row as u8));
        out.push(' ');

        for col in 0..8 {
            let square = Square::at(row, col);
            match board.get_piece(square).expect("square is on the board") {
                Some(piece) => out.push(piece_to_unicode(piece.player, piece.kind)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(player: Player, kind: PieceKind) -> char {
    match (player, kind) {
        (Player::White, PieceKind::Pawn) => '♙',
        (Player::White, PieceKind::Knight) => '♘',
        (Player::White, PieceKind::Bishop) => '♗',
        (Player::White, PieceKind::Rook) => '♖',
        (Player::White, PieceKind::Queen) => '♕',
        (Player::White, PieceKind::King) => '♔',
        (Player::Black, PieceKind::Pawn) => '♟',
        (Player::Black, PieceKind::Knight) => '♞',
        (Player::Black, PieceKind::Bishop) => '♝',
        (Player::Black, PieceKind::Rook) => '♜',
        (Player::Black, PieceKind::Queen) => '♛',
        (Player::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_renders_both_back_ranks() {
        let board = Board::at_starting_position();
        let rendered = render_board(&board);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[2], "7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 7");
        assert_eq!(lines[7], "2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ 2");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn empty_board_renders_only_dots() {
        let board = Board::empty();
        let rendered = render_board(&board);

        assert!(!rendered.contains('♙'));
        assert_eq!(rendered.matches('·').count(), 64);
    }
}
