//! Pawn move generation.
//!
//! Pawns are the one piece whose captures and non-captures use different
//! geometry, and the one piece entangled with the board's en-passant marker,
//! so they get their own generator instead of the shared ray/leap helpers.
//!
//! Double-step policy: a pawn on its starting rank may advance two squares
//! only when BOTH the intermediate square and the destination are empty (the
//! strict chess rule).

use crate::board::board::Board;
use crate::board::board_types::{Piece, Player, Square};
use crate::errors::ChessErrors;

/// True iff a pawn of `player` moving `from` -> `to` captures en passant
/// against the given marker square (the square an enemy pawn just
/// double-stepped onto).
///
/// The capturing pawn stands beside the marked pawn and lands on the square
/// the marked pawn passed over; the marked pawn is removed from the marker
/// square, not from `to`.
pub fn is_en_passant_capture(player: Player, from: Square, to: Square, marker: Square) -> bool {
    from.row == marker.row
        && (from.col - marker.col).abs() == 1
        && to.col == marker.col
        && to.row == marker.row + player.pawn_direction()
}

pub fn pawn_moves(piece: &Piece, board: &Board) -> Result<Vec<Square>, ChessErrors> {
    let current = board.find_piece(piece)?;
    let direction = piece.player.pawn_direction();
    let mut moves = Vec::new();

    // Diagonal captures, queenside then kingside.
    for side in [-1, 1] {
        let candidate = current.translate_by((direction, side));
        if candidate.is_on_board()
            && !board.is_square_empty(candidate)?
            && board.capture_possible(current, candidate)?
        {
            moves.push(candidate);
        }
    }

    // En-passant capture target: the empty square behind an enemy pawn that
    // just double-stepped past this one.
    if let Some(marker) = board.en_passant_square {
        if let Some(marked_pawn) = board.get_piece(marker)? {
            if marked_pawn.player != piece.player {
                for side in [-1, 1] {
                    let candidate = current.translate_by((direction, side));
                    if candidate.is_on_board()
                        && is_en_passant_capture(piece.player, current, candidate, marker)
                        && board.is_square_empty(candidate)?
                    {
                        moves.push(candidate);
                    }
                }
            }
        }
    }

    let one_forward = current.translate_by((direction, 0));
    if one_forward.is_on_board() && board.is_square_empty(one_forward)? {
        if current.row == piece.player.pawn_start_row() {
            let two_forward = current.translate_by((2 * direction, 0));
            if board.is_square_empty(two_forward)? {
                moves.push(two_forward);
            }
        }
        moves.push(one_forward);
    }

    Ok(moves)
}
