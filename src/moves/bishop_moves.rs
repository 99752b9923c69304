//! Bishop move generation: ray casting along the four diagonals.

use crate::board::board::Board;
use crate::board::board_types::{Piece, Square};
use crate::errors::ChessErrors;
use crate::moves::move_shared::{ray_moves, BISHOP_DIRECTIONS};

pub fn bishop_moves(piece: &Piece, board: &Board) -> Result<Vec<Square>, ChessErrors> {
    let current = board.find_piece(piece)?;
    let mut moves = Vec::new();

    for direction in BISHOP_DIRECTIONS {
        ray_moves(board, current, direction, &mut moves)?;
    }

    Ok(moves)
}
