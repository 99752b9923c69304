//! Rook move generation: ray casting along ranks and files.

use crate::board::board::Board;
use crate::board::board_types::{Piece, Square};
use crate::errors::ChessErrors;
use crate::moves::move_shared::{ray_moves, ROOK_DIRECTIONS};

pub fn rook_moves(piece: &Piece, board: &Board) -> Result<Vec<Square>, ChessErrors> {
    let current = board.find_piece(piece)?;
    let mut moves = Vec::new();

    for direction in ROOK_DIRECTIONS {
        ray_moves(board, current, direction, &mut moves)?;
    }

    Ok(moves)
}
