//! Queen move generation: the union of rook and bishop rays.

use crate::board::board::Board;
use crate::board::board_types::{Piece, Square};
use crate::errors::ChessErrors;
use crate::moves::move_shared::{ray_moves, ROYAL_DIRECTIONS};

pub fn queen_moves(piece: &Piece, board: &Board) -> Result<Vec<Square>, ChessErrors> {
    let current = board.find_piece(piece)?;
    let mut moves = Vec::new();

    for direction in ROYAL_DIRECTIONS {
        ray_moves(board, current, direction, &mut moves)?;
    }

    Ok(moves)
}
