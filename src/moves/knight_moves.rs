//! Knight move generation: eight fixed L-shaped leaps.

use crate::board::board::Board;
use crate::board::board_types::{Piece, Square};
use crate::errors::ChessErrors;
use crate::moves::move_shared::{leap_move, KNIGHT_OFFSETS};

pub fn knight_moves(piece: &Piece, board: &Board) -> Result<Vec<Square>, ChessErrors> {
    let current = board.find_piece(piece)?;
    let mut moves = Vec::new();

    for offset in KNIGHT_OFFSETS {
        leap_move(board, current, offset, &mut moves)?;
    }

    Ok(moves)
}
