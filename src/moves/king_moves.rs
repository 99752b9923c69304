//! King move generation: one step in each of the eight directions.
//!
//! Castling and moving-into-check filtering are out of scope; the king uses
//! the same occupancy rule as every other leap.

use crate::board::board::Board;
use crate::board::board_types::{Piece, Square};
use crate::errors::ChessErrors;
use crate::moves::move_shared::{leap_move, ROYAL_DIRECTIONS};

pub fn king_moves(piece: &Piece, board: &Board) -> Result<Vec<Square>, ChessErrors> {
    let current = board.find_piece(piece)?;
    let mut moves = Vec::new();

    for direction in ROYAL_DIRECTIONS {
        leap_move(board, current, direction, &mut moves)?;
    }

    Ok(moves)
}
