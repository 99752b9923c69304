//! Helpers shared by the per-piece move generators.
//!
//! Two movement shapes cover every piece except the pawn: ray casting for the
//! sliders (bishop, rook, queen) and single-offset leaps for the knight and
//! king. Direction tables live here so the per-piece modules stay declarative.

use crate::board::board::Board;
use crate::board::board_types::Square;
use crate::errors::ChessErrors;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// All eight compass directions: queen rays and king steps.
pub const ROYAL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
];

/// Walks outward from `start` along `direction`, appending candidates.
///
/// An empty square is appended and the walk continues; an enemy-occupied
/// square is appended and ends the ray; a friendly piece or the board edge
/// ends the ray without appending.
pub fn ray_moves(
    board: &Board,
    start: Square,
    direction: (i8, i8),
    moves: &mut Vec<Square>,
) -> Result<(), ChessErrors> {
    let mut distance = 1;
    loop {
        let candidate = start.translate_by((direction.0 * distance, direction.1 * distance));
        if !candidate.is_on_board() {
            return Ok(());
        }
        if board.is_square_empty(candidate)? {
            moves.push(candidate);
            distance += 1;
        } else {
            if board.capture_possible(start, candidate)? {
                moves.push(candidate);
            }
            return Ok(());
        }
    }
}

/// Appends the single square at `offset` from `start` if it is on the board
/// and either empty or enemy-occupied. Friendly occupancy blocks exactly that
/// one square.
pub fn leap_move(
    board: &Board,
    start: Square,
    offset: (i8, i8),
    moves: &mut Vec<Square>,
) -> Result<(), ChessErrors> {
    let candidate = start.translate_by(offset);
    if !candidate.is_on_board() {
        return Ok(());
    }
    if board.is_square_empty(candidate)? || board.capture_possible(start, candidate)? {
        moves.push(candidate);
    }
    Ok(())
}
