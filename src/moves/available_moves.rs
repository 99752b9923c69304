//! Dispatch from a piece to its move generator.
//!
//! Generation is a pure query: a piece locates itself on the board snapshot
//! (by identity), then enumerates geometrically and occupancy-valid candidate
//! squares. Whether a move would leave the mover's king in check is not
//! considered here.

use crate::board::board::Board;
use crate::board::board_types::{Piece, PieceKind, Square};
use crate::errors::ChessErrors;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// All squares the given piece may move to on this board.
///
/// Fails with `PieceNotOnBoard` when the piece is absent; never fabricates a
/// location. The returned order is the generator's insertion order and
/// carries no meaning beyond determinism.
pub fn available_moves(piece: &Piece, board: &Board) -> Result<Vec<Square>, ChessErrors> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, board),
        PieceKind::Knight => knight_moves(piece, board),
        PieceKind::Bishop => bishop_moves(piece, board),
        PieceKind::Rook => rook_moves(piece, board),
        PieceKind::Queen => queen_moves(piece, board),
        PieceKind::King => king_moves(piece, board),
    }
}

impl Piece {
    /// Method form of [`available_moves`].
    pub fn get_available_moves(&self, board: &Board) -> Result<Vec<Square>, ChessErrors> {
        available_moves(self, board)
    }

    /// This piece's current square, recovered from the board.
    pub fn position(&self, board: &Board) -> Result<Square, ChessErrors> {
        board.find_piece(self)
    }
}
