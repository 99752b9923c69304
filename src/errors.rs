//! Errors used throughout the rules library.
//!
//! This module defines the canonical error type returned by the board and the
//! move generators. The enum `ChessErrors` is used as the single error type
//! across the crate to simplify propagation and matching. Each variant carries
//! contextual information where appropriate to aid diagnostics.

use crate::board::board_types::{PieceId, PieceKind, Square};

/// Unified error type for the rules library.
///
/// Every variant corresponds to a specific, identifiable failure mode that can
/// occur while querying or mutating a `Board`. Rejected-but-legal requests
/// (moving from an empty square, moving out of turn) are NOT errors; they are
/// reported through `MoveOutcome` so callers can tell "applied" from
/// "rejected" without treating either as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessErrors {
    /// `find_piece` was asked to locate a piece that is not on the board.
    ///
    /// Payload: the id of the missing piece.
    PieceNotOnBoard(PieceId),

    /// A board access used a square outside the 8x8 grid.
    ///
    /// Payload: the offending square.
    OutOfBounds(Square),

    /// `capture_possible` was asked about a square with no occupant.
    ///
    /// Payload: the empty square's location.
    EmptySquare(Square),

    /// A pawn promotion requested a piece kind that pawns cannot promote to
    /// (anything other than queen, rook, bishop, or knight).
    ///
    /// Payload: the rejected piece kind.
    InvalidPromotionPiece(PieceKind),
}
