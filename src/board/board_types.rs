//! Core value types for the board model.
//!
//! Squares, players, piece kinds, and the piece record itself. Everything here
//! is a small `Copy` value with no behavior beyond construction, coordinate
//! arithmetic, and identity. Nothing in this module touches a `Board`.

use std::sync::atomic::{AtomicU32, Ordering};

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Forward direction of this player's pawns, as a row delta.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Rank a pawn of this player starts on.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// Rank a pawn of this player promotes on.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }
}

/// A (row, col) board coordinate.
///
/// Off-board values are legal: `at` and `translate_by` never fail, so ray
/// walking and offset arithmetic can step past the edge freely. Validity is
/// checked explicitly with `is_on_board` before any board access, never
/// implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn at(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Pure translation by a (d_row, d_col) vector. The result may be off
    /// the board.
    #[inline]
    pub const fn translate_by(self, vector: (i8, i8)) -> Self {
        Square {
            row: self.row + vector.0,
            col: self.col + vector.1,
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row <= 7 && self.col >= 0 && self.col <= 7
    }
}

/// Piece kind (owner is represented separately on the piece record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// True for the kinds a pawn may promote to.
    #[inline]
    pub const fn is_promotable(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// Identity of a single constructed piece.
///
/// Two pieces of the same kind and player are still distinct objects sitting
/// on distinct squares; `Board::find_piece` locates a piece by this id, not by
/// kind/player equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceId(u32);

static NEXT_PIECE_ID: AtomicU32 = AtomicU32::new(0);

impl PieceId {
    fn fresh() -> Self {
        PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A chess piece: an identity, a kind, and an owning player.
///
/// A piece does not know its own square; location is board-derived truth,
/// recovered through `Board::find_piece`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub player: Player,
}

impl Piece {
    pub fn new(kind: PieceKind, player: Player) -> Self {
        Piece {
            id: PieceId::fresh(),
            kind,
            player,
        }
    }
}

/// Result of a move request that did not error.
///
/// A rejected request leaves the board completely untouched; the turn does
/// not flip and the en-passant marker keeps its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; occupancy, en-passant marker, and turn updated.
    Applied,
    /// The from-square holds no piece.
    RejectedEmptySquare,
    /// The from-square holds a piece of the player not to move.
    RejectedNotYourTurn,
}
