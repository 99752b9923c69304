//! The 8x8 mailbox board.
//!
//! `Board` is the central model: an 8x8 grid of optional piece occupants plus
//! the side to move and the en-passant marker. It is a "dumb" board — it will
//! relocate any piece of the active player wherever it is told to, with no
//! geometric legality checks. Move generation is a separate pure query over a
//! board snapshot; `move_piece_with_promotion` is the only mutator.

use crate::board::board_types::{MoveOutcome, Piece, PieceKind, Player, Square};
use crate::errors::ChessErrors;
use crate::moves::pawn_moves::is_en_passant_capture;

pub const BOARD_SIZE: usize = 8;

/// Back-rank layout, queenside to kingside.
const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A chess board: occupancy grid, side to move, and en-passant marker.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: Player,
    /// Square a pawn double-stepped onto last ply, if any. Cleared or reset
    /// on every applied move, so it is never stale beyond one ply.
    pub en_passant_square: Option<Square>,
}

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            current_player: Player::White,
            en_passant_square: None,
        }
    }

    /// Standard starting layout: pawns on ranks 1 and 6, back ranks filled
    /// queenside to kingside, White to move.
    pub fn at_starting_position() -> Self {
        let mut board = Board::empty();

        for col in 0..BOARD_SIZE {
            board.grid[1][col] = Some(Piece::new(PieceKind::Pawn, Player::White));
            board.grid[6][col] = Some(Piece::new(PieceKind::Pawn, Player::Black));
            board.grid[0][col] = Some(Piece::new(BACK_RANK[col], Player::White));
            board.grid[7][col] = Some(Piece::new(BACK_RANK[col], Player::Black));
        }

        board
    }

    #[inline]
    fn index(square: Square) -> Result<(usize, usize), ChessErrors> {
        if square.is_on_board() {
            Ok((square.row as usize, square.col as usize))
        } else {
            Err(ChessErrors::OutOfBounds(square))
        }
    }

    /// Unconditionally overwrites the occupant of the given square.
    pub fn set_piece(
        &mut self,
        square: Square,
        occupant: Option<Piece>,
    ) -> Result<(), ChessErrors> {
        let (row, col) = Self::index(square)?;
        self.grid[row][col] = occupant;
        Ok(())
    }

    pub fn get_piece(&self, square: Square) -> Result<Option<Piece>, ChessErrors> {
        let (row, col) = Self::index(square)?;
        Ok(self.grid[row][col])
    }

    pub fn is_square_empty(&self, square: Square) -> Result<bool, ChessErrors> {
        Ok(self.get_piece(square)?.is_none())
    }

    /// Locates a piece by identity with an exhaustive scan of all 64 squares.
    ///
    /// O(64) on purpose: pieces do not cache their square, so placement stays
    /// decoupled from the piece objects at the cost of this lookup.
    pub fn find_piece(&self, piece_to_find: &Piece) -> Result<Square, ChessErrors> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(occupant) = &self.grid[row][col] {
                    if occupant.id == piece_to_find.id {
                        return Ok(Square::at(row as i8, col as i8));
                    }
                }
            }
        }
        Err(ChessErrors::PieceNotOnBoard(piece_to_find.id))
    }

    /// True iff both squares are occupied and the occupants belong to
    /// different players. Asking about an empty square is an error.
    pub fn capture_possible(&self, from: Square, to: Square) -> Result<bool, ChessErrors> {
        let mover = self
            .get_piece(from)?
            .ok_or(ChessErrors::EmptySquare(from))?;
        let target = self.get_piece(to)?.ok_or(ChessErrors::EmptySquare(to))?;
        Ok(mover.player != target.player)
    }

    /// Applies a move with automatic promotion to queen.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<MoveOutcome, ChessErrors> {
        self.move_piece_with_promotion(from, to, PieceKind::Queen)
    }

    /// The sole mutator: relocates the occupant of `from` to `to`, resolving
    /// pawn promotion and en-passant capture, then flips the turn.
    ///
    /// `promotion` is consulted only when a pawn reaches its own promotion
    /// rank (row 7 for White, row 0 for Black); it must be one of queen,
    /// rook, bishop, or knight. A request moving no piece, or moving a piece
    /// of the player not to move, is rejected without touching any state.
    pub fn move_piece_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Result<MoveOutcome, ChessErrors> {
        if !promotion.is_promotable() {
            return Err(ChessErrors::InvalidPromotionPiece(promotion));
        }

        let Some(moving_piece) = self.get_piece(from)? else {
            return Ok(MoveOutcome::RejectedEmptySquare);
        };
        if moving_piece.player != self.current_player {
            return Ok(MoveOutcome::RejectedNotYourTurn);
        }
        let destination_was_empty = self.is_square_empty(to)?;

        let is_pawn = moving_piece.kind == PieceKind::Pawn;

        // Promotion replaces the pawn with a freshly constructed piece; the
        // pawn object is discarded.
        let placed_piece = if is_pawn && to.row == moving_piece.player.promotion_row() {
            Piece::new(promotion, moving_piece.player)
        } else {
            moving_piece
        };

        self.set_piece(to, Some(placed_piece))?;
        self.set_piece(from, None)?;

        // En-passant capture: the captured pawn sits on the marker square
        // beside the destination, not on the destination itself. A normal
        // capture landing behind the marker is not an en-passant capture.
        if is_pawn && destination_was_empty {
            if let Some(marker) = self.en_passant_square {
                if is_en_passant_capture(moving_piece.player, from, to, marker) {
                    self.set_piece(marker, None)?;
                }
            }
        }

        // A double step arms the marker for exactly one ply.
        self.en_passant_square = if is_pawn && (to.row - from.row).abs() == 2 {
            Some(to)
        } else {
            None
        };

        self.current_player = self.current_player.opponent();
        Ok(MoveOutcome::Applied)
    }
}
