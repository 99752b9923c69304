//! Crate root module declarations for the Damson Chess rules library.
//!
//! This file exposes all top-level subsystems (board model, per-piece move
//! generation, and utility helpers) so binaries, tests, and external tooling
//! can import stable module paths.

pub mod board {
    pub mod board;
    pub mod board_types;
}

pub mod moves {
    pub mod available_moves;
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod utils {
    pub mod render_board;
}

pub mod errors;
