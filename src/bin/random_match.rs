//! Random self-play demo.
//!
//! Plays a bounded number of plies from the starting position, choosing
//! uniformly among the side-to-move's generated moves, and renders the board
//! as the game goes. Exercises the whole public surface: placement lookup,
//! generation, application, promotion, and en-passant bookkeeping.

use rand::prelude::IndexedRandom;

use damson_chess::board::board::Board;
use damson_chess::board::board_types::{MoveOutcome, Square};
use damson_chess::errors::ChessErrors;
use damson_chess::moves::available_moves::available_moves;
use damson_chess::utils::render_board::render_board;

const MAX_PLIES: usize = 80;
const RENDER_EVERY: usize = 20;

/// Every (from, to) pair the side to move can play right now.
fn collect_moves(board: &Board) -> Result<Vec<(Square, Square)>, ChessErrors> {
    let mut all_moves = Vec::new();

    for row in 0..8 {
        for col in 0..8 {
            let from = Square::at(row, col);
            if let Some(piece) = board.get_piece(from)? {
                if piece.player == board.current_player {
                    for to in available_moves(&piece, board)? {
                        all_moves.push((from, to));
                    }
                }
            }
        }
    }

    Ok(all_moves)
}

fn main() -> Result<(), ChessErrors> {
    let mut board = Board::at_starting_position();
    let mut rng = rand::rng();

    println!("{}", render_board(&board));

    for ply in 1..=MAX_PLIES {
        let candidates = collect_moves(&board)?;
        let Some(&(from, to)) = candidates.choose(&mut rng) else {
            println!("no moves available for {:?} at ply {ply}", board.current_player);
            break;
        };

        let outcome = board.move_piece(from, to)?;
        if outcome != MoveOutcome::Applied {
            println!("move ({from:?} -> {to:?}) unexpectedly rejected: {outcome:?}");
            break;
        }

        if ply % RENDER_EVERY == 0 {
            println!("after ply {ply}:");
            println!("{}", render_board(&board));
        }
    }

    println!("final position:");
    println!("{}", render_board(&board));
    Ok(())
}
