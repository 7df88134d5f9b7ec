//! Perft: exhaustive legal-move tree counting.
//!
//! Counts leaf nodes of the legal-move tree to a fixed depth. The known
//! counts from the starting position (20, 400, 8902, ...) make this the
//! standard correctness check for the move generator, exercising every rule
//! interaction at once.

use crate::apply_move_to_game::apply_move_to_game;
use crate::chess_errors::ChessErrors;
use crate::game_state::GameState;
use crate::generate_legal_moves::generate_all_moves;

/// Counts the positions reachable in exactly `depth` plies of legal play.
pub fn perft(game: &GameState, depth: u8) -> Result<usize, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }
    let legal_moves = generate_all_moves(game)?;
    if depth == 1 {
        return Ok(legal_moves.len());
    }
    let mut nodes = 0;
    for chess_move in &legal_moves {
        let future = apply_move_to_game(chess_move, game)?;
        nodes += perft(&future, depth - 1)?;
    }
    Ok(nodes)
}
