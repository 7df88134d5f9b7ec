//! Legality filtering by simulate-and-reject.
//!
//! Every pseudo-legal move is applied to a full copy of the state; the move
//! is kept only if the mover's king is not attacked in the resulting
//! position. This is the single source of truth for legality; no pin table
//! is maintained.

use crate::{
    apply_move_to_game::apply_move_to_game, board_location::BoardLocation,
    chess_errors::ChessErrors, game_state::GameState,
    generate_pseudo_moves::generate_pseudo_moves, inspect_check::is_king_under_check,
    move_description::MoveDescription,
};

/// All legal moves for the piece on `location`. An empty square yields an
/// empty list; whose turn it is does not matter here, the caller filters.
pub fn generate_legal_moves(
    game: &GameState,
    location: BoardLocation,
) -> Result<Vec<MoveDescription>, ChessErrors> {
    let team = match game.piece_register.view(location) {
        Some(piece) => piece.team,
        None => return Ok(vec![]),
    };
    let mut legal = vec![];
    for candidate in generate_pseudo_moves(game, location, false) {
        let future = apply_move_to_game(&candidate, game)?;
        if !is_king_under_check(&future, team) {
            legal.push(candidate);
        }
    }
    Ok(legal)
}

/// All legal moves for the side to move, scanning the board rank by rank.
pub fn generate_all_moves(game: &GameState) -> Result<Vec<MoveDescription>, ChessErrors> {
    let mut moves = vec![];
    for (location, _) in game.piece_register.team_pieces(game.turn) {
        moves.extend(generate_legal_moves(game, location)?);
    }
    Ok(moves)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_start_position_has_twenty_moves() {
        let game = GameState::new_game();
        let moves = generate_all_moves(&game).unwrap();
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let game = GameState::new_game();
        let e4 = BoardLocation::from_long_algebraic("e4").unwrap();
        assert!(generate_legal_moves(&game, e4).unwrap().is_empty());
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        // The light knight on e4 is pinned against the king by the rook.
        let game = GameState::from_fen("k3r3/8/8/8/4N3/8/8/4K3 w - - 0 1").unwrap();
        let e4 = BoardLocation::from_long_algebraic("e4").unwrap();
        assert!(generate_legal_moves(&game, e4).unwrap().is_empty());
    }

    #[test]
    fn test_check_must_be_answered() {
        // Rook checks on the e-file; only blocking, capturing, or stepping
        // aside are legal.
        let game = GameState::from_fen("k3r3/8/8/8/8/8/3Q4/4K3 w - - 0 1").unwrap();
        let moves = generate_all_moves(&game).unwrap();
        for m in &moves {
            let future = apply_move_to_game(m, &game).unwrap();
            assert!(!is_king_under_check(
                &future,
                crate::piece_team::PieceTeam::Light
            ));
        }
        // The queen can block on e2 or the king can step off the file.
        assert!(moves
            .iter()
            .any(|m| m.destination.to_long_algebraic() == "e2"));
    }

    #[test]
    fn test_legal_iff_king_safe_after_apply() {
        // A pseudo-legal move is legal iff applying it leaves the mover's
        // king unattacked.
        let game = GameState::from_fen("k3r3/8/8/8/4N3/8/3P4/4K3 w - - 0 1").unwrap();
        for (location, piece) in game.piece_register.team_pieces(game.turn) {
            let legal = generate_legal_moves(&game, location).unwrap();
            for candidate in generate_pseudo_moves(&game, location, false) {
                let future = apply_move_to_game(&candidate, &game).unwrap();
                let safe = !is_king_under_check(&future, piece.team);
                assert_eq!(safe, legal.contains(&candidate));
            }
        }
    }
}
