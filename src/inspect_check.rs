//! Attack and check inspection.
//!
//! `is_attacked` scans every piece of the attacking team and asks the
//! pseudo-move generator (in attack mode) whether any of its moves lands on
//! the target square. `is_king_under_check` locates the friendly king and
//! delegates to `is_attacked`. Neither function mutates the provided state.

use crate::{
    board_location::BoardLocation, game_state::GameState,
    generate_pseudo_moves::generate_pseudo_moves, piece_team::PieceTeam,
};

/// Whether any piece of `by_team` attacks `target`.
///
/// Attack-mode generation excludes pawn forward pushes and castling, so this
/// never recurses back into check inspection.
pub fn is_attacked(game: &GameState, target: BoardLocation, by_team: PieceTeam) -> bool {
    for (location, _) in game.piece_register.team_pieces(by_team) {
        let attacks = generate_pseudo_moves(game, location, true);
        if attacks.iter().any(|m| m.destination == target) {
            return true;
        }
    }
    false
}

/// Whether the king of `team` is currently attacked. A state with no king of
/// that team (scratch positions) reports not in check.
pub fn is_king_under_check(game: &GameState, team: PieceTeam) -> bool {
    match game.piece_register.find_king(team) {
        Some(king_location) => is_attacked(game, king_location, team.opponent()),
        None => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_start_position_not_in_check() {
        let game = GameState::new_game();
        assert!(!is_king_under_check(&game, PieceTeam::Light));
        assert!(!is_king_under_check(&game, PieceTeam::Dark));
    }

    #[test]
    fn test_rook_gives_check() {
        let game = GameState::from_fen("k7/8/8/8/4r3/8/8/4K3 w - - 0 1").unwrap();
        assert!(is_king_under_check(&game, PieceTeam::Light));
        assert!(!is_king_under_check(&game, PieceTeam::Dark));
    }

    #[test]
    fn test_pawn_attack_direction() {
        // A dark pawn on d4 attacks c3 and e3, not d3.
        let c3 = BoardLocation::from_long_algebraic("c3").unwrap();
        let d3 = BoardLocation::from_long_algebraic("d3").unwrap();
        let e3 = BoardLocation::from_long_algebraic("e3").unwrap();
        // Pawn diagonals only count as attacks when the target is occupied,
        // which is all check detection ever asks about; occupy the squares.
        let game = GameState::from_fen("k7/8/8/8/3p4/2R1R3/8/K7 w - - 0 1").unwrap();
        assert!(is_attacked(&game, c3, PieceTeam::Dark));
        assert!(is_attacked(&game, e3, PieceTeam::Dark));
        assert!(!is_attacked(&game, d3, PieceTeam::Dark));
    }

    #[test]
    fn test_blocked_slider_does_not_attack() {
        let game = GameState::from_fen("k7/8/8/8/4r3/4P3/8/4K3 w - - 0 1").unwrap();
        assert!(!is_king_under_check(&game, PieceTeam::Light));
    }
}
