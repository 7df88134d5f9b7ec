//! Terminal state detection.
//!
//! Checkmate, stalemate, the fifty-move rule, and the insufficient-material
//! heuristic, evaluated in that priority order. Detection is informational
//! only; it never prevents further calls, callers stop issuing moves once a
//! result is set.

use crate::{
    chess_errors::ChessErrors, game_state::GameState, generate_legal_moves::generate_legal_moves,
    inspect_check::is_king_under_check, piece_class::PieceClass, piece_team::PieceTeam,
};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The given team delivered checkmate.
    CheckmateWin(PieceTeam),
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Halfmove clock reached 100 (fifty full moves without a pawn move or
    /// capture).
    FiftyMoveDraw,
    /// Neither side retains mating material.
    InsufficientMaterial,
}

fn has_any_legal_move(game: &GameState, team: PieceTeam) -> Result<bool, ChessErrors> {
    for (location, _) in game.piece_register.team_pieces(team) {
        if !generate_legal_moves(game, location)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// In check and without a single legal move.
pub fn is_checkmate(game: &GameState, team: PieceTeam) -> Result<bool, ChessErrors> {
    if !is_king_under_check(game, team) {
        return Ok(false);
    }
    Ok(!has_any_legal_move(game, team)?)
}

/// Not in check and without a single legal move.
pub fn is_stalemate(game: &GameState, team: PieceTeam) -> Result<bool, ChessErrors> {
    if is_king_under_check(game, team) {
        return Ok(false);
    }
    Ok(!has_any_legal_move(game, team)?)
}

/// Heuristic insufficient-material test: bare kings, a lone minor piece, or
/// exactly two bishops among four pieces. The two-bishops case does not
/// inspect bishop square colors.
pub fn is_insufficient_material(game: &GameState) -> bool {
    let classes = game.piece_register.all_piece_classes();
    if classes.iter().all(|c| *c == PieceClass::King) {
        return true;
    }
    if classes.len() == 3 && classes.contains(&PieceClass::Bishop) {
        return true;
    }
    if classes.len() == 3 && classes.contains(&PieceClass::Knight) {
        return true;
    }
    if classes.len() == 4
        && classes
            .iter()
            .filter(|c| **c == PieceClass::Bishop)
            .count()
            == 2
    {
        return true;
    }
    false
}

/// Evaluates the terminal state for the side to move, in priority order
/// checkmate > stalemate > fifty-move rule > insufficient material.
pub fn evaluate_game_result(game: &GameState) -> Result<Option<GameResult>, ChessErrors> {
    let turn = game.turn;
    if is_checkmate(game, turn)? {
        return Ok(Some(GameResult::CheckmateWin(turn.opponent())));
    }
    if is_stalemate(game, turn)? {
        return Ok(Some(GameResult::Stalemate));
    }
    if game.half_move_clock >= 100 {
        return Ok(Some(GameResult::FiftyMoveDraw));
    }
    if is_insufficient_material(game) {
        return Ok(Some(GameResult::InsufficientMaterial));
    }
    Ok(None)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_back_rank_mate_detected() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(is_checkmate(&game, PieceTeam::Dark).unwrap());
        assert!(!is_stalemate(&game, PieceTeam::Dark).unwrap());
        assert_eq!(
            game.result,
            Some(GameResult::CheckmateWin(PieceTeam::Light))
        );
    }

    #[test]
    fn test_stalemate_is_not_checkmate() {
        // Classic queen stalemate: dark to move, no legal move, not in check.
        let game = GameState::from_fen("7k/8/5KQ1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(is_stalemate(&game, PieceTeam::Dark).unwrap());
        assert!(!is_checkmate(&game, PieceTeam::Dark).unwrap());
        assert_eq!(game.result, Some(GameResult::Stalemate));
    }

    #[test]
    fn test_insufficient_material_cases() {
        let bare_kings = GameState::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert!(is_insufficient_material(&bare_kings));
        assert_eq!(bare_kings.result, Some(GameResult::InsufficientMaterial));

        let lone_bishop = GameState::from_fen("k7/8/8/8/8/8/8/KB6 w - - 0 1").unwrap();
        assert!(is_insufficient_material(&lone_bishop));

        let lone_knight = GameState::from_fen("k7/8/8/8/8/8/8/KN6 w - - 0 1").unwrap();
        assert!(is_insufficient_material(&lone_knight));

        // Two bishops among four pieces draws regardless of bishop colors.
        let two_bishops = GameState::from_fen("kb6/8/8/8/8/8/8/KB6 w - - 0 1").unwrap();
        assert!(is_insufficient_material(&two_bishops));

        let rook_left = GameState::from_fen("k7/8/8/8/8/8/8/KR6 w - - 0 1").unwrap();
        assert!(!is_insufficient_material(&rook_left));
        assert_eq!(rook_left.result, None);
    }

    #[test]
    fn test_fifty_move_rule_at_one_hundred() {
        let game = GameState::from_fen("k7/8/8/8/8/8/8/K6R w - - 100 80").unwrap();
        assert_eq!(game.result, Some(GameResult::FiftyMoveDraw));
        let almost = GameState::from_fen("k7/8/8/8/8/8/8/K6R w - - 99 80").unwrap();
        assert_eq!(almost.result, None);
    }
}
