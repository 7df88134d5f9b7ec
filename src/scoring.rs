//! Scoring utilities for the search engine.
//!
//! Centralizes piece valuations, sentinel values for forced outcomes, and the
//! static evaluation. Scores are modeled as floating point values to allow
//! fractional heuristics later.
//!
//! Conventions:
//! - `evaluate_material` is signed toward Light: positive favors Light.
//! - `evaluate_position` flips the sign to the perspective of the side to
//!   move, which is what negamax consumes.

use crate::{
    board_location::BoardLocation,
    game_result::GameResult,
    game_state::GameState,
    piece_class::PieceClass,
    piece_team::PieceTeam,
};

/// Numeric representation of an evaluation score.
pub type Score = f32;

/// Search bound sentinels; chosen to dominate any achievable evaluation.
pub const MIN_SCORE: Score = -1E9;
pub const MAX_SCORE: Score = 1E9;

/// Evaluation assigned to a delivered checkmate, before perspective flip.
pub const CHECKMATE_SCORE: Score = 9999.0;

/// Conventional material value for a given PieceClass.
///
/// - Pawn:   1.0
/// - Knight: 3.0
/// - Bishop: 3.0
/// - Rook:   5.0
/// - Queen:  9.0
/// - King:   0.0 (both sides always have one; it carries no material weight)
pub fn conventional_score(x: &PieceClass) -> Score {
    match x {
        PieceClass::Pawn => 1.0,
        PieceClass::Knight => 3.0,
        PieceClass::Bishop => 3.0,
        PieceClass::Rook => 5.0,
        PieceClass::Queen => 9.0,
        PieceClass::King => 0.0,
    }
}

/// Pure material count, positive favoring Light.
pub fn evaluate_material(game: &GameState) -> Score {
    let mut score: Score = 0.0;
    for rank in 0..8 {
        for file in 0..8 {
            if let Some(record) = game.piece_register.view(BoardLocation { file, rank }) {
                let value = conventional_score(&record.class);
                match record.team {
                    PieceTeam::Light => score += value,
                    PieceTeam::Dark => score -= value,
                }
            }
        }
    }
    score
}

/// Static evaluation from the perspective of the side to move. A terminal
/// win/loss overrides material; draws score zero.
pub fn evaluate_position(game: &GameState) -> Score {
    let score = match game.result {
        Some(GameResult::CheckmateWin(PieceTeam::Light)) => CHECKMATE_SCORE,
        Some(GameResult::CheckmateWin(PieceTeam::Dark)) => -CHECKMATE_SCORE,
        Some(_) => 0.0,
        None => evaluate_material(game),
    };
    match game.turn {
        PieceTeam::Light => score,
        PieceTeam::Dark => -score,
    }
}
