//! Negamax search engine with alpha-beta pruning.
//!
//! Enumerates legal moves in naive board order, recurses on a full clone per
//! candidate, and negates the child score (a position's value from the
//! opponent's perspective is the negative of its value from the mover's).
//! Branches where beta <= alpha are pruned. Evaluation is material only; a
//! terminal win/loss overrides it with a sentinel and draws score zero.
//! Depth is bounded (<= 3 in practice), which bounds cost; there is no
//! cancellation.

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::Engine;
use crate::game_state::GameState;
use crate::generate_legal_moves::generate_all_moves;
use crate::move_description::MoveDescription;
use crate::scoring::{evaluate_position, Score, MAX_SCORE, MIN_SCORE};

pub struct NegamaxEngine {
    depth: u8,
}

impl NegamaxEngine {
    pub fn new(depth: u8) -> Self {
        NegamaxEngine {
            depth: depth.max(1),
        }
    }
}

fn negamax(
    game: &GameState,
    depth: u8,
    mut alpha: Score,
    beta: Score,
) -> Result<Score, ChessErrors> {
    if depth == 0 || game.result.is_some() {
        return Ok(evaluate_position(game));
    }
    let legal_moves = generate_all_moves(game)?;
    if legal_moves.is_empty() {
        return Ok(evaluate_position(game));
    }
    let mut best = MIN_SCORE;
    for chess_move in &legal_moves {
        let mut future = game.clone();
        future.make_move(chess_move)?;
        let score = -negamax(&future, depth - 1, -beta, -alpha)?;
        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if beta <= alpha {
            break;
        }
    }
    Ok(best)
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Quince Negamax"
    }

    fn choose_move(
        &mut self,
        game: &GameState,
    ) -> Result<Option<MoveDescription>, ChessErrors> {
        let legal_moves = generate_all_moves(game)?;
        if legal_moves.is_empty() {
            return Ok(None);
        }
        let mut best_move = None;
        let mut best_score = MIN_SCORE;
        let mut alpha = MIN_SCORE;
        for chess_move in &legal_moves {
            let mut future = game.clone();
            future.make_move(chess_move)?;
            let score = -negamax(&future, self.depth - 1, -MAX_SCORE, -alpha)?;
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(*chess_move);
            }
            if score > alpha {
                alpha = score;
            }
        }
        Ok(best_move)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board_location::BoardLocation;
    use crate::game_result::GameResult;
    use crate::piece_team::PieceTeam;

    #[test]
    fn test_finds_mate_in_one() {
        // Back-rank mate: Ra1-a8#.
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut engine = NegamaxEngine::new(2);
        let chosen = engine.choose_move(&game).unwrap().unwrap();
        assert_eq!(chosen.origin, BoardLocation::from_long_algebraic("a1").unwrap());
        assert_eq!(
            chosen.destination,
            BoardLocation::from_long_algebraic("a8").unwrap()
        );
        let mut future = game.clone();
        future.make_move(&chosen).unwrap();
        assert_eq!(
            future.result,
            Some(GameResult::CheckmateWin(PieceTeam::Light))
        );
    }

    #[test]
    fn test_takes_free_material() {
        // An undefended dark queen on d4 is there for the taking.
        let game = GameState::from_fen("k7/8/8/8/3q4/8/8/3R3K w - - 0 1").unwrap();
        let mut engine = NegamaxEngine::new(2);
        let chosen = engine.choose_move(&game).unwrap().unwrap();
        assert_eq!(
            chosen.destination,
            BoardLocation::from_long_algebraic("d4").unwrap()
        );
    }

    #[test]
    fn test_does_not_hang_the_queen() {
        // Capturing the d4 pawn loses the queen to c5xd4; any quiet move is
        // materially better, and at depth 2 the search must see that.
        let game = GameState::from_fen("7k/8/8/2p5/3p4/8/8/QK6 w - - 0 1").unwrap();
        let mut engine = NegamaxEngine::new(2);
        let chosen = engine.choose_move(&game).unwrap().unwrap();
        let d4 = BoardLocation::from_long_algebraic("d4").unwrap();
        assert_ne!(chosen.destination, d4);
    }

    #[test]
    fn test_terminal_input_yields_none_without_error() {
        let game = GameState::from_fen("7k/8/5KQ1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut engine = NegamaxEngine::new(3);
        assert!(engine.choose_move(&game).unwrap().is_none());
    }

    #[test]
    fn test_prefers_escaping_check_over_material() {
        // The rook is attacked, but the king is in check and must be saved;
        // only legal moves are generated, so the engine still returns one.
        let game = GameState::from_fen("k3r3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let mut engine = NegamaxEngine::new(2);
        let chosen = engine.choose_move(&game).unwrap().unwrap();
        let mut future = game.clone();
        future.make_move(&chosen).unwrap();
        assert!(!future.is_check(PieceTeam::Light));
    }
}
