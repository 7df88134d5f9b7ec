//! Difficulty-1 random-move engine.
//!
//! Selects uniformly from legal moves; intentionally non-deterministic and
//! non-optimal. Used for the easy tier and as a cheap baseline in tests.

use rand::prelude::IndexedRandom;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::Engine;
use crate::game_state::GameState;
use crate::generate_legal_moves::generate_all_moves;
use crate::move_description::MoveDescription;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Random"
    }

    fn choose_move(
        &mut self,
        game: &GameState,
    ) -> Result<Option<MoveDescription>, ChessErrors> {
        let legal_moves = generate_all_moves(game)?;
        if legal_moves.is_empty() {
            return Ok(None);
        }
        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or(ChessErrors::NoLegalMoves)?;
        Ok(Some(*picked))
    }
}
