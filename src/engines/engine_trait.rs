//! Engine abstraction layer.
//!
//! A common trait so the random and searching engines can be selected at
//! runtime behind one interface, plus the difficulty-tier mapping used by
//! front ends.

use crate::{chess_errors::ChessErrors, game_state::GameState, move_description::MoveDescription};

pub trait Engine {
    fn name(&self) -> &str;

    /// Picks a move for the side to move, or `None` when no legal move
    /// exists (the caller should already know the game is terminal).
    fn choose_move(
        &mut self,
        game: &GameState,
    ) -> Result<Option<MoveDescription>, ChessErrors>;
}

/// Maps a difficulty tier to an engine: depth 1 plays uniformly at random,
/// deeper tiers run the negamax search at that depth.
pub fn engine_for_depth(depth: u8) -> Box<dyn Engine> {
    if depth <= 1 {
        Box::new(crate::engines::engine_random::RandomEngine::new())
    } else {
        Box::new(crate::engines::engine_negamax::NegamaxEngine::new(depth))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tier_mapping() {
        assert_eq!(engine_for_depth(0).name(), engine_for_depth(1).name());
        assert_ne!(engine_for_depth(1).name(), engine_for_depth(2).name());
    }
}
