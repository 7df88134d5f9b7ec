//! Crate root module declarations for the Quince Chess engine.
//!
//! This file exposes the rules core (board, game state, move generation,
//! legality filtering, terminal detection), the notation encoder, and the
//! engine implementations so binaries, tests, and external front ends can
//! import stable module paths.

pub mod apply_move_to_game;
pub mod board_location;
pub mod chess_errors;
pub mod game_result;
pub mod game_state;
pub mod generate_legal_moves;
pub mod generate_pseudo_moves;
pub mod inspect_check;
pub mod move_description;
pub mod notation;
pub mod perft;
pub mod piece_class;
pub mod piece_record;
pub mod piece_register;
pub mod piece_team;
pub mod scoring;
pub mod special_move_flags;

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}
