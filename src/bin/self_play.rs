//! Standalone engine-vs-engine game runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --depth 3`

use quince_chess::engines::engine_trait::{engine_for_depth, Engine};
use quince_chess::game_state::GameState;
use quince_chess::piece_class::PieceClass;
use quince_chess::piece_team::PieceTeam;

const MAX_PLIES: usize = 200;

fn parse_depth() -> u8 {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--depth" || arg == "-d" {
            if let Some(value) = args.next() {
                if let Ok(depth) = value.parse() {
                    return depth;
                }
            }
        }
    }
    2
}

fn main() -> Result<(), String> {
    let depth = parse_depth();
    let mut light: Box<dyn Engine> = engine_for_depth(depth);
    let mut dark: Box<dyn Engine> = engine_for_depth(1);
    println!("{} (Light) vs {} (Dark)", light.name(), dark.name());

    let mut game = GameState::new_game();
    for _ in 0..MAX_PLIES {
        if game.result.is_some() {
            break;
        }
        let engine = match game.turn {
            PieceTeam::Light => &mut light,
            PieceTeam::Dark => &mut dark,
        };
        let chosen = engine
            .choose_move(&game)
            .map_err(|e| format!("engine failure: {e:?}"))?;
        let chess_move = match chosen {
            Some(m) => m,
            None => break,
        };
        game.make_move(&chess_move)
            .map_err(|e| format!("illegal engine move: {e:?}"))?;
        if game.pending_promotion.is_some() {
            game.promote(PieceClass::Queen)
                .map_err(|e| format!("promotion failure: {e:?}"))?;
        }
    }

    println!("{}", game.get_movetext());
    match game.result {
        Some(result) => println!("result: {result:?}"),
        None => println!("result: unfinished after {MAX_PLIES} plies"),
    }
    println!("final: {}", game.get_fen());
    Ok(())
}
