//! Clone-based move application.
//!
//! `apply_move_to_game` performs the board mutation and bookkeeping for a
//! move (capture removal, rook relocation for castling, castling-rights and
//! clock updates, en passant target, pending promotion marker, turn flip) on
//! a fresh copy of the given state. It does not touch notation, history, or
//! the terminal result; `GameState::make_move` layers those on top. The
//! legality filter uses this function directly so that simulating a candidate
//! move never re-enters terminal detection.

use crate::{
    board_location::BoardLocation,
    chess_errors::ChessErrors,
    game_state::{GameState, PendingPromotion},
    move_description::{CastleSide, MoveDescription, MoveKind},
    piece_class::PieceClass,
    piece_team::PieceTeam,
};

fn home_rank(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Light => 0,
        PieceTeam::Dark => 7,
    }
}

fn last_rank(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Light => 7,
        PieceTeam::Dark => 0,
    }
}

/// Applies a move (already validated as legal by the caller) to a copy of
/// `game`, returning the resulting state.
pub fn apply_move_to_game(
    chess_move: &MoveDescription,
    game: &GameState,
) -> Result<GameState, ChessErrors> {
    let mut result = game.clone();
    let piece = chess_move.piece;
    let team = piece.team;
    let origin = chess_move.origin;
    let destination = chess_move.destination;
    let moving_a_pawn = piece.class == PieceClass::Pawn;
    let mut capture_flag = false;

    match chess_move.kind {
        MoveKind::Regular | MoveKind::Promotion(_) => {
            if result.piece_register.view(destination).is_some() {
                let captured = result.piece_register.remove_piece_record(destination)?;
                capture_flag = true;
                // A rook captured in its corner loses the right for that wing.
                if captured.class == PieceClass::Rook
                    && destination.rank == home_rank(captured.team)
                {
                    clear_rook_rights(&mut result, destination, captured.team);
                }
            }
            result.piece_register.relocate_piece(origin, destination)?;
        }
        MoveKind::EnPassant => {
            let victim_location = BoardLocation::from_file_rank(destination.file, origin.rank)?;
            result.piece_register.remove_piece_record(victim_location)?;
            capture_flag = true;
            result.piece_register.relocate_piece(origin, destination)?;
        }
        MoveKind::Castling(side) => {
            result.piece_register.relocate_piece(origin, destination)?;
            let (rook_from, rook_to) = match side {
                CastleSide::KingSide => (
                    origin.generate_moved_location_checked(3, 0)?,
                    origin.generate_moved_location_checked(1, 0)?,
                ),
                CastleSide::QueenSide => (
                    origin.generate_moved_location_checked(-4, 0)?,
                    origin.generate_moved_location_checked(-1, 0)?,
                ),
            };
            result.piece_register.relocate_piece(rook_from, rook_to)?;
        }
    }

    // Castling rights: a king departure clears both wings, a rook departure
    // from its corner clears that wing.
    if piece.class == PieceClass::King {
        match team {
            PieceTeam::Light => {
                result.special_flags.can_castle_king_light = false;
                result.special_flags.can_castle_queen_light = false;
            }
            PieceTeam::Dark => {
                result.special_flags.can_castle_king_dark = false;
                result.special_flags.can_castle_queen_dark = false;
            }
        }
    }
    if piece.class == PieceClass::Rook && origin.rank == home_rank(team) {
        clear_rook_rights(&mut result, origin, team);
    }

    // Pending promotion marker; never auto-resolved here.
    if moving_a_pawn && destination.rank == last_rank(team) {
        result.pending_promotion = Some(PendingPromotion {
            location: destination,
            team,
        });
    } else {
        result.pending_promotion = None;
    }

    // En passant target lives for exactly one ply after a double step.
    if moving_a_pawn && (destination.rank - origin.rank).abs() == 2 {
        let behind = BoardLocation::from_file_rank(origin.file, (origin.rank + destination.rank) / 2)?;
        result.special_flags.en_passant_location = Some(behind);
    } else {
        result.special_flags.en_passant_location = None;
    }

    // Clocks and turn.
    if moving_a_pawn || capture_flag {
        result.half_move_clock = 0;
    } else {
        result.half_move_clock += 1;
    }
    if team == PieceTeam::Dark {
        result.full_move_count += 1;
    }
    result.turn = team.opponent();

    Ok(result)
}

fn clear_rook_rights(result: &mut GameState, corner: BoardLocation, team: PieceTeam) {
    match (corner.file, team) {
        (0, PieceTeam::Light) => result.special_flags.can_castle_queen_light = false,
        (7, PieceTeam::Light) => result.special_flags.can_castle_king_light = false,
        (0, PieceTeam::Dark) => result.special_flags.can_castle_queen_dark = false,
        (7, PieceTeam::Dark) => result.special_flags.can_castle_king_dark = false,
        _ => {}
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generate_legal_moves::generate_legal_moves;

    fn find_move(game: &GameState, from: &str, to: &str) -> MoveDescription {
        let origin = BoardLocation::from_long_algebraic(from).unwrap();
        let destination = BoardLocation::from_long_algebraic(to).unwrap();
        generate_legal_moves(game, origin)
            .unwrap()
            .into_iter()
            .find(|m| m.destination == destination)
            .expect("move should be legal")
    }

    #[test]
    fn test_double_step_sets_en_passant_target() {
        let game = GameState::new_game();
        let next = apply_move_to_game(&find_move(&game, "e2", "e4"), &game).unwrap();
        assert_eq!(
            next.special_flags.en_passant_location,
            Some(BoardLocation::from_long_algebraic("e3").unwrap())
        );
        assert_eq!(next.turn, PieceTeam::Dark);
        assert_eq!(next.half_move_clock, 0);
        assert_eq!(next.full_move_count, 1);
    }

    #[test]
    fn test_quiet_knight_move_bumps_clock_and_clears_target() {
        let game = GameState::new_game();
        let after_e4 = apply_move_to_game(&find_move(&game, "e2", "e4"), &game).unwrap();
        let after_nf6 = apply_move_to_game(&find_move(&after_e4, "g8", "f6"), &after_e4).unwrap();
        assert_eq!(after_nf6.special_flags.en_passant_location, None);
        assert_eq!(after_nf6.half_move_clock, 1);
        assert_eq!(after_nf6.full_move_count, 2);
    }

    #[test]
    fn test_en_passant_removes_victim() {
        let game = GameState::from_fen("k7/8/8/3pP3/8/8/8/K7 w - d6 0 1").unwrap();
        let capture = find_move(&game, "e5", "d6");
        assert_eq!(capture.kind, MoveKind::EnPassant);
        let next = apply_move_to_game(&capture, &game).unwrap();
        let d5 = BoardLocation::from_long_algebraic("d5").unwrap();
        let d6 = BoardLocation::from_long_algebraic("d6").unwrap();
        assert!(next.piece_register.view(d5).is_none());
        assert_eq!(
            next.piece_register.view(d6).map(|p| p.class),
            Some(PieceClass::Pawn)
        );
    }

    #[test]
    fn test_castling_relocates_rook() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let castle = find_move(&game, "e1", "g1");
        let next = apply_move_to_game(&castle, &game).unwrap();
        let f1 = BoardLocation::from_long_algebraic("f1").unwrap();
        let h1 = BoardLocation::from_long_algebraic("h1").unwrap();
        assert_eq!(
            next.piece_register.view(f1).map(|p| p.class),
            Some(PieceClass::Rook)
        );
        assert!(next.piece_register.view(h1).is_none());
        assert!(!next.special_flags.can_castle_king_light);
        assert!(!next.special_flags.can_castle_queen_light);
        assert!(next.special_flags.can_castle_king_dark);
    }

    #[test]
    fn test_rook_move_clears_one_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let next = apply_move_to_game(&find_move(&game, "a1", "a2"), &game).unwrap();
        assert!(!next.special_flags.can_castle_queen_light);
        assert!(next.special_flags.can_castle_king_light);
    }

    #[test]
    fn test_rook_capture_clears_opponent_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let next = apply_move_to_game(&find_move(&game, "a1", "a8"), &game).unwrap();
        assert!(!next.special_flags.can_castle_queen_dark);
        assert!(next.special_flags.can_castle_king_dark);
        // The moving rook left its own corner too.
        assert!(!next.special_flags.can_castle_queen_light);
    }

    #[test]
    fn test_pawn_on_last_rank_sets_pending_promotion() {
        let game = GameState::from_fen("k7/6P1/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let next = apply_move_to_game(&find_move(&game, "g7", "g8"), &game).unwrap();
        let pending = next.pending_promotion.expect("promotion should be pending");
        assert_eq!(pending.location.to_long_algebraic(), "g8");
        assert_eq!(pending.team, PieceTeam::Light);
        // Still a pawn until promote() supplies the choice.
        assert_eq!(
            next.piece_register.view(pending.location).map(|p| p.class),
            Some(PieceClass::Pawn)
        );
    }
}
