//! Pseudo-legal move generation.
//!
//! Produces every move obeying a piece's movement pattern on the given
//! square, ignoring whether the mover's own king ends up in check. Two modes:
//! normal generation includes pawn forward pushes and castling; attack mode
//! (`for_attack = true`) excludes both and is used only to test whether a
//! square is attacked, which keeps check inspection non-recursive.

use crate::{
    board_location::BoardLocation,
    game_state::GameState,
    inspect_check::{is_attacked, is_king_under_check},
    move_description::{CastleSide, MoveDescription, MoveKind},
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_team::PieceTeam,
};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// All pseudo-legal moves for the piece on `location`. Empty square yields an
/// empty list.
pub fn generate_pseudo_moves(
    game: &GameState,
    location: BoardLocation,
    for_attack: bool,
) -> Vec<MoveDescription> {
    let piece = match game.piece_register.view(location) {
        Some(piece) => *piece,
        None => return vec![],
    };
    match piece.class {
        PieceClass::Pawn => generate_pawn_moves(game, location, piece, for_attack),
        PieceClass::Knight => generate_offset_moves(game, location, piece, &KNIGHT_OFFSETS),
        PieceClass::Bishop => generate_slider_moves(game, location, piece, &BISHOP_DIRECTIONS),
        PieceClass::Rook => generate_slider_moves(game, location, piece, &ROOK_DIRECTIONS),
        PieceClass::Queen => {
            let mut moves = generate_slider_moves(game, location, piece, &BISHOP_DIRECTIONS);
            moves.extend(generate_slider_moves(game, location, piece, &ROOK_DIRECTIONS));
            moves
        }
        PieceClass::King => generate_king_moves(game, location, piece, for_attack),
    }
}

fn regular_move(
    game: &GameState,
    piece: PieceRecord,
    origin: BoardLocation,
    destination: BoardLocation,
) -> MoveDescription {
    MoveDescription {
        origin,
        destination,
        piece,
        capture_status: *game.piece_register.view(destination),
        kind: MoveKind::Regular,
    }
}

fn pawn_direction(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Light => 1,
        PieceTeam::Dark => -1,
    }
}

fn pawn_start_rank(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Light => 1,
        PieceTeam::Dark => 6,
    }
}

fn generate_pawn_moves(
    game: &GameState,
    location: BoardLocation,
    piece: PieceRecord,
    for_attack: bool,
) -> Vec<MoveDescription> {
    let mut moves = vec![];
    let direction = pawn_direction(piece.team);

    // Forward pushes are not attacks.
    if !for_attack {
        if let Ok(one_step) = location.generate_moved_location_checked(0, direction) {
            if game.piece_register.view(one_step).is_none() {
                moves.push(regular_move(game, piece, location, one_step));
                if location.rank == pawn_start_rank(piece.team) {
                    if let Ok(two_step) = location.generate_moved_location_checked(0, 2 * direction)
                    {
                        if game.piece_register.view(two_step).is_none() {
                            moves.push(regular_move(game, piece, location, two_step));
                        }
                    }
                }
            }
        }
    }

    // Diagonal captures, including en passant.
    for d_file in [-1, 1] {
        let target = match location.generate_moved_location_checked(d_file, direction) {
            Ok(target) => target,
            Err(_) => continue,
        };
        if let Some(occupant) = game.piece_register.view(target) {
            if occupant.team != piece.team {
                moves.push(regular_move(game, piece, location, target));
            }
        }
        if game.special_flags.en_passant_location == Some(target) {
            if let Ok(victim_location) = BoardLocation::from_file_rank(target.file, location.rank) {
                if let Some(victim) = game.piece_register.view(victim_location) {
                    if victim.team != piece.team {
                        moves.push(MoveDescription {
                            origin: location,
                            destination: target,
                            piece,
                            capture_status: Some(*victim),
                            kind: MoveKind::EnPassant,
                        });
                    }
                }
            }
        }
    }
    moves
}

fn generate_offset_moves(
    game: &GameState,
    location: BoardLocation,
    piece: PieceRecord,
    offsets: &[(i8, i8)],
) -> Vec<MoveDescription> {
    let mut moves = vec![];
    for (d_file, d_rank) in offsets {
        if let Ok(target) = location.generate_moved_location_checked(*d_file, *d_rank) {
            match game.piece_register.view(target) {
                Some(occupant) if occupant.team == piece.team => {}
                _ => moves.push(regular_move(game, piece, location, target)),
            }
        }
    }
    moves
}

fn generate_slider_moves(
    game: &GameState,
    location: BoardLocation,
    piece: PieceRecord,
    directions: &[(i8, i8)],
) -> Vec<MoveDescription> {
    let mut moves = vec![];
    for (d_file, d_rank) in directions {
        let mut current = location;
        while let Ok(target) = current.generate_moved_location_checked(*d_file, *d_rank) {
            match game.piece_register.view(target) {
                None => moves.push(regular_move(game, piece, location, target)),
                Some(occupant) => {
                    if occupant.team != piece.team {
                        moves.push(regular_move(game, piece, location, target));
                    }
                    break;
                }
            }
            current = target;
        }
    }
    moves
}

fn generate_king_moves(
    game: &GameState,
    location: BoardLocation,
    piece: PieceRecord,
    for_attack: bool,
) -> Vec<MoveDescription> {
    let mut moves = generate_offset_moves(game, location, piece, &KING_OFFSETS);

    // Castling is only offered in normal mode and never while in check.
    if !for_attack && !is_king_under_check(game, piece.team) {
        let (kingside_right, queenside_right) = match piece.team {
            PieceTeam::Light => (
                game.special_flags.can_castle_king_light,
                game.special_flags.can_castle_queen_light,
            ),
            PieceTeam::Dark => (
                game.special_flags.can_castle_king_dark,
                game.special_flags.can_castle_queen_dark,
            ),
        };
        if kingside_right && can_castle_kingside(game, location, piece.team) {
            if let Ok(destination) = location.generate_moved_location_checked(2, 0) {
                moves.push(MoveDescription {
                    origin: location,
                    destination,
                    piece,
                    capture_status: None,
                    kind: MoveKind::Castling(CastleSide::KingSide),
                });
            }
        }
        if queenside_right && can_castle_queenside(game, location, piece.team) {
            if let Ok(destination) = location.generate_moved_location_checked(-2, 0) {
                moves.push(MoveDescription {
                    origin: location,
                    destination,
                    piece,
                    capture_status: None,
                    kind: MoveKind::Castling(CastleSide::QueenSide),
                });
            }
        }
    }
    moves
}

/// King-side castling: the two squares the king crosses must be empty and
/// unattacked, and the rook must still sit in its corner.
fn can_castle_kingside(game: &GameState, king: BoardLocation, team: PieceTeam) -> bool {
    let enemy = team.opponent();
    for d_file in [1, 2] {
        let transit = match king.generate_moved_location_checked(d_file, 0) {
            Ok(transit) => transit,
            Err(_) => return false,
        };
        if game.piece_register.view(transit).is_some() || is_attacked(game, transit, enemy) {
            return false;
        }
    }
    rook_in_corner(game, king, 3, team)
}

/// Queen-side castling: three squares between king and rook empty, the two
/// squares the king crosses unattacked, rook in its corner.
fn can_castle_queenside(game: &GameState, king: BoardLocation, team: PieceTeam) -> bool {
    let enemy = team.opponent();
    for d_file in [-1, -2, -3] {
        let between = match king.generate_moved_location_checked(d_file, 0) {
            Ok(between) => between,
            Err(_) => return false,
        };
        if game.piece_register.view(between).is_some() {
            return false;
        }
        if d_file != -3 && is_attacked(game, between, enemy) {
            return false;
        }
    }
    rook_in_corner(game, king, -4, team)
}

fn rook_in_corner(game: &GameState, king: BoardLocation, d_file: i8, team: PieceTeam) -> bool {
    let corner = match king.generate_moved_location_checked(d_file, 0) {
        Ok(corner) => corner,
        Err(_) => return false,
    };
    matches!(
        game.piece_register.view(corner),
        Some(rook) if rook.class == PieceClass::Rook && rook.team == team
    )
}
