//! Aggregate game state and its single mutation entry point.
//!
//! `GameState` owns the board grid, turn, castling/en-passant flags, clocks,
//! move history, the pending-promotion marker, and the terminal result. It is
//! created at the standard starting position (or from FEN), mutated only
//! through `make_move` plus the deferred `promote` step, and cloned for every
//! hypothetical future.

use crate::{
    apply_move_to_game::apply_move_to_game,
    board_location::BoardLocation,
    chess_errors::ChessErrors,
    game_result::{
        evaluate_game_result, is_checkmate, is_insufficient_material, is_stalemate, GameResult,
    },
    generate_legal_moves::generate_legal_moves,
    inspect_check::is_king_under_check,
    move_description::{MoveDescription, MoveRecord},
    notation::{generate_movetext, move_to_notation},
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_register::PieceRegister,
    piece_team::PieceTeam,
    special_move_flags::SpecialMoveFlags,
};

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A pawn that reached the last rank and awaits its promotion choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    pub location: BoardLocation,
    pub team: PieceTeam,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub piece_register: PieceRegister,
    pub turn: PieceTeam,
    pub special_flags: SpecialMoveFlags,
    pub half_move_clock: u16,
    pub full_move_count: u16,
    pub move_history: Vec<MoveRecord>,
    pub pending_promotion: Option<PendingPromotion>,
    pub result: Option<GameResult>,
}

impl GameState {
    /// A game at the standard starting position.
    pub fn new_game() -> Self {
        Self::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Reinitializes to the standard starting position.
    pub fn reset(&mut self) {
        *self = GameState::new_game();
    }

    /// Legal moves from `location`; empty when the square holds no piece.
    /// Filtering to the side to move is the caller's responsibility.
    pub fn legal_moves(
        &self,
        location: BoardLocation,
    ) -> Result<Vec<MoveDescription>, ChessErrors> {
        generate_legal_moves(self, location)
    }

    /// Applies a move the caller has already confirmed is a member of
    /// `legal_moves(origin)`. Fails fast on an empty origin or a piece that
    /// does not belong to the side to move; destination membership is the
    /// caller's contract.
    pub fn make_move(&mut self, chess_move: &MoveDescription) -> Result<(), ChessErrors> {
        let piece_at_origin = self
            .piece_register
            .view(chess_move.origin)
            .ok_or(ChessErrors::TryingToMoveNonExistentPiece(chess_move.origin))?;
        if piece_at_origin.team != self.turn {
            return Err(ChessErrors::InvalidMoveStartCondition(chess_move.origin));
        }

        let record = MoveRecord {
            description: *chess_move,
            flags_before: self.special_flags,
            half_move_clock_before: self.half_move_clock,
            full_move_count_before: self.full_move_count,
            notation: move_to_notation(chess_move),
        };

        let mut next = apply_move_to_game(chess_move, self)?;
        next.move_history.push(record);
        next.result = evaluate_game_result(&next)?;
        *self = next;
        Ok(())
    }

    /// Resolves a pending promotion by replacing the pawn with `class`.
    /// No-op when nothing is pending.
    pub fn promote(&mut self, class: PieceClass) -> Result<(), ChessErrors> {
        let pending = match self.pending_promotion.take() {
            Some(pending) => pending,
            None => return Ok(()),
        };
        let record = self
            .piece_register
            .at(pending.location)
            .as_mut()
            .ok_or(ChessErrors::TryToViewOrEditEmptySquare(pending.location))?;
        record.class = class;
        Ok(())
    }

    pub fn is_check(&self, team: PieceTeam) -> bool {
        is_king_under_check(self, team)
    }

    pub fn is_checkmate(&self, team: PieceTeam) -> Result<bool, ChessErrors> {
        is_checkmate(self, team)
    }

    pub fn is_stalemate(&self, team: PieceTeam) -> Result<bool, ChessErrors> {
        is_stalemate(self, team)
    }

    pub fn is_insufficient_material(&self) -> bool {
        is_insufficient_material(self)
    }

    /// Per-ply notation tokens in game order.
    pub fn notation(&self) -> Vec<&str> {
        self.move_history
            .iter()
            .map(|record| record.notation.as_str())
            .collect()
    }

    /// The movetext string ("1. e4 e5 2. Nf3 ...").
    pub fn get_movetext(&self) -> String {
        generate_movetext(&self.move_history)
    }

    /// Parses a FEN string. Missing trailing fields (castling, en passant,
    /// clocks) fall back to defaults; the terminal result of the loaded
    /// position is evaluated so callers can inspect it immediately.
    pub fn from_fen(x: &str) -> Result<Self, ChessErrors> {
        let mut fields = x.split_ascii_whitespace();

        let position_field = fields
            .next()
            .ok_or_else(|| ChessErrors::InvalidFENstringForm(x.to_string()))?;
        let mut piece_register = PieceRegister::default();
        let mut file: i8 = 0;
        let mut rank: i8 = 7;
        for c in position_field.chars() {
            match c {
                '/' => {
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    file += (c as u8 - b'0') as i8;
                }
                _ => {
                    let record =
                        char_to_piece(c).ok_or(ChessErrors::InvalidFENtoken(c))?;
                    piece_register
                        .add_piece_record(record, BoardLocation::from_file_rank(file, rank)?)?;
                    file += 1;
                }
            }
        }

        let turn_field = fields
            .next()
            .ok_or_else(|| ChessErrors::InvalidFENstringForm(x.to_string()))?;
        let turn = match turn_field {
            "w" => PieceTeam::Light,
            "b" => PieceTeam::Dark,
            _ => return Err(ChessErrors::InvalidFENstringForm(x.to_string())),
        };

        let mut special_flags = SpecialMoveFlags::default();
        if let Some(castling_field) = fields.next() {
            for c in castling_field.chars() {
                match c {
                    'K' => special_flags.can_castle_king_light = true,
                    'Q' => special_flags.can_castle_queen_light = true,
                    'k' => special_flags.can_castle_king_dark = true,
                    'q' => special_flags.can_castle_queen_dark = true,
                    '-' => {}
                    _ => return Err(ChessErrors::InvalidFENtoken(c)),
                }
            }
        }
        if let Some(en_passant_field) = fields.next() {
            if en_passant_field != "-" {
                special_flags.en_passant_location =
                    Some(BoardLocation::from_long_algebraic(en_passant_field)?);
            }
        }

        let half_move_clock = match fields.next() {
            Some(field) => field
                .parse::<u16>()
                .map_err(|_| ChessErrors::InvalidFENstringForm(x.to_string()))?,
            None => 0,
        };
        let full_move_count = match fields.next() {
            Some(field) => field
                .parse::<u16>()
                .map_err(|_| ChessErrors::InvalidFENstringForm(x.to_string()))?,
            None => 1,
        };

        let mut state = GameState {
            piece_register,
            turn,
            special_flags,
            half_move_clock,
            full_move_count,
            move_history: vec![],
            pending_promotion: None,
            result: None,
        };
        state.result = evaluate_game_result(&state)?;
        Ok(state)
    }

    /// Renders the current position as a six-field FEN string.
    pub fn get_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.piece_register.view(BoardLocation { file, rank }) {
                    Some(record) => {
                        if empty_run > 0 {
                            placement.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        placement.push(piece_to_char(record));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let turn = match self.turn {
            PieceTeam::Light => 'w',
            PieceTeam::Dark => 'b',
        };

        let mut castling = String::new();
        if self.special_flags.can_castle_king_light {
            castling.push('K');
        }
        if self.special_flags.can_castle_queen_light {
            castling.push('Q');
        }
        if self.special_flags.can_castle_king_dark {
            castling.push('k');
        }
        if self.special_flags.can_castle_queen_dark {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.special_flags.en_passant_location {
            Some(location) => location.to_long_algebraic(),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} {}",
            placement, turn, castling, en_passant, self.half_move_clock, self.full_move_count
        )
    }
}

fn char_to_piece(c: char) -> Option<PieceRecord> {
    let team = if c.is_ascii_uppercase() {
        PieceTeam::Light
    } else {
        PieceTeam::Dark
    };
    let class = match c.to_ascii_lowercase() {
        'p' => PieceClass::Pawn,
        'n' => PieceClass::Knight,
        'b' => PieceClass::Bishop,
        'r' => PieceClass::Rook,
        'q' => PieceClass::Queen,
        'k' => PieceClass::King,
        _ => return None,
    };
    Some(PieceRecord { class, team })
}

fn piece_to_char(record: &PieceRecord) -> char {
    let c = match record.class {
        PieceClass::Pawn => 'p',
        PieceClass::Knight => 'n',
        PieceClass::Bishop => 'b',
        PieceClass::Rook => 'r',
        PieceClass::Queen => 'q',
        PieceClass::King => 'k',
    };
    match record.team {
        PieceTeam::Light => c.to_ascii_uppercase(),
        PieceTeam::Dark => c,
    }
}
