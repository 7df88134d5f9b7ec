//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by game logic, parsing
//! utilities, and move application. Variants carry contextual payloads where
//! useful (for example the offending `BoardLocation` or character) so callers
//! can log or display precise diagnostics.

use crate::board_location::BoardLocation;

/// Unified error type for the chess engine.
///
/// Parsing variants (`InvalidAlgebraicChar`, `InvalidFENtoken`, ...) are
/// recoverable and suitable for presenting to end users. Game-state variants
/// (moving from an empty square, moving out of turn) indicate a caller broke
/// a precondition and should be treated as programming errors.
#[derive(Debug)]
pub enum ChessErrors {
    /// Attempted to move a location by a delta that would leave the board.
    ///
    /// Payload: (origin_location, d_file, d_rank)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// Invalid file or rank indices were provided (outside 0..=7).
    InvalidFileOrRank((i8, i8)),

    /// A single character used during algebraic parsing was invalid.
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a square.
    InvalidAlgebraicString(String),

    /// Found an unexpected token while parsing a FEN string.
    InvalidFENtoken(char),

    /// A FEN string had malformed structure (missing or bad fields).
    InvalidFENstringForm(String),

    /// Attempted to place a piece on a square that is already occupied.
    BoardLocationOccupied(BoardLocation),

    /// Attempted to remove a piece from an empty square.
    CannotRemoveFromEmptyLocation(BoardLocation),

    /// Attempted to view or edit a square that holds no piece.
    TryToViewOrEditEmptySquare(BoardLocation),

    /// `make_move` was called with an empty origin square.
    TryingToMoveNonExistentPiece(BoardLocation),

    /// `make_move` was called for a piece that does not belong to the side
    /// to move.
    InvalidMoveStartCondition(BoardLocation),

    /// No legal moves are available for the side to move.
    NoLegalMoves,
}
