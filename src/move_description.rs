use crate::{
    board_location::BoardLocation, piece_class::PieceClass, piece_record::PieceRecord,
    special_move_flags::SpecialMoveFlags,
};

/// Which wing a castling move belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Represents the move kinds in chess, such as promotion, castling, and en
/// passant. Used to distinguish regular moves from moves with special rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// A regular move or regular capture (includes double pawn steps).
    Regular,
    /// En passant capture. The capture_status contains the victim pawn.
    EnPassant,
    /// Castling move on the given wing.
    Castling(CastleSide),
    /// Move of a pawn to the last rank with the promotion target chosen.
    Promotion(PieceClass),
}

/// Used for describing a candidate or applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveDescription {
    /// Square the piece moves from.
    pub origin: BoardLocation,
    /// Square the piece moves to.
    pub destination: BoardLocation,
    /// The piece being moved.
    pub piece: PieceRecord,
    /// The captured piece, if any. For en passant this is the victim pawn
    /// behind the destination square.
    pub capture_status: Option<PieceRecord>,
    /// The kind of move.
    pub kind: MoveKind,
}

impl MoveDescription {
    /// Rewrites this move as a promotion to `class`. Used by callers that
    /// collected the promotion choice before applying a legal pawn move to
    /// the last rank.
    pub fn into_promotion(mut self, class: PieceClass) -> MoveDescription {
        self.kind = MoveKind::Promotion(class);
        self
    }
}

/// An applied move as stored in the game history: the description plus a
/// snapshot of the bookkeeping state taken before the move, and the encoded
/// notation token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub description: MoveDescription,
    /// Castling rights and en passant target before the move.
    pub flags_before: SpecialMoveFlags,
    /// Halfmove clock before the move.
    pub half_move_clock_before: u16,
    /// Fullmove number before the move.
    pub full_move_count_before: u16,
    /// Short algebraic-like notation for the move.
    pub notation: String,
}
