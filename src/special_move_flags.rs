use crate::board_location::BoardLocation;

/// The special stuff for castling rights and en passant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpecialMoveFlags {
    /// Whether light (white) can castle queenside.
    pub can_castle_queen_light: bool,
    /// Whether light (white) can castle kingside.
    pub can_castle_king_light: bool,
    /// Whether dark (black) can castle queenside.
    pub can_castle_queen_dark: bool,
    /// Whether dark (black) can castle kingside.
    pub can_castle_king_dark: bool,
    /// The en passant target (square behind a pawn that just double stepped)
    pub en_passant_location: Option<BoardLocation>,
}

impl SpecialMoveFlags {
    /// Flags for a fresh game: all rights available, no en passant target.
    pub fn new_game() -> Self {
        SpecialMoveFlags {
            can_castle_queen_light: true,
            can_castle_king_light: true,
            can_castle_queen_dark: true,
            can_castle_king_dark: true,
            en_passant_location: None,
        }
    }
}
