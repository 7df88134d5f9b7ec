/// Represents the type (class) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
