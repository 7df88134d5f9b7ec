use crate::chess_errors::ChessErrors;

/// A square on the board, addressed by file (0..=7, a..=h) and rank
/// (0..=7, Light's home rank is 0).
///
/// Constructed only through bounds-checked paths, so a `BoardLocation` held
/// by callers is always on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardLocation {
    pub file: i8,
    pub rank: i8,
}

impl BoardLocation {
    /// Builds a location from file and rank indices, rejecting out-of-range
    /// values.
    pub fn from_file_rank(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        if !(0..=7).contains(&file) || !(0..=7).contains(&rank) {
            return Err(ChessErrors::InvalidFileOrRank((file, rank)));
        }
        Ok(BoardLocation { file, rank })
    }

    /// Moves this location by a file and rank offset.
    ///
    /// # Returns
    /// * `Ok(BoardLocation)` if the destination is within bounds.
    /// * `Err(ChessErrors::TriedToMoveOutOfBounds)` otherwise.
    pub fn generate_moved_location_checked(
        &self,
        d_file: i8,
        d_rank: i8,
    ) -> Result<Self, ChessErrors> {
        let file = self.file + d_file;
        let rank = self.rank + d_rank;
        if (file < 0) | (file > 7) | (rank < 0) | (rank > 7) {
            Err(ChessErrors::TriedToMoveOutOfBounds((*self, d_file, d_rank)))
        } else {
            Ok(BoardLocation { file, rank })
        }
    }

    /// Parses a long algebraic square such as "e4".
    pub fn from_long_algebraic(x: &str) -> Result<Self, ChessErrors> {
        let bytes = x.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessErrors::InvalidAlgebraicString(x.to_string()));
        }
        if !(b'a'..=b'h').contains(&bytes[0]) {
            return Err(ChessErrors::InvalidAlgebraicChar(bytes[0] as char));
        }
        if !(b'1'..=b'8').contains(&bytes[1]) {
            return Err(ChessErrors::InvalidAlgebraicChar(bytes[1] as char));
        }
        Ok(BoardLocation {
            file: (bytes[0] - b'a') as i8,
            rank: (bytes[1] - b'1') as i8,
        })
    }

    /// Renders this square in long algebraic form ("e4").
    pub fn to_long_algebraic(&self) -> String {
        let file_char = char::from(b'a' + self.file as u8);
        let rank_char = char::from(b'1' + self.rank as u8);
        format!("{}{}", file_char, rank_char)
    }
}
