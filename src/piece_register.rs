use crate::{
    board_location::BoardLocation, chess_errors::ChessErrors, piece_class::PieceClass,
    piece_record::PieceRecord, piece_team::PieceTeam,
};

/// The 8x8 board grid.
///
/// Exactly one mutable grid per `GameState`; hypothetical futures operate on
/// clones, never aliases.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct PieceRegister {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl PieceRegister {
    /// Mutable access to the square at `x`.
    pub fn at(&mut self, x: BoardLocation) -> &mut Option<PieceRecord> {
        &mut self.buffer[x.file as usize][x.rank as usize]
    }

    /// Read-only access to the square at `x`.
    pub fn view(&self, x: BoardLocation) -> &Option<PieceRecord> {
        &self.buffer[x.file as usize][x.rank as usize]
    }

    /// Places a piece record on an empty square.
    pub fn add_piece_record(
        &mut self,
        x: PieceRecord,
        y: BoardLocation,
    ) -> Result<(), ChessErrors> {
        if self.view(y).is_some() {
            return Err(ChessErrors::BoardLocationOccupied(y));
        }
        *self.at(y) = Some(x);
        Ok(())
    }

    /// Removes and returns the piece at `y`.
    pub fn remove_piece_record(&mut self, y: BoardLocation) -> Result<PieceRecord, ChessErrors> {
        match self.at(y).take() {
            Some(record) => Ok(record),
            None => Err(ChessErrors::CannotRemoveFromEmptyLocation(y)),
        }
    }

    /// Moves the piece at `from` to `to`, overwriting whatever was at `to`.
    /// Captures must be removed by the caller first.
    pub fn relocate_piece(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
    ) -> Result<(), ChessErrors> {
        let record = self
            .at(from)
            .take()
            .ok_or(ChessErrors::TryToViewOrEditEmptySquare(from))?;
        *self.at(to) = Some(record);
        Ok(())
    }

    /// Returns every (location, piece) pair for `team`, scanning rank 0
    /// upward, file a to h within a rank.
    pub fn team_pieces(&self, team: PieceTeam) -> Vec<(BoardLocation, PieceRecord)> {
        let mut pieces = vec![];
        for rank in 0..8 {
            for file in 0..8 {
                let location = BoardLocation { file, rank };
                if let Some(record) = self.view(location) {
                    if record.team == team {
                        pieces.push((location, *record));
                    }
                }
            }
        }
        pieces
    }

    /// Locates the king of `team`, if one is on the board.
    pub fn find_king(&self, team: PieceTeam) -> Option<BoardLocation> {
        for rank in 0..8 {
            for file in 0..8 {
                let location = BoardLocation { file, rank };
                if let Some(record) = self.view(location) {
                    if record.class == PieceClass::King && record.team == team {
                        return Some(location);
                    }
                }
            }
        }
        None
    }

    /// The classes of every piece on the board, team-blind. Used by the
    /// insufficient-material heuristic.
    pub fn all_piece_classes(&self) -> Vec<PieceClass> {
        let mut classes = vec![];
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(record) = self.view(BoardLocation { file, rank }) {
                    classes.push(record.class);
                }
            }
        }
        classes
    }
}
