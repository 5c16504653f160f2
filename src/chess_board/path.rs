use super::{ChessBoard, ChessField};
use crate::error::{Result, RulesError};

impl ChessBoard {
    /// True if every square strictly between `start` and `end` is empty.
    ///
    /// The displacement must be straight or diagonal; the walk steps one
    /// square at a time toward `end`. A walk that leaves the board can only
    /// come from a bad displacement and is reported as `PathLeftBoard`.
    /// `start == end` is trivially clear.
    pub fn is_path_clear(&self, start: ChessField, end: ChessField) -> Result<bool> {
        let step_row = (end.row as i32 - start.row as i32).signum();
        let step_col = (end.col as i32 - start.col as i32).signum();

        let mut row = start.row as i32 + step_row;
        let mut col = start.col as i32 + step_col;

        while (row, col) != (end.row as i32, end.col as i32) {
            let field = ChessField::checked(row, col).ok_or(RulesError::PathLeftBoard { row, col })?;
            if !self.at(field).is_empty() {
                return Ok(false);
            }
            row += step_row;
            col += step_col;
        }
        Ok(true)
    }
}
