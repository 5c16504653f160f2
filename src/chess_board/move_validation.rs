use super::{ChessBoard, ChessField, Piece, PieceType};
use crate::error::RulesError;
use thiserror::Error;
use tracing::{debug, error};

/// Why a move was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("no piece on the board to move")]
    NoPiece,
    #[error("target is off the board")]
    OffBoard,
    #[error("target is the piece's own square")]
    SameSquare,
    #[error("target holds a piece of the same color")]
    SelfCapture,
    #[error("piece does not move that way")]
    IllegalPattern,
    #[error("path is blocked")]
    PathBlocked,
    #[error("internal error: {0}")]
    Internal(RulesError),
}

impl ChessBoard {
    pub fn is_valid_move(&self, piece: Option<&Piece>, target_row: i32, target_col: i32) -> bool {
        match self.check_move(piece, target_row, target_col) {
            Ok(()) => true,
            Err(reason) => {
                debug!(target_row, target_col, %reason, "move rejected");
                false
            }
        }
    }

    /// Checks a move of `piece` to the target square without touching the board.
    pub fn check_move(&self, piece: Option<&Piece>, target_row: i32, target_col: i32) -> Result<(), MoveRejection> {
        let (piece, from) = match piece {
            Some(piece) => match piece.position {
                Some(from) => (piece, from),
                None => return Err(MoveRejection::NoPiece),
            },
            None => return Err(MoveRejection::NoPiece),
        };
        let to = ChessField::checked(target_row, target_col).ok_or(MoveRejection::OffBoard)?;
        if from == to {
            return Err(MoveRejection::SameSquare);
        }
        let target = self.at(to);
        if target.color() == Some(piece.color) {
            return Err(MoveRejection::SelfCapture);
        }

        let d_row = to.row as i32 - from.row as i32;
        let d_col = to.col as i32 - from.col as i32;
        let straight = d_row == 0 || d_col == 0;
        let diagonal = d_row.abs() == d_col.abs();

        match piece.kind {
            PieceType::Pawn => {
                let forward = piece.color.forward();
                if d_col == 0 && d_row == forward && target.is_empty() {
                    return Ok(());
                }
                if d_col == 0
                    && d_row == 2 * forward
                    && from.row == piece.color.pawn_start_row()
                    && target.is_empty()
                {
                    let between = ChessField::new((from.row as i32 + forward) as u8, from.col);
                    return if self.at(between).is_empty() {
                        Ok(())
                    } else {
                        Err(MoveRejection::PathBlocked)
                    };
                }
                if d_col.abs() == 1 && d_row == forward && target.color() == Some(piece.color.opposite()) {
                    return Ok(());
                }
                Err(MoveRejection::IllegalPattern)
            }
            PieceType::Rook if straight => self.require_clear_path(from, to),
            PieceType::Bishop if diagonal => self.require_clear_path(from, to),
            PieceType::Queen if straight || diagonal => self.require_clear_path(from, to),
            PieceType::Knight if (d_row.abs(), d_col.abs()) == (2, 1) || (d_row.abs(), d_col.abs()) == (1, 2) => Ok(()),
            PieceType::King if d_row.abs() <= 1 && d_col.abs() <= 1 => Ok(()),
            PieceType::Rook | PieceType::Bishop | PieceType::Queen | PieceType::Knight | PieceType::King => {
                Err(MoveRejection::IllegalPattern)
            }
        }
    }

    fn require_clear_path(&self, from: ChessField, to: ChessField) -> Result<(), MoveRejection> {
        match self.is_path_clear(from, to) {
            Ok(true) => Ok(()),
            Ok(false) => Err(MoveRejection::PathBlocked),
            Err(e) => {
                error!(%from, %to, "path check failed: {}", e);
                Err(MoveRejection::Internal(e))
            }
        }
    }

    /// Looks up the piece on `from` and checks its move to the target.
    pub fn is_valid_move_from(&self, from: ChessField, target_row: i32, target_col: i32) -> bool {
        self.is_valid_move(self.at(from).piece(), target_row, target_col)
    }

    /// Every square the piece on `from` may move to, in row-major order.
    pub fn legal_targets(&self, from: ChessField) -> Vec<ChessField> {
        let piece = self.at(from).piece();
        (0..8)
            .flat_map(|row| (0..8).map(move |col| (row, col)))
            .filter(|&(row, col)| self.check_move(piece, row, col).is_ok())
            .map(|(row, col)| ChessField::new(row as u8, col as u8))
            .collect()
    }
}
