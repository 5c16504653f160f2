//! Rules engine for an interactive chess board: board state, move legality
//! and the click-driven turn and selection state machine.

pub mod chess_board;
pub mod engines;
pub mod error;
pub mod session;
pub mod ui;

pub use chess_board::{ChessBoard, ChessField, Color, ModelHandle, MoveRejection, Piece, PieceType, Square};
pub use error::{Result, RulesError};
pub use session::{ClickOutcome, GameSession, OutOfBoardPolicy, SessionConfig};
