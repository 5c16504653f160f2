pub mod model;
pub use model::{ChessField, Color, ModelHandle, Piece, PieceType, Square};

mod chess_board;
mod move_validation;
mod path;
pub mod test_utils;
pub use chess_board::ChessBoard;
pub use move_validation::MoveRejection;
