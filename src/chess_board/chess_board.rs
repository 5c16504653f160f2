use super::{ChessField, Color, ModelHandle, Piece, PieceType, Square};
use crate::error::{Result, RulesError};
use lazy_static::lazy_static;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

lazy_static! {
    static ref STARTING_BOARD: ChessBoard = ChessBoard::build_starting_layout();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub squares: [[Square; 8]; 8],
}

impl Default for ChessBoard {
    fn default() -> Self {
        STARTING_BOARD.clone()
    }
}

impl ChessBoard {
    /// Creates an empty chess board
    pub fn empty() -> Self {
        Self {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// Creates a board in the standard opening layout.
    pub fn new() -> Self {
        Self::default()
    }

    fn build_starting_layout() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back_row = color.back_row();
            let pawn_row = color.pawn_start_row();
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                board.put(ChessField::new(back_row, col), Piece::new(*kind, color));
                board.put(ChessField::new(pawn_row, col), Piece::new(PieceType::Pawn, color));
            }
        }
        board
    }

    /// Clears every square and places the opening layout.
    pub fn initialize(&mut self) {
        *self = STARTING_BOARD.clone();
    }

    /// Same as [`ChessBoard::initialize`], attaching the visual handle `models`
    /// returns for each color and piece type.
    pub fn initialize_with_models<F>(&mut self, models: F)
    where
        F: Fn(Color, PieceType) -> Option<ModelHandle>,
    {
        self.initialize();
        for square in self.squares.iter_mut().flatten() {
            if let Square::Occupied(piece) = square {
                piece.model = models(piece.color, piece.kind);
            }
        }
    }

    fn field(row: i32, col: i32) -> Result<ChessField> {
        ChessField::checked(row, col).ok_or(RulesError::OutOfRange { row, col })
    }

    pub fn get(&self, row: i32, col: i32) -> Result<&Square> {
        let field = Self::field(row, col)?;
        Ok(self.at(field))
    }

    /// Overwrites a square. An occupying piece has its position rewritten to
    /// match the square it now sits on.
    pub fn set(&mut self, row: i32, col: i32, square: Square) -> Result<()> {
        let field = Self::field(row, col)?;
        match square {
            Square::Occupied(piece) => self.put(field, piece),
            Square::Empty => self.squares[field.row as usize][field.col as usize] = Square::Empty,
        }
        Ok(())
    }

    /// Places `piece` at `(row, col)`; used to set up custom positions.
    pub fn place(&mut self, row: i32, col: i32, piece: Piece) -> Result<()> {
        self.set(row, col, Square::Occupied(piece))
    }

    pub fn is_empty(&self, row: i32, col: i32) -> Result<bool> {
        self.get(row, col).map(Square::is_empty)
    }

    pub(crate) fn at(&self, field: ChessField) -> &Square {
        &self.squares[field.row as usize][field.col as usize]
    }

    pub(crate) fn at_mut(&mut self, field: ChessField) -> &mut Square {
        &mut self.squares[field.row as usize][field.col as usize]
    }

    pub(crate) fn put(&mut self, field: ChessField, piece: Piece) {
        *self.at_mut(field) = Square::Occupied(piece.at(field));
    }

    /// Returns an iterator over all pieces on the chessboard along with their coordinates.
    pub fn pieces(&self) -> impl Iterator<Item = (ChessField, &Piece)> {
        self.squares.iter().enumerate().flat_map(|(row, squares)| {
            squares.iter().enumerate().filter_map(move |(col, square)| {
                square.piece().map(|piece| (ChessField::new(row as u8, col as u8), piece))
            })
        })
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in (0..8).rev() {
            board_representation.push_str(&format!("{} │", row + 1));
            for col in 0..8 {
                let cell = match &self.squares[row][col] {
                    Square::Empty => "   ".to_string(),
                    Square::Occupied(piece) if piece.is_selected => format!("[{}]", piece.to_char()),
                    Square::Occupied(piece) => format!(" {} ", piece.to_char()),
                };
                board_representation.push_str(&format!("{}│", cell));
            }
            board_representation.push_str(&format!(" {}\n", row + 1));

            if row > 0 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = ChessBoard::new();
        assert_eq!(board.count(Color::White), 16);
        assert_eq!(board.count(Color::Black), 16);

        for (col, kind) in BACK_RANK.iter().enumerate() {
            let white = board.get(0, col as i32).unwrap().piece().unwrap();
            let black = board.get(7, col as i32).unwrap().piece().unwrap();
            assert_eq!((white.kind, white.color), (*kind, Color::White));
            assert_eq!((black.kind, black.color), (*kind, Color::Black));
            assert_eq!(board.get(1, col as i32).unwrap().piece().unwrap().kind, PieceType::Pawn);
            assert_eq!(board.get(6, col as i32).unwrap().color(), Some(Color::Black));
        }

        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.is_empty(row, col), Ok(true));
            }
        }
    }

    #[test]
    fn test_positions_match_squares() {
        let board = ChessBoard::new();
        for (field, piece) in board.pieces() {
            assert_eq!(piece.position, Some(field));
            assert!(!piece.is_selected);
            assert_eq!(piece.model, None);
        }
    }

    #[test]
    fn test_initialize_resets_board() {
        let mut board = ChessBoard::empty();
        assert_eq!(board.pieces().count(), 0);
        board.place(4, 4, Piece::new(PieceType::Queen, Color::Black)).unwrap();
        board.initialize();
        assert_eq!(board, ChessBoard::new());
    }

    #[test]
    fn test_initialize_with_models() {
        let mut board = ChessBoard::empty();
        board.initialize_with_models(|color, kind| match (color, kind) {
            (Color::White, PieceType::King) => Some(ModelHandle(1)),
            (Color::Black, PieceType::King) => Some(ModelHandle(2)),
            _ => None,
        });
        assert_eq!(board.get(0, 4).unwrap().piece().unwrap().model, Some(ModelHandle(1)));
        assert_eq!(board.get(7, 4).unwrap().piece().unwrap().model, Some(ModelHandle(2)));
        assert_eq!(board.get(0, 3).unwrap().piece().unwrap().model, None);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut board = ChessBoard::new();
        assert_eq!(board.get(8, 0), Err(RulesError::OutOfRange { row: 8, col: 0 }));
        assert_eq!(board.get(0, -1), Err(RulesError::OutOfRange { row: 0, col: -1 }));
        assert_eq!(board.is_empty(-3, 9), Err(RulesError::OutOfRange { row: -3, col: 9 }));
        assert!(board.set(3, 8, Square::Empty).is_err());
    }

    #[test]
    fn test_set_rewrites_position() {
        let mut board = ChessBoard::empty();
        let rook = Piece::new(PieceType::Rook, Color::White).at(ChessField::new(0, 0));
        board.set(5, 2, Square::Occupied(rook)).unwrap();
        let placed = board.get(5, 2).unwrap().piece().unwrap();
        assert_eq!(placed.position, Some(ChessField::new(5, 2)));

        board.set(5, 2, Square::Empty).unwrap();
        assert_eq!(board.is_empty(5, 2), Ok(true));
    }

    #[test]
    fn test_render_marks_selection() {
        let mut board = ChessBoard::new();
        if let Square::Occupied(piece) = board.at_mut(ChessField::new(1, 4)) {
            piece.is_selected = true;
        }
        let rendered = board.render_to_string();
        assert!(rendered.contains("[P]"));
        assert!(rendered.contains("8 │ r │ n │ b │ q │ k │ b │ n │ r │ 8"));
    }
}
