use super::{ChessBoard, ChessField, Piece};

/// Builds a board from an 8-line diagram, top line is row 7 and the first
/// character of a line is column 0. `.` marks an empty square, pieces use
/// upper case for White and lower case for Black.
///
/// Meant for tests, including the integration tests, which is why it is not
/// behind `#[cfg(test)]`. Panics on a malformed diagram.
pub fn board_from_diagram(diagram: &str) -> ChessBoard {
    let mut board = ChessBoard::empty();
    let rows: Vec<&str> = diagram.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    assert_eq!(rows.len(), 8, "diagram must have 8 rows");

    for (row_index, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), 8, "row {} must have 8 squares", row_index);
        for (col, c) in line.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).unwrap_or_else(|| panic!("invalid piece character {}", c));
            board.put(ChessField::new(7 - row_index as u8, col as u8), piece);
        }
    }
    board
}
