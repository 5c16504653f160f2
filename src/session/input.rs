use crate::chess_board::ChessField;

/// Maps a screen click to the board square under it.
///
/// Implementations must return an in-range `(row, col)` or `None` when the
/// click misses the board.
pub trait BoardClickResolver {
    fn resolve_board_click(&self, screen_x: f32, screen_y: f32) -> Option<(i32, i32)>;
}

impl<F> BoardClickResolver for F
where
    F: Fn(f32, f32) -> Option<(i32, i32)>,
{
    fn resolve_board_click(&self, screen_x: f32, screen_y: f32) -> Option<(i32, i32)> {
        self(screen_x, screen_y)
    }
}

/// Reads a typed click: a square such as `e2`, or `row col` / `row,col`
/// indices. Anything else, including indices off the board, is a miss.
pub fn parse_click(text: &str) -> Option<(i32, i32)> {
    let text = text.trim();
    if let Some(field) = ChessField::from_algebraic(text) {
        return Some((field.row as i32, field.col as i32));
    }

    let parts: Vec<&str> = text.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty()).collect();
    if parts.len() != 2 {
        return None;
    }
    let row = parts[0].parse::<i32>().ok()?;
    let col = parts[1].parse::<i32>().ok()?;
    ChessField::checked(row, col).map(|_| (row, col))
}
