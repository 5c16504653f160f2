use crate::chess_board::ChessField;
use crate::session::{ClickOutcome, GameSession};

pub mod random_player;
pub use random_player::RandomPlayer;

pub trait Player {
    fn name(&self) -> &str;
    /// Picks a `(from, to)` move for the player to move, `None` if it has none.
    fn choose_move(&mut self, session: &GameSession) -> Option<(ChessField, ChessField)>;
}

/// Lets `player` pick a move and plays it through the same two clicks a
/// person would make.
pub fn play_turn<P: Player + ?Sized>(player: &mut P, session: &mut GameSession) -> Option<ClickOutcome> {
    let (from, to) = player.choose_move(session)?;
    session.click(Some((from.row as i32, from.col as i32)));
    Some(session.click(Some((to.row as i32, to.col as i32))))
}

/// All legal `(from, to)` moves of the player to move, in board order.
pub fn legal_moves(session: &GameSession) -> Vec<(ChessField, ChessField)> {
    let board = session.board();
    board
        .pieces()
        .filter(|(_, piece)| piece.color == session.current_player())
        .flat_map(|(from, _)| board.legal_targets(from).into_iter().map(move |to| (from, to)))
        .collect()
}
