use super::{legal_moves, Player};
use crate::chess_board::ChessField;
use crate::session::GameSession;
use rand::prelude::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Plays a uniformly random legal move. Seeded, so games are reproducible.
pub struct RandomPlayer {
    rng: Pcg64,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, session: &GameSession) -> Option<(ChessField, ChessField)> {
        legal_moves(session).choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_board::{Color, Square};
    use crate::engines::play_turn;
    use crate::session::ClickOutcome;

    #[test]
    fn test_opening_has_twenty_moves() {
        let session = GameSession::new();
        assert_eq!(legal_moves(&session).len(), 20);
        assert_eq!(RandomPlayer::new(7).name(), "random");
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = |seed| {
            let mut session = GameSession::new();
            let mut player = RandomPlayer::new(seed);
            for _ in 0..40 {
                play_turn(&mut player, &mut session);
            }
            session.board().clone()
        };
        assert_eq!(play(7), play(7));
    }

    #[test]
    fn test_random_games_keep_invariants() {
        for seed in 0..20 {
            let mut session = GameSession::new();
            let mut player = RandomPlayer::new(seed);
            for _ in 0..150 {
                let before = session.current_player();
                let Some(outcome) = play_turn(&mut player, &mut session) else {
                    break;
                };
                assert!(matches!(outcome, ClickOutcome::Moved { .. }), "seed {}: {:?}", seed, outcome);
                assert_eq!(session.current_player(), before.opposite());
                assert_eq!(session.selected(), None);

                for (row, squares) in session.board().squares.iter().enumerate() {
                    for (col, square) in squares.iter().enumerate() {
                        if let Square::Occupied(piece) = square {
                            assert_eq!(piece.position, Some(ChessField::new(row as u8, col as u8)));
                            assert!(!piece.is_selected);
                        }
                    }
                }
                for color in [Color::White, Color::Black] {
                    assert_eq!(session.board().count(color) + session.captured(color).len(), 16);
                    assert!(session.captured(color).iter().all(|p| p.position.is_none() && p.color == color));
                }
            }
        }
    }
}
