//! Turn and selection handling for one interactive game.
//!
//! A [`GameSession`] owns the board, whose turn it is, the selected square
//! and the captured pieces. Each resolved click is fed to
//! [`GameSession::click`], which either selects, reselects, moves or cancels.

pub mod input;

use crate::chess_board::{ChessBoard, ChessField, Color, ModelHandle, Piece, PieceType, Square};
use crate::error::RulesError;
use self::input::BoardClickResolver;
use std::collections::HashMap;
use tracing::{debug, error, info};

/// What a click that misses the board does to a pending selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBoardPolicy {
    /// Leave the selection untouched.
    Ignore,
    /// Drop the selection.
    #[default]
    CancelSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub out_of_board: OutOfBoardPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// A piece of the player to move is now selected.
    Selected(ChessField),
    /// The selection moved to another piece of the same color.
    Reselected { from: ChessField, to: ChessField },
    /// A move was played and the turn passed. `captured` is the piece taken
    /// off the board, if any.
    Moved {
        from: ChessField,
        to: ChessField,
        captured: Option<Piece>,
    },
    /// The selection on this square was dropped.
    Cancelled(ChessField),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: ChessBoard,
    current_player: Color,
    selected: Option<ChessField>,
    captured_white: Vec<Piece>,
    captured_black: Vec<Piece>,
    config: SessionConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self::from_board(ChessBoard::new(), Color::White, config)
    }

    /// Starts a session from an arbitrary position.
    pub fn from_board(board: ChessBoard, current_player: Color, config: SessionConfig) -> Self {
        let mut board = board;
        // Every stored piece records its own square and starts unselected.
        for row in 0..8 {
            for col in 0..8 {
                let field = ChessField::new(row, col);
                if let Square::Occupied(mut piece) = *board.at(field) {
                    piece.is_selected = false;
                    board.put(field, piece);
                }
            }
        }
        Self {
            board,
            current_player,
            selected: None,
            captured_white: Vec::new(),
            captured_black: Vec::new(),
            config,
        }
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn selected(&self) -> Option<ChessField> {
        self.selected
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.and_then(|field| self.board.at(field).piece())
    }

    /// Pieces of `color` taken off the board, oldest first.
    pub fn captured(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_white,
            Color::Black => &self.captured_black,
        }
    }

    /// Puts the opening layout back, White to move. Visual handles already
    /// attached to pieces are carried over to the new layout.
    pub fn reset(&mut self) {
        let models: HashMap<(Color, PieceType), ModelHandle> = self
            .board
            .pieces()
            .map(|(_, p)| p)
            .chain(self.captured_white.iter())
            .chain(self.captured_black.iter())
            .filter_map(|p| p.model.map(|m| ((p.color, p.kind), m)))
            .collect();
        self.board.initialize_with_models(|color, kind| models.get(&(color, kind)).copied());
        self.current_player = Color::White;
        self.selected = None;
        self.captured_white.clear();
        self.captured_black.clear();
        info!("board reset");
    }

    /// Resolves a screen click and applies it.
    pub fn handle_screen_click<R>(&mut self, resolver: &R, screen_x: f32, screen_y: f32) -> ClickOutcome
    where
        R: BoardClickResolver + ?Sized,
    {
        let square = resolver.resolve_board_click(screen_x, screen_y);
        self.click(square)
    }

    /// Applies one resolved click. `None` means the click missed the board.
    pub fn click(&mut self, square: Option<(i32, i32)>) -> ClickOutcome {
        let Some((row, col)) = square else {
            return self.click_off_board();
        };
        let Some(target) = ChessField::checked(row, col) else {
            error!("click resolver broke its contract: {}", RulesError::OutOfRange { row, col });
            return self.click_off_board();
        };

        match self.selected {
            None => self.try_select(target),
            Some(from) => {
                if self.board.is_valid_move_from(from, row, col) {
                    self.execute_move(from, target)
                } else if self.board.at(target).color() == Some(self.current_player) {
                    self.reselect(from, target)
                } else {
                    self.cancel(from)
                }
            }
        }
    }

    fn click_off_board(&mut self) -> ClickOutcome {
        debug!("click missed the board");
        match (self.selected, self.config.out_of_board) {
            (Some(from), OutOfBoardPolicy::CancelSelection) => self.cancel(from),
            _ => ClickOutcome::Ignored,
        }
    }

    fn try_select(&mut self, field: ChessField) -> ClickOutcome {
        match self.board.at_mut(field) {
            Square::Occupied(piece) if piece.color == self.current_player => {
                piece.is_selected = true;
                debug!(%field, kind = %piece.kind, "piece selected");
                self.selected = Some(field);
                ClickOutcome::Selected(field)
            }
            _ => ClickOutcome::Ignored,
        }
    }

    fn reselect(&mut self, from: ChessField, to: ChessField) -> ClickOutcome {
        if from == to {
            return ClickOutcome::Selected(from);
        }
        self.set_selected_flag(from, false);
        self.selected = None;
        match self.try_select(to) {
            ClickOutcome::Selected(_) => ClickOutcome::Reselected { from, to },
            other => other,
        }
    }

    fn cancel(&mut self, from: ChessField) -> ClickOutcome {
        self.set_selected_flag(from, false);
        self.selected = None;
        debug!(%from, "selection cancelled");
        ClickOutcome::Cancelled(from)
    }

    fn set_selected_flag(&mut self, field: ChessField, selected: bool) {
        if let Square::Occupied(piece) = self.board.at_mut(field) {
            piece.is_selected = selected;
        }
    }

    fn execute_move(&mut self, from: ChessField, to: ChessField) -> ClickOutcome {
        let Square::Occupied(mut piece) = *self.board.at(from) else {
            // The selection always points at a piece of the player to move.
            error!(%from, "{}", RulesError::InvalidPieceReference);
            self.selected = None;
            return ClickOutcome::Ignored;
        };

        let captured = match *self.board.at(to) {
            Square::Occupied(victim) => Some(self.capture(victim)),
            Square::Empty => None,
        };

        piece.is_selected = false;
        self.board.put(to, piece);
        *self.board.at_mut(from) = Square::Empty;

        self.current_player = self.current_player.opposite();
        self.selected = None;
        info!(%from, %to, kind = %piece.kind, color = %piece.color, "move played");
        info!("{} to move", self.current_player);

        ClickOutcome::Moved { from, to, captured }
    }

    fn capture(&mut self, victim: Piece) -> Piece {
        let mut record = victim;
        record.position = None;
        record.is_selected = false;
        match victim.color {
            Color::White => self.captured_white.push(record),
            Color::Black => self.captured_black.push(record),
        }
        info!(kind = %victim.kind, color = %victim.color, "piece captured");
        record
    }
}
