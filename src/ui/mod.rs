//! Text front end: reads clicks from a line-based input and prints the board.

use crate::chess_board::{Color, Piece};
use crate::session::input::parse_click;
use crate::session::{ClickOutcome, GameSession};
use std::io::{self, BufRead, Write};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CapturedRow {
    color: String,
    count: usize,
    pieces: String,
}

pub fn captured_table(session: &GameSession) -> String {
    let rows: Vec<CapturedRow> = [Color::White, Color::Black]
        .into_iter()
        .map(|color| {
            let pieces = session.captured(color);
            CapturedRow {
                color: color.to_string(),
                count: pieces.len(),
                pieces: pieces.iter().map(Piece::to_char).collect(),
            }
        })
        .collect();
    Table::new(rows).with(Style::modern()).to_string()
}

pub fn describe(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Ignored => "nothing to do".to_string(),
        ClickOutcome::Selected(field) => format!("selected {}", field),
        ClickOutcome::Reselected { from, to } => format!("selection moved from {} to {}", from, to),
        ClickOutcome::Moved { from, to, captured: None } => format!("moved {} to {}", from, to),
        ClickOutcome::Moved {
            from,
            to,
            captured: Some(piece),
        } => format!("moved {} to {}, captured {}", from, to, piece.to_char()),
        ClickOutcome::Cancelled(field) => format!("selection on {} cancelled", field),
    }
}

/// Runs an interactive session until `quit` or end of input.
///
/// Each line is a click (`e2`, `1 4`), `off` for a click beside the board,
/// or one of `d`, `captured`, `reset`, `quit`.
pub fn run_console<R: BufRead, W: Write>(session: &mut GameSession, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", session.board().render_to_string())?;
    writeln!(output, "{} to move", session.current_player())?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" => return Ok(()),
            "d" => {
                writeln!(output, "{}", session.board().render_to_string())?;
            }
            "captured" => {
                writeln!(output, "{}", captured_table(session))?;
            }
            "reset" => {
                session.reset();
                writeln!(output, "{}", session.board().render_to_string())?;
            }
            "off" => {
                let outcome = session.click(None);
                writeln!(output, "{}", describe(&outcome))?;
            }
            _ => match parse_click(line) {
                Some(square) => {
                    let outcome = session.click(Some(square));
                    writeln!(output, "{}", describe(&outcome))?;
                    if matches!(outcome, ClickOutcome::Moved { .. }) {
                        writeln!(output, "{}", session.board().render_to_string())?;
                        writeln!(output, "{} to move", session.current_player())?;
                    }
                }
                None => {
                    writeln!(output, "unknown input: {}", line)?;
                }
            },
        }
        output.flush()?;
    }
    Ok(())
}
