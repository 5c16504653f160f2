use std::io::{stdin, stdout};
use std::time::Instant;

use clickchess::engines::{play_turn, Player, RandomPlayer};
use clickchess::ui::{captured_table, describe, run_console};
use clickchess::{ChessBoard, ClickOutcome, Color, GameSession, OutOfBoardPolicy, SessionConfig};

use clap::arg;
use clap::command;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;
use tracing::Level;

fn main() {
    let matches = command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .arg(arg!(
            --"ignore-off-board" "Keep the selection when a click misses the board"
        ))
        .subcommand(Command::new("play").about("Play a game by typing squares"))
        .subcommand(Command::new("show").about("Print the opening board"))
        .subcommand(
            Command::new("random")
                .about("Let two random players play against each other")
                .arg(
                    arg!(
                    -s --seed <seed> "Random seed"
                            )
                    .default_value("1")
                    .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(
                    -m --moves <moves> "Maximum number of moves"
                            )
                    .default_value("100")
                    .value_parser(clap::value_parser!(usize)),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    let config = SessionConfig {
        out_of_board: if matches.get_flag("ignore-off-board") {
            OutOfBoardPolicy::Ignore
        } else {
            OutOfBoardPolicy::CancelSelection
        },
    };

    match matches.subcommand() {
        Some(("show", _)) => {
            println!("{}", ChessBoard::new().render_to_string());
        }
        Some(("random", arg_matches)) => {
            let seed = *arg_matches.get_one::<u64>("seed").unwrap_or(&1);
            let moves = *arg_matches.get_one::<usize>("moves").unwrap_or(&100);
            random_game(config, seed, moves);
        }
        Some(("play", _)) | None => {
            let mut session = GameSession::with_config(config);
            if let Err(e) = run_console(&mut session, stdin().lock(), stdout()) {
                eprintln!("console error: {}", e);
            }
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

#[derive(Tabled)]
struct GameSummary {
    white: String,
    black: String,
    seed: u64,
    moves: usize,
    captures: usize,
    white_left: usize,
    black_left: usize,
    to_move: String,
    elapsed_ms: f32,
}

fn random_game(config: SessionConfig, seed: u64, max_moves: usize) {
    let mut session = GameSession::with_config(config);
    let mut white = RandomPlayer::new(seed);
    let mut black = RandomPlayer::new(seed.wrapping_add(1));
    let start_time = Instant::now();

    let mut moves = 0;
    let mut captures = 0;
    while moves < max_moves {
        let player: &mut dyn Player = match session.current_player() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(outcome) = play_turn(player, &mut session) else {
            println!("{} has no legal move", session.current_player());
            break;
        };
        println!("{}", describe(&outcome));
        let ClickOutcome::Moved { captured, .. } = outcome else {
            break;
        };
        moves += 1;
        captures += usize::from(captured.is_some());
    }

    println!("{}", session.board().render_to_string());
    println!("{}", captured_table(&session));
    let summary = GameSummary {
        white: white.name().to_string(),
        black: black.name().to_string(),
        seed,
        moves,
        captures,
        white_left: session.board().count(Color::White),
        black_left: session.board().count(Color::Black),
        to_move: session.current_player().to_string(),
        elapsed_ms: start_time.elapsed().as_secs_f32() * 1000f32,
    };
    println!("{}", Table::new(vec![summary]).with(Style::modern()));
}
