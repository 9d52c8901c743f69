use std::io::{self, Write};
use std::process::ExitCode;

use chess_rules::chess_boards::Board;
use chess_rules::session::console::{destination_table, run_console};
use chess_rules::{candidate_destinations, decode, encode, is_in_check, Color, GameSession, Square, INITIAL_POSITION};

use clap::arg;
use clap::command;
use clap::ArgMatches;
use clap::Command;

use tracing::debug;
use tracing_subscriber::EnvFilter;

fn fen_arg() -> clap::Arg {
    arg!(
    -f --fen <BOARD> "Board field of a FEN string"
            )
    .default_value(INITIAL_POSITION)
}

fn main() -> ExitCode {
    let matches = command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            Command::new("play")
                .about("Play a game on the console")
                .arg(fen_arg())
                .arg(
                    arg!(
                    -t --turn <COLOUR> "Side to move first"
                            )
                    .default_value("white")
                    .value_parser(clap::value_parser!(Color)),
                ),
        )
        .subcommand(
            Command::new("moves")
                .about("List candidate destinations of one piece")
                .arg(fen_arg())
                .arg(arg!(<SQUARE> "Square of the piece, e.g. e2")),
        )
        .subcommand(
            Command::new("check")
                .about("Report whether a side is in check")
                .arg(fen_arg())
                .arg(
                    arg!(
                    -c --colour <COLOUR> "Only report this side"
                            )
                    .value_parser(clap::value_parser!(Color)),
                ),
        )
        .subcommand(Command::new("show").about("Draw a board").arg(fen_arg()))
        .get_matches();

    init_logging(matches.get_flag("debug"));

    let outcome = match matches.subcommand() {
        Some(("play", arg_matches)) => play(arg_matches),
        Some(("moves", arg_matches)) => moves(arg_matches),
        Some(("check", arg_matches)) => check(arg_matches),
        Some(("show", arg_matches)) => show(arg_matches),
        None => play_from(INITIAL_POSITION, Color::White),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Warnings only by default, `--debug` raises it to info. `RUST_LOG` wins over both.
fn init_logging(debug: bool) {
    let default_level = if debug { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn fen_of(arg_matches: &ArgMatches) -> &str {
    arg_matches
        .get_one::<String>("fen")
        .map(String::as_str)
        .unwrap_or(INITIAL_POSITION)
}

fn play(arg_matches: &ArgMatches) -> Result<(), String> {
    let turn = arg_matches.get_one::<Color>("turn").copied().unwrap_or(Color::White);
    play_from(fen_of(arg_matches), turn)
}

fn play_from(fen: &str, turn: Color) -> Result<(), String> {
    let mut session = GameSession::from_notation(fen, turn).map_err(|e| e.to_string())?;
    debug!(fen, turn = %turn, "starting console session");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_console(&mut session, stdin.lock(), &mut stdout).map_err(|e| e.to_string())
}

fn moves(arg_matches: &ArgMatches) -> Result<(), String> {
    let position = decode(fen_of(arg_matches)).map_err(|e| e.to_string())?;
    let square = arg_matches
        .get_one::<String>("SQUARE")
        .ok_or_else(|| "missing square".to_string())?;
    let square = Square::from_algebraic(square).map_err(|e| e.to_string())?;

    let Some(piece) = position.piece_at(square) else {
        return Err(format!("no piece on {}", square));
    };
    let destinations = candidate_destinations(&position, square);
    println!("{} {} on {}", piece.color, piece.kind.name(), square);
    if destinations.is_empty() {
        println!("no moves");
    } else {
        println!("{}", destination_table(&position, square, &destinations));
    }
    Ok(())
}

fn check(arg_matches: &ArgMatches) -> Result<(), String> {
    let position = decode(fen_of(arg_matches)).map_err(|e| e.to_string())?;
    let colours = match arg_matches.get_one::<Color>("colour") {
        Some(&color) => vec![color],
        None => vec![Color::White, Color::Black],
    };

    let mut stdout = io::stdout();
    for color in colours {
        let in_check = is_in_check(&position, color).map_err(|e| e.to_string())?;
        writeln!(
            stdout,
            "{} {}",
            color,
            if in_check { "is in check" } else { "is not in check" }
        )
        .map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn show(arg_matches: &ArgMatches) -> Result<(), String> {
    let position = decode(fen_of(arg_matches)).map_err(|e| e.to_string())?;
    print!("{}", position.render_to_string());
    println!("{}", encode(&position));
    Ok(())
}
