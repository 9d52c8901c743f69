use super::{GameSession, UndoOutcome};
use crate::chess_boards::chess_board::{Color, Move, Position, Square};
use crate::chess_boards::Board;
use std::io::{self, BufRead, Write};
use tabled::settings::Style;
use tabled::{Table, Tabled};

const HELP: &str = "commands: move <e2e4> | <e2e4> | moves <sq> | undo | history | reset | check | board | fen | captured | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Moves(Square),
    Undo,
    History,
    Reset,
    Check,
    Board,
    Fen,
    Captured,
    Help,
    Quit,
}

#[derive(Tabled)]
pub struct DestinationRow {
    pub square: String,
    pub capture: String,
}

/// Tabulates destinations of the piece on `from`, marking captures.
pub fn destination_table(position: &Position, from: Square, destinations: &[Square]) -> String {
    let mover = position.piece_at(from).map(|p| p.color);
    let rows = destinations.iter().map(|&to| DestinationRow {
        square: to.as_algebraic(),
        capture: match (mover, position.piece_at(to)) {
            (Some(color), Some(target)) if target.color != color => target.kind.name().to_string(),
            _ => "-".to_string(),
        },
    });
    Table::new(rows).with(Style::modern()).to_string()
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Err("empty command".to_string());
    };

    let argument = tokens.get(1).copied();
    let missing = |name: &str| format!("{} needs an argument", name);

    match first {
        "move" | "m" => Move::from_algebraic(argument.ok_or_else(|| missing("move"))?)
            .map(Command::Move)
            .map_err(|e| e.to_string()),
        "moves" => Square::from_algebraic(argument.ok_or_else(|| missing("moves"))?)
            .map(Command::Moves)
            .map_err(|e| e.to_string()),
        "undo" | "u" => Ok(Command::Undo),
        "history" => Ok(Command::History),
        "reset" | "new" => Ok(Command::Reset),
        "check" => Ok(Command::Check),
        "board" | "d" => Ok(Command::Board),
        "fen" => Ok(Command::Fen),
        "captured" => Ok(Command::Captured),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Move::from_algebraic(other)
            .map(Command::Move)
            .map_err(|_| format!("unknown command: {}", other)),
    }
}

fn check_line(session: &GameSession, color: Color) -> String {
    match session.is_in_check(color) {
        Ok(true) => format!("{} is in check", color),
        Ok(false) => format!("{} is not in check", color),
        Err(e) => e.to_string(),
    }
}

/// Runs one command against the session. Returns false when the console should stop.
pub fn execute<W: Write>(session: &mut GameSession, command: Command, out: &mut W) -> io::Result<bool> {
    match command {
        Command::Move(mv) => match session.make_move(mv.from, mv.to) {
            Ok(result) => {
                if let Some(kind) = result.captured {
                    writeln!(out, "{} captures {}", mv.as_algebraic(), kind.name())?;
                } else {
                    writeln!(out, "{}", mv.as_algebraic())?;
                }
                if let Ok(true) = session.is_in_check(session.turn()) {
                    writeln!(out, "{}", check_line(session, session.turn()))?;
                }
                writeln!(out, "{} to move", session.turn())?;
            }
            Err(e) => writeln!(out, "error: {}", e)?,
        },
        Command::Moves(square) => {
            let destinations = session.legal_destinations(square);
            if destinations.is_empty() {
                writeln!(out, "no moves from {}", square)?;
            } else {
                writeln!(out, "{}", destination_table(session.position(), square, &destinations))?;
            }
        }
        Command::Undo => match session.undo() {
            Ok(UndoOutcome::Restored(encoded)) => writeln!(out, "restored {}", encoded)?,
            Ok(UndoOutcome::Start) => writeln!(out, "start")?,
            Err(e) => writeln!(out, "error: {}", e)?,
        },
        Command::History => {
            if session.history().is_empty() {
                writeln!(out, "no moves yet")?;
            }
            for (ply, encoded) in session.history().iter().enumerate() {
                writeln!(out, "{:>3}. {}", ply + 1, encoded)?;
            }
        }
        Command::Reset => {
            session.reset();
            writeln!(out, "new game")?;
        }
        Command::Check => {
            for color in [Color::White, Color::Black] {
                writeln!(out, "{}", check_line(session, color))?;
            }
        }
        Command::Board => write!(out, "{}", session.position().render_to_string())?,
        Command::Fen => writeln!(out, "{}", session.encoded())?,
        Command::Captured => {
            for color in [Color::White, Color::Black] {
                let lost: Vec<&str> = session.captured().of(color).iter().map(|k| k.name()).collect();
                writeln!(out, "{} lost: {}", color, if lost.is_empty() { "-".to_string() } else { lost.join(", ") })?;
            }
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Reads commands line by line until `quit` or end of input.
pub fn run_console<R: BufRead, W: Write>(session: &mut GameSession, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HELP)?;
    write!(out, "{}", session.position().render_to_string())?;
    writeln!(out, "{} to move", session.turn())?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let keep_going = match parse_command(line) {
            Ok(command) => execute(session, command, out)?,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                true
            }
        };
        out.flush()?;
        if !keep_going {
            break;
        }
    }
    Ok(())
}
