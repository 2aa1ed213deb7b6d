//! Kingdoms -- a scoring engine for the Kingdoms tile-placement game.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! one line per command. Diagnostics go to stderr.

use std::io::{self, BufRead};

use kingdoms::engine::Engine;
use kingdoms::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let written = match cmd {
            Command::IsReady => engine.handle_isready(&mut out),
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
                Ok(())
            }
            Command::NewGame => {
                if let Err(e) = engine.new_game() {
                    eprintln!("newgame: {}", e);
                }
                Ok(())
            }
            Command::Round { number } => {
                if let Err(e) = engine.select_round(number) {
                    eprintln!("round: {}", e);
                }
                Ok(())
            }
            Command::Position { kfen } => {
                if let Err(e) = engine.set_position(&kfen) {
                    eprintln!("failed to parse KFEN: {}", e);
                }
                Ok(())
            }
            Command::Place { pos, cell } => {
                if let Err(e) = engine.place(pos, cell) {
                    eprintln!("place: {}", e);
                }
                Ok(())
            }
            Command::Erase { pos } => {
                if let Err(e) = engine.erase(pos) {
                    eprintln!("erase: {}", e);
                }
                Ok(())
            }
            Command::Board => engine.handle_board(&mut out),
            Command::Scores => engine.handle_scores(&mut out),
            Command::Analyze => engine.handle_analyze(&mut out),
            Command::Total => engine.handle_total(&mut out),
            Command::Quit => break,
        };

        if let Err(e) = written {
            eprintln!("write failed: {}", e);
            break;
        }
    }
}
