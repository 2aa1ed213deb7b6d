//! Engine command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use super::kfen::parse_cell;
use crate::board::piece::Cell;
use crate::board::state::Pos;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset every round to an empty board.
    NewGame,

    /// Select the active round, 1-based as typed.
    Round { number: usize },

    /// Replace the active round's board with a KFEN position.
    Position { kfen: String },

    /// Place a tile or castle on the active board.
    Place { pos: Pos, cell: Cell },

    /// Clear a cell on the active board.
    Erase { pos: Pos },

    /// Print the active board as KFEN.
    Board,

    /// Print the active round's per-player scores.
    Scores,

    /// Print the active round's full analysis as JSON.
    Analyze,

    /// Print per-player scores summed across every round.
    Total,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "board" => Some(Command::Board),
        "scores" => Some(Command::Scores),
        "analyze" => Some(Command::Analyze),
        "total" => Some(Command::Total),

        "setoption" => parse_setoption(&tokens),
        "round" => parse_round(&tokens),
        "position" => parse_position(&tokens),
        "place" => parse_place(&tokens),
        "erase" => parse_erase(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `round <n>` with `n >= 1`.
fn parse_round(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1).map(|t| t.parse::<usize>()) {
        Some(Ok(number)) if number >= 1 => Some(Command::Round { number }),
        _ => {
            eprintln!("malformed round: expected 'round <n>' with n >= 1");
            None
        }
    }
}

/// Parses `position <kfen>`. The KFEN is a single whitespace-free token.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed position: expected 'position <kfen>'");
        return None;
    }
    Some(Command::Position {
        kfen: tokens[1].to_string(),
    })
}

/// Parses the `<row> <col>` pair starting at `tokens[1]`.
fn parse_pos(tokens: &[&str]) -> Option<Pos> {
    let row = tokens.get(1)?.parse().ok()?;
    let col = tokens.get(2)?.parse().ok()?;
    Some(Pos::new(row, col))
}

/// Parses `place <row> <col> <token>`.
fn parse_place(tokens: &[&str]) -> Option<Command> {
    let (Some(pos), Some(token)) = (parse_pos(tokens), tokens.get(3)) else {
        eprintln!("malformed place: expected 'place <row> <col> <token>'");
        return None;
    };
    match parse_cell(token) {
        Ok(cell) => Some(Command::Place { pos, cell }),
        Err(e) => {
            eprintln!("malformed place: {}", e);
            None
        }
    }
}

/// Parses `erase <row> <col>`.
fn parse_erase(tokens: &[&str]) -> Option<Command> {
    match parse_pos(tokens) {
        Some(pos) => Some(Command::Erase { pos }),
        None => {
            eprintln!("malformed erase: expected 'erase <row> <col>'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::PlayerColor;
    use crate::board::piece::{Castle, Tile};

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("board"), Some(Command::Board));
        assert_eq!(parse_command("scores"), Some(Command::Scores));
        assert_eq!(parse_command("analyze"), Some(Command::Analyze));
        assert_eq!(parse_command("total"), Some(Command::Total));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        let cmd = parse_command("setoption name Rows value 4").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "Rows".to_string(),
                value: Some("4".to_string()),
            }
        );
    }

    #[test]
    fn parse_setoption_no_value() {
        let cmd = parse_command("setoption name Rounds").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "Rounds".to_string(),
                value: None,
            }
        );
    }

    #[test]
    fn parse_setoption_malformed_returns_none() {
        assert_eq!(parse_command("setoption"), None);
        assert_eq!(parse_command("setoption foo"), None);
        assert_eq!(parse_command("setoption name value 3"), None);
    }

    #[test]
    fn parse_round_number() {
        assert_eq!(parse_command("round 2"), Some(Command::Round { number: 2 }));
        assert_eq!(parse_command("round 0"), None);
        assert_eq!(parse_command("round"), None);
        assert_eq!(parse_command("round two"), None);
    }

    #[test]
    fn parse_position_kfen() {
        let kfen = "r1,+5,4/6/6/6/6";
        let cmd = parse_command(&format!("position {}", kfen)).unwrap();
        assert_eq!(
            cmd,
            Command::Position {
                kfen: kfen.to_string(),
            }
        );
        assert_eq!(parse_command("position"), None);
    }

    #[test]
    fn parse_place_tile_and_castle() {
        assert_eq!(
            parse_command("place 1 2 D"),
            Some(Command::Place {
                pos: Pos::new(1, 2),
                cell: Cell::Tile(Tile::DRAGON),
            })
        );
        assert_eq!(
            parse_command("place 0 0 y3"),
            Some(Command::Place {
                pos: Pos::new(0, 0),
                cell: Cell::Castle(Castle::new(PlayerColor::Yellow, 3).unwrap()),
            })
        );
    }

    #[test]
    fn parse_place_malformed_returns_none() {
        assert_eq!(parse_command("place 1 2"), None);
        assert_eq!(parse_command("place a 2 D"), None);
        assert_eq!(parse_command("place 1 2 Q"), None);
        assert_eq!(parse_command("place 1 2 r5"), None);
        assert_eq!(parse_command("place 1 2 3"), None);
    }

    #[test]
    fn parse_erase() {
        assert_eq!(
            parse_command("erase 4 5"),
            Some(Command::Erase { pos: Pos::new(4, 5) })
        );
        assert_eq!(parse_command("erase 4"), None);
        assert_eq!(parse_command("erase -1 0"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  isready  "), Some(Command::IsReady));
        assert_eq!(parse_command("\tscores \n"), Some(Command::Scores));
    }
}
