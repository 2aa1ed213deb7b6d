//! Engine state management.
//!
//! Holds one board per round, the active round, and engine options, and
//! answers the query commands of the main loop. Every query re-analyzes the
//! current snapshot from scratch.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::board::piece::Cell;
use crate::board::state::{BoardError, Pos, DEFAULT_COLS, DEFAULT_ROWS};
use crate::protocol::kfen::{encode_kfen, parse_kfen, KfenError};
use crate::rounds::{Rounds, DEFAULT_ROUNDS};
use crate::scoring::{analyze, scores_only, Scores};

/// Largest board dimension accepted from options.
const MAX_DIMENSION: usize = 64;

/// Largest round count accepted from options.
const MAX_ROUNDS: usize = 16;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub rounds: Rounds,
    pub options: HashMap<String, String>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates an engine with a standard three-round game.
    pub fn new() -> Self {
        Engine {
            rounds: Rounds::standard(),
            options: HashMap::new(),
        }
    }

    /// Sets an engine option. Takes effect at the next `newgame`.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Reads a numeric option in `1..=max`, falling back to `default`.
    fn option_usize(&self, name: &str, default: usize, max: usize) -> usize {
        self.options
            .get(name)
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| (1..=max).contains(v))
            .unwrap_or(default)
    }

    /// Configured board rows (default 5).
    fn rows(&self) -> usize {
        self.option_usize("Rows", DEFAULT_ROWS, MAX_DIMENSION)
    }

    /// Configured board columns (default 6).
    fn cols(&self) -> usize {
        self.option_usize("Cols", DEFAULT_COLS, MAX_DIMENSION)
    }

    /// Configured number of rounds (default 3).
    fn round_count(&self) -> usize {
        self.option_usize("Rounds", DEFAULT_ROUNDS, MAX_ROUNDS)
    }

    /// Resets every round to an empty board sized by the current options.
    pub fn new_game(&mut self) -> Result<(), BoardError> {
        self.rounds = Rounds::new(self.round_count(), self.rows(), self.cols())?;
        Ok(())
    }

    /// Selects the active round, 1-based.
    pub fn select_round(&mut self, number: usize) -> Result<(), String> {
        if number == 0 || !self.rounds.select(number - 1) {
            return Err(format!(
                "round {} out of range 1-{}",
                number,
                self.rounds.len()
            ));
        }
        Ok(())
    }

    /// Replaces the active board with a KFEN position.
    pub fn set_position(&mut self, kfen: &str) -> Result<(), KfenError> {
        let board = parse_kfen(kfen)?;
        self.rounds.replace(board);
        Ok(())
    }

    /// Places a tile or castle on the active board.
    pub fn place(&mut self, pos: Pos, cell: Cell) -> Result<(), BoardError> {
        let board = self.rounds.board().with_cell(pos, cell)?;
        self.rounds.replace(board);
        Ok(())
    }

    /// Clears a cell on the active board.
    pub fn erase(&mut self, pos: Pos) -> Result<(), BoardError> {
        let board = self.rounds.board().erased(pos)?;
        self.rounds.replace(board);
        Ok(())
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `board` command.
    pub fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "board {}", encode_kfen(self.rounds.board()))?;
        out.flush()
    }

    /// Handles the `scores` command for the active round.
    pub fn handle_scores<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let scores = scores_only(self.rounds.board());
        writeln!(out, "scores {}", format_scores(&scores))?;
        out.flush()
    }

    /// Handles the `total` command: scores summed over every round.
    pub fn handle_total<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "total {}", format_scores(&self.rounds.total()))?;
        out.flush()
    }

    /// Handles the `analyze` command: the full analysis as one JSON line.
    pub fn handle_analyze<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let analysis = analyze(self.rounds.board());
        let json = serde_json::to_string(&analysis)?;
        writeln!(out, "analysis {}", json)?;
        out.flush()
    }
}

/// Formats scores as `red <n> blue <n> green <n> yellow <n>`.
pub fn format_scores(scores: &Scores) -> String {
    scores
        .iter()
        .map(|(color, score)| format!("{} {}", color.name(), score))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Tile;

    const SAMPLE_KFEN: &str = "r2,+5,M,+4,b1,1/6/6/6/6";

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn new_engine_has_standard_game() {
        let engine = Engine::new();
        assert_eq!(engine.rounds.len(), 3);
        assert!(engine.rounds.board().is_empty());
        assert!(engine.options.is_empty());
    }

    #[test]
    fn set_option_stores_value() {
        let mut engine = Engine::new();
        engine.set_option("Rows".to_string(), Some("4".to_string()));
        assert_eq!(engine.options.get("Rows"), Some(&"4".to_string()));
    }

    #[test]
    fn new_game_applies_options() {
        let mut engine = Engine::new();
        engine.set_option("Rows".to_string(), Some("3".to_string()));
        engine.set_option("Cols".to_string(), Some("4".to_string()));
        engine.set_option("Rounds".to_string(), Some("2".to_string()));
        engine.new_game().unwrap();
        assert_eq!(engine.rounds.len(), 2);
        assert_eq!(engine.rounds.board().rows(), 3);
        assert_eq!(engine.rounds.board().cols(), 4);
    }

    #[test]
    fn invalid_options_fall_back_to_defaults() {
        let mut engine = Engine::new();
        engine.set_option("Rows".to_string(), Some("0".to_string()));
        engine.set_option("Cols".to_string(), Some("wide".to_string()));
        engine.set_option("Rounds".to_string(), None);
        engine.new_game().unwrap();
        assert_eq!(engine.rounds.len(), 3);
        assert_eq!(engine.rounds.board().rows(), 5);
        assert_eq!(engine.rounds.board().cols(), 6);
    }

    #[test]
    fn set_position_valid_and_invalid() {
        let mut engine = Engine::new();
        assert!(engine.set_position(SAMPLE_KFEN).is_ok());
        assert!(!engine.rounds.board().is_empty());
        assert!(engine.set_position("garbage").is_err());
        // Failed parse leaves the board untouched.
        assert_eq!(encode_kfen(engine.rounds.board()), SAMPLE_KFEN);
    }

    #[test]
    fn handle_scores_outputs_all_colors() {
        let mut engine = Engine::new();
        engine.set_position(SAMPLE_KFEN).unwrap();
        let out = output_of(|o| engine.handle_scores(o));
        // Red rank 2 sees +5 only (mountain blocks +4); blue rank 1 sees +4.
        assert_eq!(out.trim(), "scores red 10 blue 4 green 0 yellow 0");
    }

    #[test]
    fn place_and_erase_edit_active_round() {
        let mut engine = Engine::new();
        engine.set_position(SAMPLE_KFEN).unwrap();
        engine.place(Pos::new(1, 1), Cell::Tile(Tile::DRAGON)).unwrap();
        let out = output_of(|o| engine.handle_scores(o));
        assert_eq!(out.trim(), "scores red 0 blue 4 green 0 yellow 0");

        engine.erase(Pos::new(1, 1)).unwrap();
        let out = output_of(|o| engine.handle_board(o));
        assert_eq!(out.trim(), format!("board {}", SAMPLE_KFEN));

        assert!(engine.place(Pos::new(9, 0), Cell::Tile(Tile::DRAGON)).is_err());
    }

    #[test]
    fn rounds_total_across_boards() {
        let mut engine = Engine::new();
        engine.set_position(SAMPLE_KFEN).unwrap();
        engine.select_round(3).unwrap();
        engine.set_position(SAMPLE_KFEN).unwrap();
        assert!(engine.select_round(4).is_err());
        assert!(engine.select_round(0).is_err());

        let out = output_of(|o| engine.handle_total(o));
        assert_eq!(out.trim(), "total red 20 blue 8 green 0 yellow 0");
    }

    #[test]
    fn handle_analyze_outputs_json() {
        let mut engine = Engine::new();
        engine.set_position(SAMPLE_KFEN).unwrap();
        let out = output_of(|o| engine.handle_analyze(o));
        let json = out.trim().strip_prefix("analysis ").unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["scores"]["red"], 10);
        assert_eq!(value["castles"]["0,4"]["row_segment_total"], 4);
    }

    #[test]
    fn handle_isready_outputs_readyok() {
        let engine = Engine::new();
        let out = output_of(|o| engine.handle_isready(o));
        assert_eq!(out.trim(), "readyok");
    }
}
