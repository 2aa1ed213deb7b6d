//! Multi-round bookkeeping.
//!
//! A game of Kingdoms runs over several epochs, each played on a fresh
//! board. Rounds are scored independently and the grand total is the sum of
//! the per-round scores. Rounds are analyzed in parallel with rayon.

use rayon::prelude::*;

use crate::board::state::{Board, BoardError};
use crate::scoring::{analyze, GameAnalysis, Scores};

/// Epochs in a standard game.
pub const DEFAULT_ROUNDS: usize = 3;

/// Analyzes every board, preserving order.
pub fn analyze_rounds(boards: &[Board]) -> Vec<GameAnalysis> {
    boards.par_iter().map(analyze).collect()
}

/// Sums per-round scores across all boards.
pub fn total_scores(boards: &[Board]) -> Scores {
    boards.par_iter().map(|b| analyze(b).scores).sum()
}

/// One board per round plus the index of the round being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rounds {
    boards: Vec<Board>,
    active: usize,
}

impl Default for Rounds {
    fn default() -> Self {
        Rounds {
            boards: vec![Board::default(); DEFAULT_ROUNDS],
            active: 0,
        }
    }
}

impl Rounds {
    /// Creates `count` empty boards of the given size. At least one round is
    /// always kept.
    pub fn new(count: usize, rows: usize, cols: usize) -> Result<Rounds, BoardError> {
        let board = Board::new(rows, cols)?;
        Ok(Rounds {
            boards: vec![board; count.max(1)],
            active: 0,
        })
    }

    /// Standard game: three empty 5x6 boards.
    pub fn standard() -> Rounds {
        Rounds::default()
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Zero-based index of the active round.
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Selects the active round. Returns false if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.boards.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn board(&self) -> &Board {
        &self.boards[self.active]
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Replaces the active round's board.
    pub fn replace(&mut self, board: Board) {
        self.boards[self.active] = board;
    }

    /// Grand total across every round.
    pub fn total(&self) -> Scores {
        total_scores(&self.boards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::PlayerColor;
    use crate::board::piece::{Castle, Tile};
    use crate::board::random::random_board;
    use crate::board::state::Pos;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn standard_has_three_empty_rounds() {
        let rounds = Rounds::standard();
        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds.active(), 0);
        assert!(rounds.boards().iter().all(Board::is_empty));
        assert_eq!(rounds.total(), Scores::default());
    }

    #[test]
    fn select_checks_range() {
        let mut rounds = Rounds::standard();
        assert!(rounds.select(2));
        assert_eq!(rounds.active(), 2);
        assert!(!rounds.select(3));
        assert_eq!(rounds.active(), 2);
    }

    #[test]
    fn replace_only_touches_active_round() {
        let mut rounds = Rounds::standard();
        rounds.select(1);
        let board = Board::default()
            .with_castle(Pos::new(0, 0), Castle::new(PlayerColor::Blue, 2).unwrap())
            .and_then(|b| b.with_tile(Pos::new(0, 5), Tile::resource(3).unwrap()))
            .unwrap();
        rounds.replace(board.clone());
        assert!(rounds.boards()[0].is_empty());
        assert_eq!(rounds.boards()[1], board);
        assert_eq!(rounds.total()[PlayerColor::Blue], 6);
    }

    #[test]
    fn parallel_total_matches_sequential_sum() {
        let mut rng = SmallRng::seed_from_u64(3);
        let boards: Vec<Board> = (0..3)
            .map(|_| random_board(&mut rng, 5, 6, 0.7).unwrap())
            .collect();
        let sequential = boards
            .iter()
            .fold(Scores::default(), |acc, b| acc + analyze(b).scores);
        assert_eq!(total_scores(&boards), sequential);

        let analyses = analyze_rounds(&boards);
        assert_eq!(analyses.len(), 3);
        for (a, b) in analyses.iter().zip(&boards) {
            assert_eq!(*a, analyze(b));
        }
    }

    #[test]
    fn zero_rounds_keeps_one() {
        let rounds = Rounds::new(0, 4, 4).unwrap();
        assert_eq!(rounds.len(), 1);
        assert!(Rounds::new(2, 0, 4).is_err());
    }
}
