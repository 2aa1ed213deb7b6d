//! Full-board analysis.
//!
//! Runs the two scoring phases over one board snapshot:
//!
//! 1. Segment influences and effective tile values. Every segment's dragon
//!    and gold-mine presence is computed once, then each resource or hazard
//!    combines the influence of its row and column segments. Effective
//!    values are accumulated into per-segment sums as they are resolved.
//! 2. Castle scores. Each castle reads the sums of its two segments,
//!    applies its effective rank, and adds the result to its owner.
//!
//! Total work is linear in the number of cells.

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Index};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::castle::{wizard_bonus, CastleStats};
use super::segment::SegmentMap;
use super::value::{resolve, Influence, TileStats};
use crate::board::color::{PlayerColor, ALL_COLORS, PLAYER_COUNT};
use crate::board::piece::Cell;
use crate::board::state::{Board, Pos};

/// Score per player color. Every color is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scores([i32; PLAYER_COUNT]);

impl Scores {
    pub const fn get(&self, color: PlayerColor) -> i32 {
        self.0[color as usize]
    }

    /// Adds `points` to `color`'s total, saturating at the `i32` bounds.
    pub fn credit(&mut self, color: PlayerColor, points: i32) {
        let total = &mut self.0[color as usize];
        *total = total.saturating_add(points);
    }

    /// `(color, score)` pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, i32)> + '_ {
        ALL_COLORS.iter().map(move |&c| (c, self.get(c)))
    }

    /// Colors ordered by descending score. Ties keep seating order.
    pub fn standings(&self) -> Vec<(PlayerColor, i32)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

impl Index<PlayerColor> for Scores {
    type Output = i32;

    fn index(&self, color: PlayerColor) -> &i32 {
        &self.0[color as usize]
    }
}

impl AddAssign for Scores {
    fn add_assign(&mut self, rhs: Scores) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a = a.saturating_add(b);
        }
    }
}

impl Add for Scores {
    type Output = Scores;

    fn add(mut self, rhs: Scores) -> Scores {
        self += rhs;
        self
    }
}

impl std::iter::Sum for Scores {
    fn sum<I: Iterator<Item = Scores>>(iter: I) -> Scores {
        iter.fold(Scores::default(), Add::add)
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PLAYER_COUNT))?;
        for (color, score) in self.iter() {
            map.serialize_entry(color.name(), &score)?;
        }
        map.end()
    }
}

/// Everything computed from one board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameAnalysis {
    pub scores: Scores,
    /// Stats for every tile on the board, keyed by position.
    pub tiles: BTreeMap<Pos, TileStats>,
    /// Stats for every castle on the board, keyed by position.
    pub castles: BTreeMap<Pos, CastleStats>,
}

/// Analyzes a board: effective tile values, castle contributions, and
/// per-player totals.
pub fn analyze(board: &Board) -> GameAnalysis {
    let segments = SegmentMap::build(board);
    let influence: Vec<Influence> = segments
        .segments()
        .iter()
        .map(|seg| Influence::of_segment(board, seg))
        .collect();
    let mut sums = vec![0i32; segments.len()];

    let mut analysis = GameAnalysis::default();

    for (pos, cell) in board.cells() {
        let Cell::Tile(tile) = cell else {
            continue;
        };
        let stats = match segments.ids(pos) {
            Some((row, col)) if tile.kind().is_numeric() => {
                let stats = resolve(tile, influence[row].union(influence[col]));
                sums[row] = sums[row].saturating_add(stats.effective_value);
                sums[col] = sums[col].saturating_add(stats.effective_value);
                stats
            }
            _ => resolve(tile, Influence::default()),
        };
        analysis.tiles.insert(pos, stats);
    }

    for (pos, cell) in board.cells() {
        let Cell::Castle(castle) = cell else {
            continue;
        };
        // Castles are never mountains, so both ids exist.
        let (row_total, col_total) = segments
            .ids(pos)
            .map_or((0, 0), |(row, col)| (sums[row], sums[col]));
        let stats = CastleStats::new(castle, wizard_bonus(board, pos), row_total, col_total);
        analysis.scores.credit(stats.color, stats.score);
        analysis.castles.insert(pos, stats);
    }

    analysis
}

/// Per-player scores only.
pub fn scores_only(board: &Board) -> Scores {
    analyze(board).scores
}
