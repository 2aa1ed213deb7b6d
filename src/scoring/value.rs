//! Effective tile values.
//!
//! Resources and hazards are modified by the dragons and gold mines found
//! anywhere in their row segment or column segment (the influencer set).
//! Dragons zero out resources but never hazards; gold mines then double
//! whatever value is left. Presence is boolean: a second dragon or gold
//! mine changes nothing.

use serde::Serialize;

use super::segment::{segment, Segment};
use crate::board::piece::{Tile, TileKind};
use crate::board::state::{Axis, Board, Pos};

/// A rule that altered a tile's value, in the order it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Modifier {
    Dragon,
    #[serde(rename = "Gold Mine")]
    GoldMine,
}

/// Dragon and gold-mine presence over a set of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Influence {
    pub dragon: bool,
    pub gold_mine: bool,
}

impl Influence {
    /// Scans the given positions for dragons and gold mines.
    pub fn scan(board: &Board, positions: impl IntoIterator<Item = Pos>) -> Influence {
        positions
            .into_iter()
            .fold(Influence::default(), |acc, pos| Influence {
                dragon: acc.dragon || board[pos].has_tile(TileKind::Dragon),
                gold_mine: acc.gold_mine || board[pos].has_tile(TileKind::GoldMine),
            })
    }

    /// Influence of a precomputed segment.
    pub fn of_segment(board: &Board, seg: &Segment) -> Influence {
        Influence::scan(board, seg.positions())
    }

    /// Combined influence of two cell sets.
    pub const fn union(self, other: Influence) -> Influence {
        Influence {
            dragon: self.dragon || other.dragon,
            gold_mine: self.gold_mine || other.gold_mine,
        }
    }
}

/// Computed value of one tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileStats {
    pub kind: TileKind,
    pub face_value: i32,
    pub effective_value: i32,
    pub modifiers: Vec<Modifier>,
}

impl TileStats {
    /// Returns true if the effective value differs from the face value.
    pub fn is_modified(&self) -> bool {
        self.effective_value != self.face_value
    }
}

/// Applies the dragon rule and then the gold-mine rule to `tile`.
///
/// Special tiles are not collected by castles and always resolve to zero
/// with no modifiers.
pub fn resolve(tile: Tile, influence: Influence) -> TileStats {
    let kind = tile.kind();
    if !kind.is_numeric() {
        return TileStats {
            kind,
            face_value: tile.value(),
            effective_value: 0,
            modifiers: Vec::new(),
        };
    }

    let mut value = tile.value();
    let mut modifiers = Vec::new();

    if kind == TileKind::Resource && influence.dragon {
        value = 0;
        modifiers.push(Modifier::Dragon);
    }
    if influence.gold_mine {
        value *= 2;
        modifiers.push(Modifier::GoldMine);
    }

    TileStats {
        kind,
        face_value: tile.value(),
        effective_value: value,
        modifiers,
    }
}

/// Resolves the tile at `pos` by walking its row and column segments.
/// Returns `None` if the cell holds no tile.
pub fn effective_value_at(board: &Board, pos: Pos) -> Option<TileStats> {
    let tile = board.get(pos)?.tile()?;
    if !tile.kind().is_numeric() {
        return Some(resolve(tile, Influence::default()));
    }
    let row = Influence::scan(board, segment(board, pos, Axis::Row));
    let col = Influence::scan(board, segment(board, pos, Axis::Col));
    Some(resolve(tile, row.union(col)))
}
