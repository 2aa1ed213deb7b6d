//! Tiles, castles, and the cells that hold them.
//!
//! A cell holds at most one piece: a tile or a castle, never both. The
//! `Cell` enum makes that exclusivity structural. Tile and castle
//! constructors validate face values and ranks, so every value reachable
//! from the scoring engine is well formed.

use serde::Serialize;

use super::color::PlayerColor;
use super::state::BoardError;

/// The lowest castle rank.
pub const MIN_RANK: u8 = 1;

/// The highest castle rank.
pub const MAX_RANK: u8 = 4;

/// Largest face-value magnitude accepted for a resource or hazard.
///
/// Physical tiles print 1-6; the cap leaves room for variants while keeping
/// doubled values and castle multipliers far from `i32` overflow.
pub const MAX_TILE_VALUE: i32 = 999;

/// The kind of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TileKind {
    Resource,
    Hazard,
    Mountain,
    Dragon,
    GoldMine,
    Wizard,
}

impl TileKind {
    /// Returns the display name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TileKind::Resource => "Resource",
            TileKind::Hazard => "Hazard",
            TileKind::Mountain => "Mountain",
            TileKind::Dragon => "Dragon",
            TileKind::GoldMine => "Gold Mine",
            TileKind::Wizard => "Wizard",
        }
    }

    /// Returns true for the kinds that carry a face value and are collected
    /// by castles.
    pub const fn is_numeric(self) -> bool {
        matches!(self, TileKind::Resource | TileKind::Hazard)
    }
}

/// A tile placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    kind: TileKind,
    value: i32,
}

impl Tile {
    pub const MOUNTAIN: Tile = Tile::special(TileKind::Mountain);
    pub const DRAGON: Tile = Tile::special(TileKind::Dragon);
    pub const GOLD_MINE: Tile = Tile::special(TileKind::GoldMine);
    pub const WIZARD: Tile = Tile::special(TileKind::Wizard);

    const fn special(kind: TileKind) -> Tile {
        Tile { kind, value: 0 }
    }

    /// Creates a tile, checking that the face value matches the kind:
    /// `1..=MAX_TILE_VALUE` for resources, its negation for hazards, zero
    /// otherwise.
    pub fn new(kind: TileKind, value: i32) -> Result<Tile, BoardError> {
        let ok = match kind {
            TileKind::Resource => (1..=MAX_TILE_VALUE).contains(&value),
            TileKind::Hazard => (-MAX_TILE_VALUE..=-1).contains(&value),
            _ => value == 0,
        };
        if !ok {
            return Err(BoardError::InvalidTileValue { kind, value });
        }
        Ok(Tile { kind, value })
    }

    /// Creates a resource tile with a positive face value.
    pub fn resource(value: i32) -> Result<Tile, BoardError> {
        Tile::new(TileKind::Resource, value)
    }

    /// Creates a hazard tile with a negative face value.
    pub fn hazard(value: i32) -> Result<Tile, BoardError> {
        Tile::new(TileKind::Hazard, value)
    }

    pub const fn kind(self) -> TileKind {
        self.kind
    }

    /// The printed face value. Zero for special tiles.
    pub const fn value(self) -> i32 {
        self.value
    }
}

/// A castle owned by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castle {
    color: PlayerColor,
    rank: u8,
}

impl Castle {
    /// Creates a castle. Ranks outside 1..=4 are rejected.
    pub fn new(color: PlayerColor, rank: u8) -> Result<Castle, BoardError> {
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(BoardError::InvalidRank(rank));
        }
        Ok(Castle { color, rank })
    }

    pub const fn color(self) -> PlayerColor {
        self.color
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }
}

/// The contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Tile(Tile),
    Castle(Castle),
}

impl Cell {
    /// Returns the tile in this cell, if any.
    pub const fn tile(self) -> Option<Tile> {
        match self {
            Cell::Tile(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the castle in this cell, if any.
    pub const fn castle(self) -> Option<Castle> {
        match self {
            Cell::Castle(c) => Some(c),
            _ => None,
        }
    }

    /// Returns true if this cell holds a tile of the given kind.
    #[inline]
    pub fn has_tile(self, kind: TileKind) -> bool {
        matches!(self, Cell::Tile(t) if t.kind == kind)
    }

    /// Mountains wall off segments along both axes.
    #[inline]
    pub fn is_mountain(self) -> bool {
        self.has_tile(TileKind::Mountain)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Tile> for Cell {
    fn from(tile: Tile) -> Self {
        Cell::Tile(tile)
    }
}

impl From<Castle> for Cell {
    fn from(castle: Castle) -> Self {
        Cell::Castle(castle)
    }
}
