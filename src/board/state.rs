//! Board state representation.
//!
//! Holds an immutable snapshot of a Kingdoms board: a rectangular grid of
//! cells stored row-major. Placement and erase are pure transforms that
//! return a new board, leaving the original untouched.

use std::fmt;
use std::ops::Index;

use serde::{Serialize, Serializer};

use super::piece::{Castle, Cell, Tile, TileKind};

/// Rows on the standard Kingdoms board.
pub const DEFAULT_ROWS: usize = 5;

/// Columns on the standard Kingdoms board.
pub const DEFAULT_COLS: usize = 6;

/// Errors raised when building or editing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("position {pos} is outside the {rows}x{cols} board")]
    OutOfBounds { pos: Pos, rows: usize, cols: usize },

    #[error("invalid face value {value} for {} tile", .kind.name())]
    InvalidTileValue { kind: TileKind, value: i32 },

    #[error("castle rank must be 1-4, got {0}")]
    InvalidRank(u8),
}

/// A zero-based board coordinate.
///
/// Positions are the keys that tie analysis statistics back to the tiles
/// and castles that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Serialized as "row,col" so positions can key JSON objects.
impl Serialize for Pos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{},{}", self.row, self.col))
    }
}

/// One of the two scoring axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    /// Unit step `(d_row, d_col)` in the positive direction of this axis.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Axis::Row => (0, 1),
            Axis::Col => (1, 0),
        }
    }
}

/// Orthogonal neighbor offsets: up, down, left, right.
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A complete board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    /// An empty 5x6 board.
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Board, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::ZeroDimension { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the position lies on the board.
    #[inline]
    pub const fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Returns the cell at `pos`, or `None` when off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// Moves one step from `pos` by `(dr, dc)`, returning `None` if the
    /// result falls off the board.
    #[inline]
    pub fn step(&self, pos: Pos, (dr, dc): (isize, isize)) -> Option<Pos> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Pos::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Orthogonally adjacent positions, clipped at the board edge.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        ORTHOGONAL
            .into_iter()
            .filter_map(move |d| self.step(pos, d))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Pos::new(i / cols, i % cols))
    }

    /// All cells paired with their positions, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Cells of a single row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns true if no tile or castle is on the board.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Returns a copy of this board with `cell` at `pos`, overwriting
    /// whatever was there.
    pub fn with_cell(&self, pos: Pos, cell: Cell) -> Result<Board, BoardError> {
        let mut next = self.clone();
        next.set(pos, cell)?;
        Ok(next)
    }

    /// Returns a copy of this board with `tile` placed at `pos`.
    pub fn with_tile(&self, pos: Pos, tile: Tile) -> Result<Board, BoardError> {
        self.with_cell(pos, Cell::Tile(tile))
    }

    /// Returns a copy of this board with `castle` placed at `pos`.
    pub fn with_castle(&self, pos: Pos, castle: Castle) -> Result<Board, BoardError> {
        self.with_cell(pos, Cell::Castle(castle))
    }

    /// Returns a copy of this board with the cell at `pos` cleared.
    pub fn erased(&self, pos: Pos) -> Result<Board, BoardError> {
        self.with_cell(pos, Cell::Empty)
    }

    /// Writes a cell in place. Only used while a board is being built.
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[pos.row * self.cols + pos.col] = cell;
        Ok(())
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    /// Panics if `pos` is off the board.
    #[inline]
    fn index(&self, pos: Pos) -> &Cell {
        assert!(self.contains(pos), "position {pos} is off the board");
        &self.cells[pos.row * self.cols + pos.col]
    }
}
