//! Board representation.
//!
//! Contains the core data structures for player colors, tiles, castles,
//! cells, and the board snapshot the scoring engine reads.

pub mod color;
pub mod piece;
pub mod random;
pub mod state;

pub use color::{PlayerColor, ALL_COLORS, PLAYER_COUNT};
pub use piece::{Castle, Cell, Tile, TileKind, MAX_RANK, MAX_TILE_VALUE, MIN_RANK};
pub use random::random_board;
pub use state::{Axis, Board, BoardError, Pos, DEFAULT_COLS, DEFAULT_ROWS};
