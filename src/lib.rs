//! Kingdoms scoring engine library.
//!
//! Exposes the board representation, the scoring engine, multi-round
//! bookkeeping, and the protocol modules for use by integration tests and
//! the binary entry point.

pub mod board;
pub mod engine;
pub mod protocol;
pub mod rounds;
pub mod scoring;

pub use board::{Board, Castle, Cell, PlayerColor, Pos, Tile, TileKind};
pub use scoring::{analyze, scores_only, GameAnalysis, Scores};
