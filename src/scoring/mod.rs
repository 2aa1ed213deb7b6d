//! Scoring engine.
//!
//! Resolves effective tile values and castle contributions for a board
//! snapshot. Every entry point is a pure function of the board.

pub mod analysis;
pub mod castle;
pub mod segment;
pub mod value;

pub use analysis::{analyze, scores_only, GameAnalysis, Scores};
pub use castle::{castle_stats_at, wizard_bonus, CastleStats};
pub use segment::{segment, Segment, SegmentMap};
pub use value::{effective_value_at, resolve, Influence, Modifier, TileStats};
