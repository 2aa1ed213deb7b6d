//! Castle scoring.
//!
//! A castle collects the effective values of every tile in its row segment
//! and in its column segment, each multiplied by the castle's effective
//! rank. Wizards on the four orthogonally adjacent cells each raise that
//! rank by one; they act on contact only and mountains do not block them.

use serde::Serialize;

use super::segment::segment;
use super::value::effective_value_at;
use crate::board::color::PlayerColor;
use crate::board::piece::{Castle, TileKind};
use crate::board::state::{Axis, Board, Pos};

/// Number of wizards orthogonally adjacent to `pos`.
pub fn wizard_bonus(board: &Board, pos: Pos) -> u8 {
    board
        .neighbors(pos)
        .filter(|&p| board[p].has_tile(TileKind::Wizard))
        .count() as u8
}

/// Computed contribution of one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CastleStats {
    pub color: PlayerColor,
    pub rank: u8,
    pub wizard_bonus: u8,
    /// Base rank plus wizard bonus. Applies to both axes.
    pub effective_rank: i32,
    pub row_segment_total: i32,
    pub col_segment_total: i32,
    /// Points added to the owner's score.
    pub score: i32,
}

impl CastleStats {
    pub fn new(
        castle: Castle,
        wizard_bonus: u8,
        row_segment_total: i32,
        col_segment_total: i32,
    ) -> Self {
        let effective_rank = i32::from(castle.rank()) + i32::from(wizard_bonus);
        CastleStats {
            color: castle.color(),
            rank: castle.rank(),
            wizard_bonus,
            effective_rank,
            row_segment_total,
            col_segment_total,
            score: row_segment_total
                .saturating_mul(effective_rank)
                .saturating_add(col_segment_total.saturating_mul(effective_rank)),
        }
    }
}

/// Scores the castle at `pos` by walking its segments and resolving each
/// tile found there. Returns `None` if the cell holds no castle.
pub fn castle_stats_at(board: &Board, pos: Pos) -> Option<CastleStats> {
    let castle = board.get(pos)?.castle()?;
    let total = |axis: Axis| -> i32 {
        segment(board, pos, axis)
            .into_iter()
            .filter_map(|p| effective_value_at(board, p))
            .fold(0i32, |acc, s| acc.saturating_add(s.effective_value))
    };
    Some(CastleStats::new(
        castle,
        wizard_bonus(board, pos),
        total(Axis::Row),
        total(Axis::Col),
    ))
}
