//! Mountain-delimited segments.
//!
//! A segment is the maximal run of cells along one axis that contains a
//! given cell and is not interrupted by a mountain. Mountains belong to no
//! segment; they only wall segments off.
//!
//! Two views are provided. `segment` walks outward from one cell and is the
//! direct answer for a single query. `SegmentMap` scans every row and column
//! once and assigns each non-mountain cell a row-segment id and a
//! column-segment id, which is what full-board analysis uses.

use crate::board::state::{Axis, Board, Pos};

/// Returns the ordered positions of the segment containing `start` along
/// `axis`. Empty if `start` is off the board or holds a mountain.
pub fn segment(board: &Board, start: Pos, axis: Axis) -> Vec<Pos> {
    match board.get(start) {
        Some(cell) if !cell.is_mountain() => {}
        _ => return Vec::new(),
    }

    let (dr, dc) = axis.delta();

    // Back up to the near boundary.
    let mut first = start;
    while let Some(prev) = board.step(first, (-dr, -dc)) {
        if board[prev].is_mountain() {
            break;
        }
        first = prev;
    }

    let mut cells = Vec::new();
    let mut next = Some(first);
    while let Some(pos) = next {
        if board[pos].is_mountain() {
            break;
        }
        cells.push(pos);
        next = board.step(pos, (dr, dc));
    }
    cells
}

/// A contiguous run `[start, end)` of offsets along one line of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub axis: Axis,
    /// Row index for row segments, column index for column segments.
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Positions covered by this segment, in increasing order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (self.start..self.end).map(move |offset| at(self.axis, self.line, offset))
    }
}

/// Maps a `(line, offset)` pair on `axis` back to a board position.
#[inline]
const fn at(axis: Axis, line: usize, offset: usize) -> Pos {
    match axis {
        Axis::Row => Pos::new(line, offset),
        Axis::Col => Pos::new(offset, line),
    }
}

/// Row and column segment assignment for every cell of a board.
#[derive(Debug, Clone)]
pub struct SegmentMap {
    cols: usize,
    segments: Vec<Segment>,
    row_ids: Vec<Option<usize>>,
    col_ids: Vec<Option<usize>>,
}

impl SegmentMap {
    /// Scans each row and each column once.
    pub fn build(board: &Board) -> SegmentMap {
        let cell_count = board.rows() * board.cols();
        let mut map = SegmentMap {
            cols: board.cols(),
            segments: Vec::new(),
            row_ids: vec![None; cell_count],
            col_ids: vec![None; cell_count],
        };

        for (axis, lines, len) in [
            (Axis::Row, board.rows(), board.cols()),
            (Axis::Col, board.cols(), board.rows()),
        ] {
            for line in 0..lines {
                let mut open: Option<usize> = None;
                for offset in 0..=len {
                    let wall = offset == len || board[at(axis, line, offset)].is_mountain();
                    match (wall, open) {
                        (true, Some(start)) => {
                            map.push(Segment {
                                axis,
                                line,
                                start,
                                end: offset,
                            });
                            open = None;
                        }
                        (false, None) => open = Some(offset),
                        _ => {}
                    }
                }
            }
        }

        map
    }

    fn push(&mut self, seg: Segment) {
        let id = self.segments.len();
        self.segments.push(seg);
        for pos in seg.positions() {
            let idx = pos.row * self.cols + pos.col;
            match seg.axis {
                Axis::Row => self.row_ids[idx] = Some(id),
                Axis::Col => self.col_ids[idx] = Some(id),
            }
        }
    }

    /// Number of segments across both axes.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The segment id containing `pos` along `axis`. `None` for mountains
    /// and off-board positions.
    #[inline]
    pub fn id(&self, pos: Pos, axis: Axis) -> Option<usize> {
        if pos.col >= self.cols {
            return None;
        }
        let idx = pos.row * self.cols + pos.col;
        let ids = match axis {
            Axis::Row => &self.row_ids,
            Axis::Col => &self.col_ids,
        };
        ids.get(idx).copied().flatten()
    }

    /// Row and column segment ids of `pos`.
    #[inline]
    pub fn ids(&self, pos: Pos) -> Option<(usize, usize)> {
        Some((self.id(pos, Axis::Row)?, self.id(pos, Axis::Col)?))
    }

    /// The segment containing `pos` along `axis`.
    pub fn get(&self, pos: Pos, axis: Axis) -> Option<&Segment> {
        self.id(pos, axis).map(|id| &self.segments[id])
    }
}
