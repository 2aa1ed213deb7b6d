//! Random board generation.
//!
//! Produces arbitrary but well-formed boards drawn from the physical tile
//! set (resources and hazards 1-6, the four special tiles, castles of rank
//! 1-4). Used by benchmarks and by property-style tests that compare the
//! scoring engine against independent reference computations.

use rand::Rng;

use super::color::ALL_COLORS;
use super::piece::{Castle, Cell, Tile, MAX_RANK, MIN_RANK};
use super::state::{Board, BoardError, Pos};

/// Largest face value printed on a resource or hazard tile.
pub const MAX_FACE_VALUE: i32 = 6;

/// Generates a random board. Each cell is occupied with probability
/// `density` (clamped to `[0, 1]`); occupied cells are castles one time in
/// three and tiles otherwise.
pub fn random_board<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    density: f64,
) -> Result<Board, BoardError> {
    let mut board = Board::new(rows, cols)?;
    let density = density.clamp(0.0, 1.0);

    for row in 0..rows {
        for col in 0..cols {
            if !rng.gen_bool(density) {
                continue;
            }
            let cell = if rng.gen_ratio(1, 3) {
                random_castle(rng)
            } else {
                random_tile(rng)
            };
            board.set(Pos::new(row, col), cell)?;
        }
    }

    Ok(board)
}

fn random_castle<R: Rng>(rng: &mut R) -> Cell {
    let color = ALL_COLORS[rng.gen_range(0..ALL_COLORS.len())];
    let rank = rng.gen_range(MIN_RANK..=MAX_RANK);
    Castle::new(color, rank).map_or(Cell::Empty, Cell::Castle)
}

fn random_tile<R: Rng>(rng: &mut R) -> Cell {
    let face = rng.gen_range(1..=MAX_FACE_VALUE);
    let tile = match rng.gen_range(0..8) {
        0..=1 => Tile::resource(face),
        2..=3 => Tile::hazard(-face),
        4 => Ok(Tile::MOUNTAIN),
        5 => Ok(Tile::DRAGON),
        6 => Ok(Tile::GOLD_MINE),
        _ => Ok(Tile::WIZARD),
    };
    tile.map_or(Cell::Empty, Cell::Tile)
}
