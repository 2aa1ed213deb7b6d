//! KFEN (Kingdoms FEN) encoding and decoding.
//!
//! KFEN is a compact single-line notation for a full Kingdoms board,
//! inspired by chess FEN. Rows are separated by `/`, cells within a row by
//! `,`. Every row must describe the same number of cells.
//!
//! Cell tokens:
//! - `n` (bare unsigned integer): `n` consecutive empty cells
//! - `+v`: resource worth `v`
//! - `-v`: hazard worth `-v`
//! - `M`, `D`, `G`, `W`: mountain, dragon, gold mine, wizard
//! - color letter + rank (`r1`, `b2`, `g3`, `y4`): castle
//!
//! The empty standard board is `6/6/6/6/6`.

use crate::board::color::PlayerColor;
use crate::board::piece::{Castle, Cell, Tile, TileKind};
use crate::board::state::{Board, BoardError, Pos};

/// Widest row accepted by the parser.
pub const MAX_ROW_WIDTH: usize = 256;

/// Errors that can occur during KFEN parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KfenError {
    #[error("empty KFEN string")]
    Empty,

    #[error("row {0} is empty")]
    EmptyRow(usize),

    #[error("row {row} has {width} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("row {0} is wider than {max} cells", max = MAX_ROW_WIDTH)]
    RowTooWide(usize),

    #[error("invalid cell token: '{0}'")]
    InvalidToken(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// One parsed token: a run of empty cells or a single occupied cell.
enum Token {
    Empty(usize),
    Cell(Cell),
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses the unsigned magnitude following a `+`/`-` sign.
fn parse_magnitude(digits: &str, token: &str) -> Result<i32, KfenError> {
    if !all_digits(digits) {
        return Err(KfenError::InvalidToken(token.to_string()));
    }
    digits
        .parse()
        .map_err(|_| KfenError::InvalidToken(token.to_string()))
}

fn parse_token(token: &str) -> Result<Token, KfenError> {
    let invalid = || KfenError::InvalidToken(token.to_string());

    if all_digits(token) {
        let n: usize = token.parse().map_err(|_| invalid())?;
        if n == 0 {
            return Err(invalid());
        }
        return Ok(Token::Empty(n));
    }

    if let Some(rest) = token.strip_prefix('+') {
        let tile = Tile::resource(parse_magnitude(rest, token)?)?;
        return Ok(Token::Cell(Cell::Tile(tile)));
    }
    if let Some(rest) = token.strip_prefix('-') {
        let tile = Tile::hazard(-parse_magnitude(rest, token)?)?;
        return Ok(Token::Cell(Cell::Tile(tile)));
    }

    let special = match token {
        "M" => Some(Tile::MOUNTAIN),
        "D" => Some(Tile::DRAGON),
        "G" => Some(Tile::GOLD_MINE),
        "W" => Some(Tile::WIZARD),
        _ => None,
    };
    if let Some(tile) = special {
        return Ok(Token::Cell(Cell::Tile(tile)));
    }

    let mut chars = token.chars();
    let color = chars
        .next()
        .and_then(PlayerColor::from_kfen_char)
        .ok_or_else(invalid)?;
    let rank_str = chars.as_str();
    if !all_digits(rank_str) {
        return Err(invalid());
    }
    let rank: u8 = rank_str.parse().map_err(|_| invalid())?;
    Ok(Token::Cell(Cell::Castle(Castle::new(color, rank)?)))
}

/// Parses a single occupied-cell token such as `+3`, `D` or `y2`.
///
/// Empty-run counts are rejected: a lone cell is either a tile or a castle.
pub fn parse_cell(token: &str) -> Result<Cell, KfenError> {
    match parse_token(token)? {
        Token::Cell(cell) => Ok(cell),
        Token::Empty(_) => Err(KfenError::InvalidToken(token.to_string())),
    }
}

/// Parses a KFEN string into a Board.
pub fn parse_kfen(s: &str) -> Result<Board, KfenError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(KfenError::Empty);
    }

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for (r, row_str) in s.split('/').enumerate() {
        if row_str.is_empty() {
            return Err(KfenError::EmptyRow(r));
        }
        let mut cells = Vec::new();
        for token in row_str.split(',') {
            let (cell, n) = match parse_token(token)? {
                Token::Empty(n) => (Cell::Empty, n),
                Token::Cell(cell) => (cell, 1),
            };
            if cells.len().saturating_add(n) > MAX_ROW_WIDTH {
                return Err(KfenError::RowTooWide(r));
            }
            cells.extend(std::iter::repeat(cell).take(n));
        }
        rows.push(cells);
    }

    let expected = rows[0].len();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(KfenError::RaggedRow {
                row,
                width: cells.len(),
                expected,
            });
        }
    }

    let mut board = Board::new(rows.len(), expected)?;
    for (r, cells) in rows.into_iter().enumerate() {
        for (c, cell) in cells.into_iter().enumerate() {
            board.set(Pos::new(r, c), cell)?;
        }
    }
    Ok(board)
}

/// Encodes one occupied cell. Empty cells encode as `1`.
pub fn encode_cell(cell: Cell) -> String {
    match cell {
        Cell::Empty => "1".to_string(),
        Cell::Castle(castle) => format!("{}{}", castle.color().kfen_char(), castle.rank()),
        Cell::Tile(tile) => match tile.kind() {
            TileKind::Resource => format!("+{}", tile.value()),
            TileKind::Hazard => tile.value().to_string(),
            TileKind::Mountain => "M".to_string(),
            TileKind::Dragon => "D".to_string(),
            TileKind::GoldMine => "G".to_string(),
            TileKind::Wizard => "W".to_string(),
        },
    }
}

/// Encodes a Board into canonical KFEN: consecutive empty cells collapse
/// into a single count.
pub fn encode_kfen(board: &Board) -> String {
    let mut rows = Vec::with_capacity(board.rows());

    for r in 0..board.rows() {
        let mut tokens: Vec<String> = Vec::new();
        let mut empties = 0usize;
        for &cell in board.row(r) {
            if cell.is_empty() {
                empties += 1;
                continue;
            }
            if empties > 0 {
                tokens.push(empties.to_string());
                empties = 0;
            }
            tokens.push(encode_cell(cell));
        }
        if empties > 0 {
            tokens.push(empties.to_string());
        }
        rows.push(tokens.join(","));
    }

    rows.join("/")
}
