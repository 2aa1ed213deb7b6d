//! Player colors.
//!
//! Kingdoms is played by up to four players, each owning castles of one
//! color. The `#[repr(u8)]` discriminant doubles as an index into per-player
//! score arrays.

use serde::Serialize;

/// The number of player colors.
pub const PLAYER_COUNT: usize = 4;

/// A player color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PlayerColor {
    Red = 0,
    Blue = 1,
    Green = 2,
    Yellow = 3,
}

/// All four colors in seating order.
pub const ALL_COLORS: [PlayerColor; PLAYER_COUNT] = [
    PlayerColor::Red,
    PlayerColor::Blue,
    PlayerColor::Green,
    PlayerColor::Yellow,
];

impl PlayerColor {
    /// Returns the lowercase full name of this color.
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Yellow => "yellow",
        }
    }

    /// Returns the single lowercase character used in KFEN castle tokens.
    pub const fn kfen_char(self) -> char {
        match self {
            PlayerColor::Red => 'r',
            PlayerColor::Blue => 'b',
            PlayerColor::Green => 'g',
            PlayerColor::Yellow => 'y',
        }
    }

    /// Parses a color from its KFEN character.
    pub fn from_kfen_char(c: char) -> Option<PlayerColor> {
        match c {
            'r' => Some(PlayerColor::Red),
            'b' => Some(PlayerColor::Blue),
            'g' => Some(PlayerColor::Green),
            'y' => Some(PlayerColor::Yellow),
            _ => None,
        }
    }
}
