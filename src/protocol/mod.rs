//! Engine protocol handling.
//!
//! This module implements KFEN board notation and the command parser for
//! the line-oriented engine main loop.

pub mod kfen;
pub mod parser;

pub use kfen::{encode_cell, encode_kfen, parse_cell, parse_kfen, KfenError};
pub use parser::{parse_command, Command};
