//! Roman numeral conversion engine.
//!
//! Formats integers as roman numerals and parses them back under three
//! symbol-ordering disciplines ([`SymbolMode`]) and three large-number
//! notations ([`LargeMode`]). Parsing always validates the input against the
//! mode pair's grammar before any value is computed.

pub mod error;
pub mod format;
pub mod grammar;
pub mod mode;
pub mod parse;
pub mod settings;
pub mod symbol;
pub mod value;

#[cfg(test)]
mod proptests;

pub use error::NumeralError;
pub use format::{format, format_default, format_with, GlyphStyle};
pub use grammar::validate;
pub use mode::{LargeMode, SymbolMode};
pub use parse::{parse, parse_default};
pub use symbol::{best_symbol_for, symbol_of, Symbol};
pub use value::NumeralValue;

/// Largest value that can be formatted or parsed (`2^31 - 1`).
pub const MAX_VALUE: u32 = i32::MAX as u32;
