//! Roman numeral engine facade.
//!
//! Re-exports the conversion API from `roman_core` and owns process-level
//! concerns such as trace output.

pub mod trace_init;

pub use roman_core::error::NumeralError;
pub use roman_core::format::{format, format_default, format_with, GlyphStyle};
pub use roman_core::grammar::{is_valid, normalize, pattern_source, validate};
pub use roman_core::mode::{LargeMode, SymbolMode};
pub use roman_core::parse::{parse, parse_default};
pub use roman_core::settings::{self, settings, Settings, SettingsError};
pub use roman_core::symbol::{best_symbol_for, symbol_of, Symbol};
pub use roman_core::value::NumeralValue;
pub use roman_core::MAX_VALUE;
pub use trace_init::{init_tracing, TraceInitError, TRACE_FILE_NAME};

/// Format with the `[format]` defaults from [`settings()`].
pub fn format_configured(value: i64) -> Result<String, NumeralError> {
    let f = &settings().format;
    format_with(value, f.large_mode, f.symbol_mode, f.glyphs)
}

/// Parse with the `[parse]` defaults from [`settings()`].
pub fn parse_configured(text: &str) -> Result<u32, NumeralError> {
    let p = &settings().parse;
    parse(text, p.symbol_mode, p.large_mode)
}
