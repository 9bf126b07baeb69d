//! Integer to numeral text.
//!
//! Values below 5,000 always use greedy repetition. Above that, the large
//! mode decides how the thousands are written: plain `M` runs, apostrophus
//! bracket groups, or cifrão-separated thousand groups.

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::error::NumeralError;
use crate::mode::{LargeMode, SymbolMode};
use crate::symbol::{best_symbol_for, Symbol, CLOSER_ALIAS};
use crate::MAX_VALUE;

/// Smallest value written with large-number notation.
pub const LARGE_THRESHOLD: i64 = 5000;

/// Run contractions applied to greedy output, in this order. Each is a
/// single left-to-right replace; output is not rescanned.
const CONTRACTIONS: [(&str, &str); 6] = [
    ("DCCCC", "CM"),
    ("CCCC", "CD"),
    ("LXXXX", "XC"),
    ("XXXX", "XL"),
    ("VIIII", "IX"),
    ("IIII", "IV"),
];

/// Glyph used for the mirrored C on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    #[default]
    Canonical,
    /// Write `)` so output stays ASCII.
    Ascii,
}

impl GlyphStyle {
    fn closer(self) -> char {
        match self {
            GlyphStyle::Canonical => Symbol::Closer.glyph(),
            GlyphStyle::Ascii => CLOSER_ALIAS,
        }
    }
}

/// Format with the common defaults: no large-number notation, strict symbols.
pub fn format_default(value: i64) -> Result<String, NumeralError> {
    format(value, LargeMode::Simple, SymbolMode::Strict)
}

/// Format `value` with canonical glyphs.
pub fn format(
    value: i64,
    large_mode: LargeMode,
    symbol_mode: SymbolMode,
) -> Result<String, NumeralError> {
    format_with(value, large_mode, symbol_mode, GlyphStyle::Canonical)
}

pub fn format_with(
    value: i64,
    large_mode: LargeMode,
    symbol_mode: SymbolMode,
    glyphs: GlyphStyle,
) -> Result<String, NumeralError> {
    if !(0..=i64::from(MAX_VALUE)).contains(&value) {
        return Err(NumeralError::InvalidMagnitude { value });
    }
    let _span = debug_span!("format", value, %large_mode, %symbol_mode).entered();

    if value < LARGE_THRESHOLD {
        return format_simple(value, symbol_mode);
    }
    match large_mode {
        LargeMode::Simple => format_simple(value, symbol_mode),
        LargeMode::Apostrophus => format_apostrophus(value, symbol_mode, glyphs),
        LargeMode::Cifrao => format_cifrao(value, symbol_mode),
    }
}

/// Greedy repetition, then run contraction unless the mode is primitive.
pub(crate) fn format_simple(value: i64, symbol_mode: SymbolMode) -> Result<String, NumeralError> {
    let mut out = String::new();
    let mut rest = value;
    while rest > 0 {
        let sym = best_symbol_for(rest)?;
        out.push(sym.glyph());
        rest -= i64::from(sym.value().unwrap_or(0));
        if rest < 0 {
            return Err(NumeralError::Internal(format!(
                "negative remainder {rest} while formatting {value}"
            )));
        }
    }
    if symbol_mode == SymbolMode::Primitive {
        return Ok(out);
    }
    for (from, to) in CONTRACTIONS {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    Ok(out)
}

fn format_apostrophus(
    value: i64,
    symbol_mode: SymbolMode,
    glyphs: GlyphStyle,
) -> Result<String, NumeralError> {
    let mut groups: Vec<String> = Vec::new();
    let mut thousands = value / 1000;
    let mut arcs = 1usize;
    while thousands > 0 {
        let digit = (thousands % 10) as u8;
        if digit > 0 {
            groups.push(digit_groups(digit, arcs, glyphs.closer()));
        }
        thousands /= 10;
        arcs += 1;
    }
    groups.reverse();

    let mut out = groups.concat();
    out.push_str(&format_simple(value % 1000, symbol_mode)?);
    Ok(out)
}

/// Bracket groups for one decimal digit of the thousands at `arcs` depth.
///
/// A unit group is `arcs` C's, the divider, and `arcs` closers. The half
/// group drops the C's and has `arcs + 1` closers. Digits above five are the
/// half group followed by unit groups.
fn digit_groups(digit: u8, arcs: usize, closer: char) -> String {
    let mut out = String::new();
    let mut units = digit;
    if digit >= 5 {
        out.push(Symbol::Divider.glyph());
        out.extend(std::iter::repeat(closer).take(arcs + 1));
        units -= 5;
    }
    for _ in 0..units {
        out.extend(std::iter::repeat(Symbol::C.glyph()).take(arcs));
        out.push(Symbol::Divider.glyph());
        out.extend(std::iter::repeat(closer).take(arcs));
    }
    out
}

fn format_cifrao(value: i64, symbol_mode: SymbolMode) -> Result<String, NumeralError> {
    let mut segments: Vec<String> = Vec::new();
    let mut rest = value;
    while rest > 1000 {
        segments.push(format_simple(rest % 1000, symbol_mode)?);
        rest /= 1000;
    }
    let mut out = format_simple(rest, symbol_mode)?;
    for segment in segments.iter().rev() {
        out.push(Symbol::Cifrao.glyph());
        out.push_str(segment);
    }
    Ok(out)
}
