//! Whole-string acceptance check per (symbol mode, large mode) pair.
//!
//! Each pair owns an anchored regular expression built from the symbol-mode
//! grammar wrapped in the large-mode structure. All nine patterns are
//! compiled once on first use and shared for the life of the process.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::NumeralError;
use crate::mode::{LargeMode, SymbolMode};
use crate::symbol::CLOSER_GLYPH;

fn symbol_grammar(mode: SymbolMode) -> &'static str {
    match mode {
        SymbolMode::Primitive => "M*D*C*L*X*V*I*",
        // at most three repeats below M; subtractive pairs only before the next two powers
        SymbolMode::Strict => "M*(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})",
        SymbolMode::Relaxed => "[MDCLXVI]*",
    }
}

/// Pattern text for a mode pair, without anchors.
pub fn pattern_source(symbol_mode: SymbolMode, large_mode: LargeMode) -> String {
    let inner = symbol_grammar(symbol_mode);
    match large_mode {
        LargeMode::Simple => inner.to_string(),
        // opening run of C/divider, closing run of mirrored C (or ')')
        LargeMode::Apostrophus => format!("(?:[C|]+[Ͻ)]+)*{inner}"),
        LargeMode::Cifrao => format!("(?:(?:{inner})\\$+)*(?:{inner})"),
    }
}

fn patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let mut out = Vec::with_capacity(LargeMode::ALL.len() * SymbolMode::ALL.len());
        for large in LargeMode::ALL {
            for symbol in SymbolMode::ALL {
                let src = format!("^(?:{})$", pattern_source(symbol, large));
                out.push(Regex::new(&src).expect("numeral grammar must compile"));
            }
        }
        out
    })
}

fn pattern(symbol_mode: SymbolMode, large_mode: LargeMode) -> &'static Regex {
    &patterns()[large_mode.index() * SymbolMode::ALL.len() + symbol_mode.index()]
}

/// Strip all whitespace and upper-case the rest.
///
/// Only ASCII letters and the lower-case closer are folded, so look-alikes
/// such as dotless `ı` stay unchanged and fail the grammar.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'ͻ' => CLOSER_GLYPH,
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Check that `text` is a well-formed numeral for the given modes.
pub fn validate(
    text: &str,
    symbol_mode: SymbolMode,
    large_mode: LargeMode,
) -> Result<(), NumeralError> {
    let normalized = normalize(text);
    if pattern(symbol_mode, large_mode).is_match(&normalized) {
        Ok(())
    } else {
        debug!(input = text, %symbol_mode, %large_mode, "grammar rejected input");
        Err(NumeralError::Grammar {
            input: text.to_string(),
            symbol_mode,
            large_mode,
        })
    }
}

pub fn is_valid(text: &str, symbol_mode: SymbolMode, large_mode: LargeMode) -> bool {
    validate(text, symbol_mode, large_mode).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use LargeMode::*;
    use SymbolMode::*;

    #[test]
    fn all_patterns_compile() {
        assert_eq!(patterns().len(), 9);
        for large in LargeMode::ALL {
            for symbol in SymbolMode::ALL {
                assert!(is_valid("", symbol, large), "{symbol}/{large} rejects empty");
            }
        }
    }

    #[test]
    fn strict_rejects_four_repeats() {
        assert!(validate("IIII", Strict, Simple).is_err());
        assert!(validate("IIII", Primitive, Simple).is_ok());
        assert!(validate("IIII", Relaxed, Simple).is_ok());
    }

    #[test]
    fn strict_subtractive_pairs() {
        for ok in ["IV", "IX", "XL", "XC", "CD", "CM", "MCMXCIV", "MMMM", "XIV"] {
            assert!(is_valid(ok, Strict, Simple), "{ok}");
        }
        for bad in ["IL", "IC", "VX", "XD", "LC", "DM", "IIV", "XXXX", "DD", "VIV"] {
            assert!(!is_valid(bad, Strict, Simple), "{bad}");
        }
    }

    #[test]
    fn primitive_is_non_increasing() {
        assert!(is_valid("MDCCCCLXXXXVIIII", Primitive, Simple));
        assert!(!is_valid("IV", Primitive, Simple));
        assert!(!is_valid("XM", Primitive, Simple));
    }

    #[test]
    fn relaxed_accepts_any_order() {
        assert!(is_valid("IM", Relaxed, Simple));
        assert!(is_valid("VXLCDMI", Relaxed, Simple));
        assert!(!is_valid("IA", Relaxed, Simple));
    }

    #[test]
    fn markers_rejected_in_simple() {
        let err = validate("I$", Strict, Simple).unwrap_err();
        assert_eq!(
            err,
            NumeralError::Grammar {
                input: "I$".into(),
                symbol_mode: Strict,
                large_mode: Simple,
            }
        );
        assert!(!is_valid("C|Ͻ", Strict, Simple));
    }

    #[test]
    fn whitespace_and_case_ignored() {
        assert!(is_valid("mcm xc iv", Strict, Simple));
        assert!(is_valid("  M\tM\n", Strict, Simple));
        assert!(is_valid("c|ͻ", Strict, Apostrophus));
    }

    #[test]
    fn apostrophus_prefix_groups() {
        for ok in ["C|Ͻ", "|ϽϽ", "CC|ϽϽ", "C|)", "|ϽϽC|ϽCXXIII", "CC|ϽϽ|ϽϽ", "C|ϽMCM"] {
            assert!(is_valid(ok, Strict, Apostrophus), "{ok}");
        }
        // groups must precede the plain numeral
        assert!(!is_valid("XC|Ͻ", Strict, Apostrophus));
        assert!(!is_valid("C|", Strict, Apostrophus));
        assert!(!is_valid("Ͻ", Strict, Apostrophus));
        assert!(!is_valid("C|Ͻ$", Strict, Apostrophus));
    }

    #[test]
    fn cifrao_groups() {
        for ok in ["V$", "I$I$", "X$$", "V$L", "XIV$CCC"] {
            assert!(is_valid(ok, Strict, Cifrao), "{ok}");
        }
        assert!(!is_valid("$", Strict, Simple));
        assert!(!is_valid("IIII$", Strict, Cifrao));
        assert!(is_valid("IIII$", Primitive, Cifrao));
        assert!(!is_valid("C|Ͻ", Strict, Cifrao));
    }

    #[test]
    fn grammar_error_keeps_original_text() {
        let err = validate(" i i i i ", Strict, Simple).unwrap_err();
        match err {
            NumeralError::Grammar { input, .. } => assert_eq!(input, " i i i i "),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn normalize_strips_and_uppercases() {
        assert_eq!(normalize(" m c\tm "), "MCM");
        assert_eq!(normalize("c|ͻ"), "C|Ͻ");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_ascii_letters_are_not_folded() {
        // U+0131 and U+017F upper-case to 'I' and 'S' under full Unicode rules
        assert_eq!(normalize("\u{131}v"), "\u{131}V");
        assert!(validate("\u{131}v", Strict, Simple).unwrap_err().is_grammar());
        assert!(!is_valid("x\u{131}", Relaxed, Cifrao));
        assert!(!is_valid("\u{17f}", Relaxed, Simple));
    }
}
