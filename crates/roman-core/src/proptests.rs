//! Property-based tests over the format/parse pair.
//!
//! Generates values and glyph strings via proptest and checks that
//! formatting and parsing agree, and that parsing arbitrary glyph soup
//! returns a typed error rather than panicking.

use proptest::prelude::*;

use crate::grammar::normalize;
use crate::{format, parse, LargeMode, SymbolMode, MAX_VALUE};

fn arb_symbol_mode() -> impl Strategy<Value = SymbolMode> {
    prop::sample::select(SymbolMode::ALL.to_vec())
}

fn arb_large_mode() -> impl Strategy<Value = LargeMode> {
    prop::sample::select(LargeMode::ALL.to_vec())
}

fn arb_glyphs() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'M', 'D', 'C', 'L', 'X', 'V', 'I', 'c', 'x', 'i', '$', '|', 'Ͻ', ')', ' ',
        ]),
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn roundtrip_plain_range(n in 0i64..5000, mode in arb_symbol_mode()) {
        let text = format(n, LargeMode::Simple, mode).unwrap();
        prop_assert_eq!(i64::from(parse(&text, mode, LargeMode::Simple).unwrap()), n);
    }

    #[test]
    fn roundtrip_large_notation(
        n in 0i64..=i64::from(MAX_VALUE),
        large in prop::sample::select(vec![LargeMode::Apostrophus, LargeMode::Cifrao]),
        mode in arb_symbol_mode(),
    ) {
        let text = format(n, large, mode).unwrap();
        prop_assert_eq!(i64::from(parse(&text, mode, large).unwrap()), n, "{}", text);
    }

    #[test]
    fn strict_text_is_canonical(s in "[MDCLXVI]{0,12}") {
        if let Ok(v) = parse(&s, SymbolMode::Strict, LargeMode::Simple) {
            let back = format(i64::from(v), LargeMode::Simple, SymbolMode::Strict).unwrap();
            prop_assert_eq!(back, normalize(&s));
        }
    }

    #[test]
    fn arbitrary_glyphs_never_panic(
        s in arb_glyphs(),
        symbol in arb_symbol_mode(),
        large in arb_large_mode(),
    ) {
        match parse(&s, symbol, large) {
            Ok(v) => prop_assert!(v <= MAX_VALUE),
            Err(e) => prop_assert!(!e.to_string().is_empty()),
        }
    }

    #[test]
    fn parse_accepts_only_validated_text(
        s in arb_glyphs(),
        symbol in arb_symbol_mode(),
        large in arb_large_mode(),
    ) {
        if crate::grammar::validate(&s, symbol, large).is_err() {
            prop_assert!(parse(&s, symbol, large).unwrap_err().is_grammar());
        }
    }
}
