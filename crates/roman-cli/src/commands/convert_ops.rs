use std::process;

use serde::Serialize;

use roman_engine::{
    format_with, parse, pattern_source, settings, GlyphStyle, LargeMode, Symbol, SymbolMode,
    MAX_VALUE,
};

/// Mismatches printed by `roundtrip` before the rest are only counted.
const MAX_REPORTED_MISMATCHES: usize = 20;

#[derive(Debug, Serialize)]
struct FormatReport<'a> {
    value: i64,
    text: &'a str,
    large_mode: LargeMode,
    symbol_mode: SymbolMode,
}

#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    text: &'a str,
    value: u32,
    symbol_mode: SymbolMode,
    large_mode: LargeMode,
}

fn print_json<T: Serialize>(report: &T) {
    println!(
        "{}",
        die!(serde_json::to_string_pretty(report), "Error serializing JSON: {}")
    );
}

fn check_input_len(text: &str) {
    let max = settings().limits.max_input_len;
    let len = text.chars().count();
    if len > max {
        eprintln!("Error: input is {len} characters, limit is {max}");
        process::exit(1);
    }
}

pub fn format_cmd(
    value: i64,
    large: Option<LargeMode>,
    symbol: Option<SymbolMode>,
    ascii: bool,
    json: bool,
) {
    let defaults = &settings().format;
    let large_mode = large.unwrap_or(defaults.large_mode);
    let symbol_mode = symbol.unwrap_or(defaults.symbol_mode);
    let glyphs = if ascii {
        GlyphStyle::Ascii
    } else {
        defaults.glyphs
    };

    let text = die!(
        format_with(value, large_mode, symbol_mode, glyphs),
        "Error: {}"
    );
    if json {
        print_json(&FormatReport {
            value,
            text: &text,
            large_mode,
            symbol_mode,
        });
    } else {
        println!("{text}");
    }
}

pub fn parse_cmd(text: &str, symbol: Option<SymbolMode>, large: Option<LargeMode>, json: bool) {
    check_input_len(text);
    let defaults = &settings().parse;
    let symbol_mode = symbol.unwrap_or(defaults.symbol_mode);
    let large_mode = large.unwrap_or(defaults.large_mode);

    let value = die!(parse(text, symbol_mode, large_mode), "Error: {}");
    if json {
        print_json(&ParseReport {
            text,
            value,
            symbol_mode,
            large_mode,
        });
    } else {
        println!("{value}");
    }
}

/// Validate and parse; exits 1 if either step fails.
pub fn check_cmd(text: &str, symbol: Option<SymbolMode>, large: Option<LargeMode>, explain: bool) {
    check_input_len(text);
    let defaults = &settings().parse;
    let symbol_mode = symbol.unwrap_or(defaults.symbol_mode);
    let large_mode = large.unwrap_or(defaults.large_mode);

    if explain {
        println!("modes:   {symbol_mode}/{large_mode}");
        println!("pattern: ^(?:{})$", pattern_source(symbol_mode, large_mode));
    }

    // parse runs the grammar check first, so one call covers both stages
    match parse(text, symbol_mode, large_mode) {
        Ok(value) => println!("valid: {value}"),
        Err(e) => {
            let stage = if e.is_grammar() { "grammar" } else { "structure" };
            match e.offset() {
                Some(offset) => println!("invalid ({stage}, offset {offset}): {e}"),
                None => println!("invalid ({stage}): {e}"),
            }
            process::exit(1);
        }
    }
}

pub fn table_cmd() {
    println!("{:<8} {:>6}  {:<8} kind", "symbol", "value", "aliases");
    for sym in Symbol::CARDINALS.iter().chain(Symbol::MARKERS.iter()) {
        let value = sym
            .value()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let aliases: String = sym.aliases().iter().collect();
        let kind = if sym.is_cardinal() { "cardinal" } else { "marker" };
        println!("{:<8} {:>6}  {:<8} {kind}", sym.glyph(), value, aliases);
    }
}

/// Format then parse every value in `from..=to`; exits 1 on any mismatch.
pub fn roundtrip_cmd(from: i64, to: i64, large: Option<LargeMode>, symbol: Option<SymbolMode>) {
    if from < 0 || to > i64::from(MAX_VALUE) || from > to {
        eprintln!("Error: range must satisfy 0 <= from <= to <= {MAX_VALUE}");
        process::exit(1);
    }
    let defaults = &settings().format;
    let large_mode = large.unwrap_or(defaults.large_mode);
    let symbol_mode = symbol.unwrap_or(defaults.symbol_mode);

    let mut mismatches = 0usize;
    for value in from..=to {
        let text = die!(
            format_with(value, large_mode, symbol_mode, defaults.glyphs),
            "Error formatting: {}"
        );
        let outcome = parse(&text, symbol_mode, large_mode);
        if outcome.as_ref().map(|&v| i64::from(v)) == Ok(value) {
            continue;
        }
        mismatches += 1;
        if mismatches <= MAX_REPORTED_MISMATCHES {
            match outcome {
                Ok(v) => println!("MISMATCH {value} -> {text} -> {v}"),
                Err(e) => println!("MISMATCH {value} -> {text} -> error: {e}"),
            }
        }
    }

    let total = to - from + 1;
    println!("{symbol_mode}/{large_mode}: {total} values, {mismatches} mismatches");
    if mismatches > 0 {
        process::exit(1);
    }
}
