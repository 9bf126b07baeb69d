use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use roman_cli::commands::{config_ops, convert_ops};
use roman_engine::{LargeMode, SymbolMode};

#[derive(Parser)]
#[command(name = "romantool", about = "Roman numeral conversion tool")]
struct Cli {
    /// Write JSON trace output to this directory (requires --features trace)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// Custom settings TOML replacing the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format an integer as a numeral
    Format {
        /// Value in 0..=2147483647
        #[arg(allow_hyphen_values = true)]
        value: i64,
        /// Large-number notation: simple, apostrophus or cifrao
        #[arg(long)]
        large: Option<LargeMode>,
        /// Symbol mode: primitive, strict or relaxed
        #[arg(long)]
        symbol: Option<SymbolMode>,
        /// Write the mirrored C as ')'
        #[arg(long)]
        ascii: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Parse a numeral into an integer
    Parse {
        /// Numeral text
        text: String,
        /// Symbol mode: primitive, strict or relaxed
        #[arg(long)]
        symbol: Option<SymbolMode>,
        /// Large-number notation: simple, apostrophus or cifrao
        #[arg(long)]
        large: Option<LargeMode>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether a numeral is valid (exit status 1 if not)
    Check {
        /// Numeral text
        text: String,
        /// Symbol mode: primitive, strict or relaxed
        #[arg(long)]
        symbol: Option<SymbolMode>,
        /// Large-number notation: simple, apostrophus or cifrao
        #[arg(long)]
        large: Option<LargeMode>,
        /// Print the grammar pattern used
        #[arg(long)]
        explain: bool,
    },
    /// Print the symbol table
    Table,
    /// Format and re-parse every value in an inclusive range
    Roundtrip {
        /// First value
        from: i64,
        /// Last value (inclusive)
        to: i64,
        /// Large-number notation: simple, apostrophus or cifrao
        #[arg(long)]
        large: Option<LargeMode>,
        /// Symbol mode: primitive, strict or relaxed
        #[arg(long)]
        symbol: Option<SymbolMode>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        if let Err(e) = roman_engine::init_tracing(dir) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Format {
            value,
            large,
            symbol,
            ascii,
            json,
        } => convert_ops::format_cmd(value, large, symbol, ascii, json),
        Command::Parse {
            text,
            symbol,
            large,
            json,
        } => convert_ops::parse_cmd(&text, symbol, large, json),
        Command::Check {
            text,
            symbol,
            large,
            explain,
        } => convert_ops::check_cmd(&text, symbol, large, explain),
        Command::Table => convert_ops::table_cmd(),
        Command::Roundtrip {
            from,
            to,
            large,
            symbol,
        } => convert_ops::roundtrip_cmd(from, to, large, symbol),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
