use std::fs;

use roman_engine::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: format={}/{}, parse={}/{}, limits.max_input_len={}",
        s.format.symbol_mode,
        s.format.large_mode,
        s.parse.symbol_mode,
        s.parse.large_mode,
        s.limits.max_input_len
    );
}

/// Install a custom settings file for the rest of the process.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error loading {file}: {}");
}
