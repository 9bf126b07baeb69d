//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::format::GlyphStyle;
use crate::mode::{LargeMode, SymbolMode};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Upper bound for `limits.max_input_len`.
const MAX_INPUT_LEN_CEILING: usize = 4096;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub format: FormatSettings,
    pub parse: ParseSettings,
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatSettings {
    pub large_mode: LargeMode,
    pub symbol_mode: SymbolMode,
    #[serde(default)]
    pub glyphs: GlyphStyle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseSettings {
    pub symbol_mode: SymbolMode,
    pub large_mode: LargeMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_input_len: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.limits.max_input_len == 0 {
        return Err(SettingsError::InvalidValue {
            field: "limits.max_input_len".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.limits.max_input_len > MAX_INPUT_LEN_CEILING {
        return Err(SettingsError::InvalidValue {
            field: "limits.max_input_len".to_string(),
            reason: format!("must be at most {MAX_INPUT_LEN_CEILING}"),
        });
    }
    Ok(())
}
