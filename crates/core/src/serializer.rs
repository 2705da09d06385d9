//! Text output: pretty JSON, or JSON wrapped in a typeface loader call.

use serde::Deserialize;

use crate::{
    Result,
    config::{JAVASCRIPT_EXTENSION, JSON_EXTENSION, LOADER_CALL, LOADER_EPILOGUE, LOADER_PRELUDE},
    font_data::FontData,
};

/// Output serialization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    #[serde(rename = "javascript")]
    JavaScript,
}

impl OutputFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => JSON_EXTENSION,
            OutputFormat::JavaScript => JAVASCRIPT_EXTENSION,
        }
    }
}

/// Pretty-printed JSON with two-space indentation.
pub fn to_json(data: &FontData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// JSON wrapped in the loader snippet typeface runtimes expect.
pub fn to_javascript(data: &FontData) -> Result<String> {
    let json = to_json(data)?;
    Ok(format!("{LOADER_PRELUDE}{LOADER_CALL}{json}{LOADER_EPILOGUE}"))
}

pub fn serialize(data: &FontData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(data),
        OutputFormat::JavaScript => to_javascript(data),
    }
}

/// A JavaScript-safe identifier derived from a family name: every character
/// that is not an ASCII letter or digit is dropped.
pub fn variable_name(family_name: &str) -> String {
    family_name.chars().filter(char::is_ascii_alphanumeric).collect()
}
