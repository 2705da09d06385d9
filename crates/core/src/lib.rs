//! # Typeface Core
//!
//! Convert TrueType, OpenType and WOFF fonts into typeface glyph data: a JSON record
//! of font metrics plus one compact path string per character, optionally
//! wrapped in the JavaScript loader call legacy typeface runtimes expect.
//!
//! ## Example
//!
//! ```no_run
//! use typeface_core::{CharSelection, ConversionOptions, OutputFormat, convert};
//!
//! let data = std::fs::read("input.ttf").unwrap();
//! let options = ConversionOptions::new(OutputFormat::Json)
//!     .with_selection(CharSelection::Set("Hello".to_string()));
//! let json = convert(&data, &options).unwrap();
//! std::fs::write("input.json", json).unwrap();
//! ```

pub mod config;
mod error;
mod font_data;
mod metadata;
mod options;
mod scale;
mod selection;
mod serializer;
mod transcoder;
mod woff;

use log::info;
use skrifa::FontRef;

pub use error::{Error, Result};
pub use font_data::{BoundingBox, FontData, GlyphRecord, OriginalFontInfo};
pub use metadata::{FontSummary, extract_metadata};
pub use options::{ConversionOptions, OptionForm};
pub use scale::Scale;
pub use selection::CharSelection;
pub use serializer::{OutputFormat, serialize, to_javascript, to_json, variable_name};
pub use transcoder::Transcoder;
pub use woff::sfnt_data;

/// Parse sfnt bytes. Web fonts go through [`sfnt_data`] first.
pub fn open_font(data: &[u8]) -> Result<FontRef<'_>> {
    Ok(FontRef::new(data)?)
}

/// Build the full [`FontData`] record for a font.
pub fn build_font_data(font: &FontRef, options: &ConversionOptions) -> Result<FontData> {
    let (mut data, scale) = extract_metadata(font)?;

    let selected = options.selection.resolve(font)?;
    let transcoder = Transcoder::new(font, scale, options.reverse_winding)?;
    data.glyphs = transcoder.transcode(&selected)?;

    info!(
        "{}: {} glyph records at scale {} ({} units per em)",
        data.family_name,
        data.glyphs.len(),
        scale.factor(),
        scale.units_per_em()
    );
    Ok(data)
}

/// Convert raw font bytes into typeface JSON or JavaScript text.
pub fn convert(data: &[u8], options: &ConversionOptions) -> Result<String> {
    let sfnt = sfnt_data(data)?;
    let font = open_font(&sfnt)?;
    let font_data = build_font_data(&font, options)?;
    serialize(&font_data, options.format)
}

/// Summarize a font without converting it.
pub fn inspect(data: &[u8]) -> Result<FontSummary> {
    let sfnt = sfnt_data(data)?;
    FontSummary::read(&open_font(&sfnt)?)
}
