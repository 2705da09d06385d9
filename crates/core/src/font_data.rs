//! The typeface data model, serialized field for field.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Root record of a converted font.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontData {
    /// Glyph records keyed by a one-character string.
    pub glyphs: IndexMap<String, GlyphRecord>,
    pub family_name: String,
    pub ascender: i64,
    pub descender: i64,
    #[serde(serialize_with = "js_number")]
    pub underline_position: f64,
    #[serde(serialize_with = "js_number")]
    pub underline_thickness: f64,
    pub bounding_box: BoundingBox,
    pub resolution: u16,
    #[serde(rename = "original_font_information")]
    pub original_font_information: OriginalFontInfo,
}

/// One glyph of the output mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphRecord {
    /// Advance width.
    pub ha: i64,
    pub x_min: i64,
    pub x_max: i64,
    /// Outline in the typeface path language.
    pub o: String,
}

/// Font-wide bounds from the head table, scaled but not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    #[serde(serialize_with = "js_number")]
    pub y_min: f64,
    #[serde(serialize_with = "js_number")]
    pub y_max: f64,
    #[serde(serialize_with = "js_number")]
    pub x_min: f64,
    #[serde(serialize_with = "js_number")]
    pub x_max: f64,
}

/// Name table strings carried over unchanged. Absent entries are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OriginalFontInfo {
    pub format: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postscript_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_subfamily_name: Option<String>,
}

/// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Write whole numbers without a fractional part (`-100`, not `-100.0`),
/// matching the number formatting typeface loaders were written against.
fn js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
