//! Font-wide metadata: names, vertical metrics and bounds.

use log::warn;
use skrifa::{FontRef, MetadataProvider, raw::TableProvider, string::StringId};

use crate::{
    Result, Scale,
    config::{ORIGINAL_FORMAT, RESOLUTION},
    font_data::{BoundingBox, FontData, OriginalFontInfo},
};

/// Build the [`FontData`] shell for `font` (everything but the glyphs), along
/// with the scale used for it.
///
/// Ascender and descender come from `hhea` and are rounded; underline
/// metrics (`post`) and bounds (`head`) are scaled but kept fractional.
pub fn extract_metadata(font: &FontRef) -> Result<(FontData, Scale)> {
    let head = font.head()?;
    let scale = Scale::new(head.units_per_em())?;
    let hhea = font.hhea()?;
    let post = font.post()?;

    let original = OriginalFontInfo {
        format: ORIGINAL_FORMAT,
        copyright: english_name(font, StringId::COPYRIGHT_NOTICE),
        postscript_name: english_name(font, StringId::POSTSCRIPT_NAME),
        version_string: english_name(font, StringId::VERSION_STRING),
        full_font_name: english_name(font, StringId::FULL_NAME),
        font_family_name: english_name(font, StringId::FAMILY_NAME),
        font_subfamily_name: english_name(font, StringId::SUBFAMILY_NAME),
    };

    let family_name = original
        .font_family_name
        .clone()
        .or_else(|| original.full_font_name.clone())
        .unwrap_or_else(|| {
            warn!("Font has no English family or full name");
            String::new()
        });

    let data = FontData {
        glyphs: Default::default(),
        family_name,
        ascender: scale.round(hhea.ascender().to_i16()),
        descender: scale.round(hhea.descender().to_i16()),
        underline_position: scale.apply(post.underline_position().to_i16()),
        underline_thickness: scale.apply(post.underline_thickness().to_i16()),
        bounding_box: BoundingBox {
            y_min: scale.apply(head.y_min()),
            y_max: scale.apply(head.y_max()),
            x_min: scale.apply(head.x_min()),
            x_max: scale.apply(head.x_max()),
        },
        resolution: RESOLUTION,
        original_font_information: original,
    };

    Ok((data, scale))
}

/// First English entry for a name ID.
fn english_name(font: &FontRef, id: StringId) -> Option<String> {
    font.localized_strings(id)
        .find(|s| s.language().is_some_and(|lang| lang.starts_with("en")))
        .map(|s| s.to_string())
}

/// Quick facts about a font, for reporting before a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSummary {
    pub family_name: Option<String>,
    pub units_per_em: u16,
    pub glyph_count: u16,
    pub mapped_code_points: usize,
}

impl FontSummary {
    pub fn read(font: &FontRef) -> Result<Self> {
        Ok(Self {
            family_name: english_name(font, StringId::FAMILY_NAME)
                .or_else(|| english_name(font, StringId::FULL_NAME)),
            units_per_em: font.head()?.units_per_em(),
            glyph_count: font.maxp()?.num_glyphs(),
            mapped_code_points: font.charmap().mappings().count(),
        })
    }
}
