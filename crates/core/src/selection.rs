//! Which characters end up in the glyph mapping.

use std::collections::HashMap;

use skrifa::{FontRef, GlyphId, MetadataProvider, raw::TableProvider};

use crate::Result;

/// Character selection policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharSelection {
    /// Every glyph, once per code point mapped to it.
    #[default]
    All,
    /// Code points `start..=end`.
    Range { start: u32, end: u32 },
    /// The characters of a string, in order.
    Set(String),
}

impl CharSelection {
    /// Parse `"<start>-<end>"` with decimal code points.
    ///
    /// Anything that does not split into exactly two numbers yields `None`.
    pub fn parse_range(value: &str) -> Option<Self> {
        let mut parts = value.split('-');
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };
        let start = start.trim().parse().ok()?;
        let end = end.trim().parse().ok()?;
        Some(Self::Range { start, end })
    }

    /// Decide the selection from the legacy option form.
    ///
    /// Without `restrict`, all glyphs are exported. Otherwise a non-empty
    /// range wins over the set; a malformed range selects nothing.
    pub fn from_form(restrict: bool, range: &str, set: &str) -> Self {
        if !restrict {
            Self::All
        } else if !range.is_empty() {
            Self::parse_range(range).unwrap_or_else(|| Self::Set(String::new()))
        } else {
            Self::Set(set.to_string())
        }
    }

    /// Resolve the selection against `font` into `(character, glyph)` pairs.
    ///
    /// The missing glyph is never returned, and code points that are not
    /// Unicode scalar values are skipped. Order follows the selection: glyph
    /// order for [`CharSelection::All`], input order otherwise.
    pub fn resolve(&self, font: &FontRef) -> Result<Vec<(char, GlyphId)>> {
        let charmap = font.charmap();
        let lookup = |ch: char| {
            charmap.map(ch).filter(|gid| *gid != GlyphId::NOTDEF).map(|gid| (ch, gid))
        };

        let selected = match self {
            Self::All => {
                let mut by_glyph: HashMap<GlyphId, Vec<char>> = HashMap::new();
                for (cp, gid) in charmap.mappings() {
                    if let Some(ch) = char::from_u32(cp) {
                        by_glyph.entry(gid).or_default().push(ch);
                    }
                }

                let num_glyphs = u32::from(font.maxp()?.num_glyphs());
                let mut selected = Vec::new();
                for gid in (1..num_glyphs).map(GlyphId::new) {
                    if let Some(chars) = by_glyph.get_mut(&gid) {
                        chars.sort_unstable();
                        selected.extend(chars.iter().map(|ch| (*ch, gid)));
                    }
                }
                selected
            }
            Self::Range { start, end } => {
                let end = (*end).min(char::MAX as u32);
                (*start..=end).filter_map(char::from_u32).filter_map(lookup).collect()
            }
            Self::Set(chars) => chars.chars().filter_map(lookup).collect(),
        };

        Ok(selected)
    }
}
