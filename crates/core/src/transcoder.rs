//! Glyph outlines to typeface glyph records.

use std::collections::HashMap;

use font_outline::{GlyphPath, draw_unscaled};
use indexmap::IndexMap;
use kurbo::Affine;
use log::{debug, warn};
use skrifa::{
    FontRef, GlyphId, MetadataProvider,
    instance::{LocationRef, Size},
    metrics::GlyphMetrics,
    outline::OutlineGlyphCollection,
    raw::TableProvider,
};

use crate::{Error, Result, Scale, font_data::GlyphRecord};

/// Converts glyphs of one font at a fixed scale.
pub struct Transcoder<'a> {
    outlines: OutlineGlyphCollection<'a>,
    metrics: GlyphMetrics<'a>,
    num_glyphs: u32,
    scale: Scale,
    reverse_winding: bool,
}

impl<'a> Transcoder<'a> {
    pub fn new(font: &FontRef<'a>, scale: Scale, reverse_winding: bool) -> Result<Self> {
        Ok(Self {
            outlines: font.outline_glyphs(),
            metrics: font.glyph_metrics(Size::unscaled(), LocationRef::default()),
            num_glyphs: u32::from(font.maxp()?.num_glyphs()),
            scale,
            reverse_winding,
        })
    }

    /// Draw a glyph in font units, at the coordinates stored in the font.
    ///
    /// Glyphs without an outline (spaces, for one) give an empty path.
    pub fn outline(&self, gid: GlyphId) -> Result<GlyphPath> {
        let Some(glyph) = self.outlines.get(gid) else {
            return Ok(GlyphPath::new());
        };
        let path = draw_unscaled(&glyph)
            .map_err(|e| Error::Draw { glyph_id: gid.to_u32(), message: e.to_string() })?;

        let shift = self.glyf_origin_shift(gid);
        Ok(if shift == 0.0 { path } else { path.transform(Affine::translate((shift, 0.0))) })
    }

    /// The glyf scaler places `xMin` on the hmtx left side bearing; this is
    /// the x offset that puts the points back. Zero for CFF outlines.
    fn glyf_origin_shift(&self, gid: GlyphId) -> f64 {
        match (self.metrics.bounds(gid), self.metrics.left_side_bearing(gid)) {
            (Some(bounds), Some(lsb)) => f64::from(bounds.x_min - lsb),
            _ => 0.0,
        }
    }

    /// Build the record for one glyph.
    ///
    /// Returns `None` for the missing glyph and for IDs past the glyph count.
    pub fn transcode_glyph(&self, gid: GlyphId) -> Result<Option<GlyphRecord>> {
        if gid == GlyphId::NOTDEF {
            return Ok(None);
        }
        if gid.to_u32() >= self.num_glyphs {
            warn!("Glyph {} is out of range ({} glyphs), skipping", gid.to_u32(), self.num_glyphs);
            return Ok(None);
        }

        let raw = self.outline(gid)?;
        let (x_min, x_max) = raw
            .bounds()
            .map_or((0, 0), |b| (self.scale.round(b.x0), self.scale.round(b.x1)));
        let advance = self.metrics.advance_width(gid).unwrap_or_default();

        let scaled = raw.transform(self.scale.affine());
        let path = if self.reverse_winding { scaled.reversed() } else { scaled };
        debug!("Glyph {}: {} commands", gid.to_u32(), path.len());

        Ok(Some(GlyphRecord { ha: self.scale.round(advance), x_min, x_max, o: path.to_string() }))
    }

    /// Build the glyph mapping for resolved `(character, glyph)` pairs.
    ///
    /// Later duplicates of a character replace the earlier record in place.
    pub fn transcode(&self, selected: &[(char, GlyphId)]) -> Result<IndexMap<String, GlyphRecord>> {
        let mut cache: HashMap<GlyphId, GlyphRecord> = HashMap::new();
        let mut glyphs = IndexMap::with_capacity(selected.len());

        for &(ch, gid) in selected {
            let record = match cache.get(&gid) {
                Some(record) => record.clone(),
                None => match self.transcode_glyph(gid)? {
                    Some(record) => {
                        cache.insert(gid, record.clone());
                        record
                    }
                    None => continue,
                },
            };
            glyphs.insert(ch.to_string(), record);
        }

        Ok(glyphs)
    }
}
