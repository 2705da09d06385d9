//! Collecting skrifa outlines into a [`GlyphPath`].

use kurbo::Point;
use skrifa::{
    instance::{LocationRef, Size},
    outline::{DrawError, DrawSettings, OutlineGlyph, OutlinePen},
};

use crate::{GlyphPath, PathCommand};

fn point(x: f32, y: f32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

impl OutlinePen for GlyphPath {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PathCommand::Move(point(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PathCommand::Line(point(x, y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.push(PathCommand::Quad(point(cx0, cy0), point(x, y)));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(PathCommand::Cubic(point(cx0, cy0), point(cx1, cy1), point(x, y)));
    }

    // Subpaths are closed implicitly.
    fn close(&mut self) {}
}

/// Draw a glyph in raw font units at the default location, unhinted.
pub fn draw_unscaled(glyph: &OutlineGlyph) -> Result<GlyphPath, DrawError> {
    let mut path = GlyphPath::new();
    glyph.draw(DrawSettings::unhinted(Size::unscaled(), LocationRef::default()), &mut path)?;
    Ok(path)
}
