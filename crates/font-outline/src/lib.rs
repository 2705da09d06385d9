//! # Font Outline
//!
//! Glyph outlines as an ordered list of path commands, plus the compact
//! path-command language used by typeface fonts.
//!
//! A [`GlyphPath`] is collected straight from skrifa (it implements
//! [`skrifa::outline::OutlinePen`]), transformed in structured form, and only
//! turned into text at the very end:
//!
//! ```
//! use font_outline::{GlyphPath, PathCommand};
//! use kurbo::{Affine, Point};
//!
//! let path = GlyphPath::from(vec![
//!     PathCommand::Move(Point::new(10.0, 0.0)),
//!     PathCommand::Line(Point::new(10.0, 20.4)),
//!     PathCommand::Quad(Point::new(15.0, 25.0), Point::new(20.0, 20.0)),
//! ]);
//!
//! assert_eq!(path.to_string(), "m 10 0 l 10 20 q 15 25 20 20");
//! assert_eq!(path.transform(Affine::scale(2.0)).to_string(), "m 20 0 l 20 41 q 30 50 40 40");
//! assert_eq!(path.reversed().to_string(), "m 20 20 q 15 25 10 20 l 10 0");
//! ```

mod command;
mod encode;
mod error;
mod pen;
mod reverse;

pub use command::{GlyphPath, PathCommand};
pub use encode::round_half_up;
pub use error::{Error, Result};
pub use pen::draw_unscaled;
