//! Winding reversal.
//!
//! Reversal is structural: subpaths are emitted in reverse order and each
//! subpath is walked backward from its last point to its move point. Command
//! kinds are kept as they are; a cubic's control points swap places so the
//! curve keeps its shape when traversed the other way. No geometric check is
//! made on the result, so self-intersecting outlines are reversed as drawn.

use kurbo::Point;

use crate::{GlyphPath, PathCommand};

impl GlyphPath {
    /// Reverse the traversal direction of every subpath.
    ///
    /// For paths whose subpaths each start with a move, applying this twice
    /// gives back the original commands.
    pub fn reversed(&self) -> Self {
        let mut commands = Vec::with_capacity(self.commands.len() + 1);
        for subpath in self.subpaths().rev() {
            reverse_subpath(subpath, &mut commands);
        }
        Self { commands }
    }
}

fn reverse_subpath(subpath: &[PathCommand], out: &mut Vec<PathCommand>) {
    let (start, segments) = match subpath.split_first() {
        Some((PathCommand::Move(p), rest)) => (*p, rest),
        _ => (Point::ZERO, subpath),
    };

    let last = segments.last().map_or(start, PathCommand::end_point);
    out.push(PathCommand::Move(last));

    for (i, segment) in segments.iter().enumerate().rev() {
        let to = if i == 0 { start } else { segments[i - 1].end_point() };
        let reversed = match *segment {
            PathCommand::Line(_) => PathCommand::Line(to),
            PathCommand::Quad(c, _) => PathCommand::Quad(c, to),
            PathCommand::Cubic(c1, c2, _) => PathCommand::Cubic(c2, c1, to),
            // Subpaths only ever hold a move in first position.
            PathCommand::Move(_) => continue,
        };
        out.push(reversed);
    }
}
