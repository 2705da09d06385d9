//! Path command model.

use kurbo::{Affine, CubicBez, ParamCurveExtrema, Point, QuadBez, Rect};

/// A single drawing command.
///
/// Close-path is not represented: typeface outlines close every subpath
/// implicitly, so a new subpath simply starts with the next [`PathCommand::Move`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Begin a subpath at the point.
    Move(Point),
    /// Straight line to the point.
    Line(Point),
    /// Quadratic curve: control point, end point.
    Quad(Point, Point),
    /// Cubic curve: first control point, second control point, end point.
    Cubic(Point, Point, Point),
}

impl PathCommand {
    /// Command letter in the typeface path language.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::Move(_) => 'm',
            PathCommand::Line(_) => 'l',
            PathCommand::Quad(..) => 'q',
            PathCommand::Cubic(..) => 'b',
        }
    }

    /// Number of coordinates (not points) the command carries.
    pub fn arity(&self) -> usize {
        match self {
            PathCommand::Move(_) | PathCommand::Line(_) => 2,
            PathCommand::Quad(..) => 4,
            PathCommand::Cubic(..) => 6,
        }
    }

    /// The point the pen rests on after this command.
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::Move(p) | PathCommand::Line(p) => p,
            PathCommand::Quad(_, p) => p,
            PathCommand::Cubic(_, _, p) => p,
        }
    }

    /// Apply `f` to every point of the command.
    pub fn map_points(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            PathCommand::Move(p) => PathCommand::Move(f(p)),
            PathCommand::Line(p) => PathCommand::Line(f(p)),
            PathCommand::Quad(c, p) => PathCommand::Quad(f(c), f(p)),
            PathCommand::Cubic(c1, c2, p) => PathCommand::Cubic(f(c1), f(c2), f(p)),
        }
    }
}

/// An ordered list of path commands making up one glyph outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphPath {
    pub(crate) commands: Vec<PathCommand>,
}

impl GlyphPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Apply an affine transform to every point.
    pub fn transform(&self, affine: Affine) -> Self {
        self.commands.iter().map(|c| c.map_points(|p| affine * p)).collect()
    }

    /// Split the path into subpaths, each starting at a move.
    ///
    /// Commands preceding the first move (only possible for hand-built paths)
    /// form a leading subpath of their own.
    pub fn subpaths(&self) -> impl DoubleEndedIterator<Item = &[PathCommand]> {
        self.commands.chunk_by(|_, next| !matches!(next, PathCommand::Move(_)))
    }

    /// Exact bounds of the outline, including curve extrema.
    ///
    /// Returns `None` for a path without commands.
    pub fn bounds(&self) -> Option<Rect> {
        let mut current = Point::ZERO;
        let mut bounds: Option<Rect> = None;

        for command in &self.commands {
            let rect = match *command {
                PathCommand::Move(p) | PathCommand::Line(p) => Rect::from_points(p, p),
                PathCommand::Quad(c, p) => QuadBez::new(current, c, p).bounding_box(),
                PathCommand::Cubic(c1, c2, p) => CubicBez::new(current, c1, c2, p).bounding_box(),
            };
            bounds = Some(match bounds {
                Some(b) => b.union(rect),
                None => rect,
            });
            current = command.end_point();
        }

        bounds
    }
}

impl From<Vec<PathCommand>> for GlyphPath {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }
}

impl FromIterator<PathCommand> for GlyphPath {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self { commands: iter.into_iter().collect() }
    }
}
