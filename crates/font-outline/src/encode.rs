//! The typeface path-command language.
//!
//! A flat, space separated token stream: `m x y`, `l x y`, `q cx cy x y`,
//! `b c1x c1y c2x c2y x y`. Coordinates are written as integers.

use std::{
    fmt::{self, Write},
    str::FromStr,
};

use kurbo::Point;

use crate::{Error, GlyphPath, PathCommand};

/// Round to the nearest integer, with halves going toward positive infinity.
///
/// This is how typeface runtimes round (`-2.5` becomes `-2`, `2.5` becomes `3`),
/// which differs from [`f64::round`] for negative halves.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn write_command(f: &mut fmt::Formatter<'_>, letter: char, points: &[Point]) -> fmt::Result {
    f.write_char(letter)?;
    for p in points {
        write!(f, " {} {}", round_half_up(p.x), round_half_up(p.y))?;
    }
    Ok(())
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter();
        match *self {
            PathCommand::Move(p) | PathCommand::Line(p) => write_command(f, letter, &[p]),
            PathCommand::Quad(c, p) => write_command(f, letter, &[c, p]),
            PathCommand::Cubic(c1, c2, p) => write_command(f, letter, &[c1, c2, p]),
        }
    }
}

impl fmt::Display for GlyphPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl FromStr for GlyphPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut path = GlyphPath::new();

        while let Some(token) = tokens.next() {
            let letter = match token {
                "m" | "l" | "q" | "b" => token.as_bytes()[0] as char,
                other => return Err(Error::UnknownCommand(other.to_string())),
            };
            let mut next_point = || -> Result<Point, Error> {
                let mut coord = || -> Result<f64, Error> {
                    let raw = tokens.next().ok_or(Error::MissingCoordinates(letter))?;
                    raw.parse::<f64>().map_err(|_| Error::InvalidNumber(raw.to_string()))
                };
                Ok(Point::new(coord()?, coord()?))
            };

            let command = match letter {
                'm' => PathCommand::Move(next_point()?),
                'l' => PathCommand::Line(next_point()?),
                'q' => PathCommand::Quad(next_point()?, next_point()?),
                _ => PathCommand::Cubic(next_point()?, next_point()?, next_point()?),
            };
            path.push(command);
        }

        Ok(path)
    }
}
