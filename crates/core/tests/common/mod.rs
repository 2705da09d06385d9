//! Synthetic TrueType and CFF fonts for conversion tests.

#![allow(dead_code)]

use std::io::Write;

use flate2::{Compression, write::ZlibEncoder};
use skrifa::raw::{FontRef, TableProvider, types::Tag};
use write_fonts::{
    FontBuilder,
    read::tables::glyf::CurvePoint,
    tables::{
        cmap::Cmap,
        glyf::{Bbox, Contour, GlyfLocaBuilder, Glyph, SimpleGlyph},
        head::Head,
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        loca::LocaFormat,
        maxp::Maxp,
        name::{Name, NameRecord},
        post::Post,
    },
    types::{FWord, Fixed, GlyphId, NameId},
};

/// A contour as `(x, y, on_curve)` points.
pub type Points = &'static [(i16, i16, bool)];

pub const TRIANGLE: Points = &[(0, 0, true), (1000, 0, true), (500, 1400, true)];
pub const BOWL: Points = &[(100, 0, true), (600, 0, false), (600, 500, true)];
pub const SQUARE: Points = &[(0, 0, true), (0, 1024, true), (1024, 1024, true), (1024, 0, true)];
pub const NOTDEF_BOX: Points = &[(50, 0, true), (50, 700, true), (450, 700, true), (450, 0, true)];

/// A CFF drawing operation in absolute coordinates.
#[derive(Debug, Clone, Copy)]
pub enum CubicOp {
    Move(i16, i16),
    Line(i16, i16),
    Curve([i16; 6]),
}

enum Outline {
    Quadratic(Vec<Points>),
    Cubic(Vec<CubicOp>),
}

impl Outline {
    fn x_min(&self) -> i16 {
        let xs: Vec<i16> = match self {
            Outline::Quadratic(contours) => {
                contours.iter().flat_map(|c| c.iter().map(|p| p.0)).collect()
            }
            // The CFF scaler does not shift by side bearing.
            Outline::Cubic(_) => vec![],
        };
        xs.into_iter().min().unwrap_or(0)
    }
}

struct TestGlyph {
    chars: Vec<char>,
    advance: u16,
    outline: Outline,
}

/// Builder for a minimal glyf- or CFF-flavored font.
pub struct TestFont {
    units_per_em: u16,
    glyphs: Vec<TestGlyph>,
    names: Vec<(u16, String)>,
    cff: bool,
    side_bearing_offset: Option<i16>,
}

impl TestFont {
    /// A glyf font with only a `.notdef` glyph.
    pub fn new(units_per_em: u16) -> Self {
        let notdef = TestGlyph {
            chars: vec![],
            advance: 500,
            outline: Outline::Quadratic(vec![NOTDEF_BOX]),
        };
        Self {
            units_per_em,
            glyphs: vec![notdef],
            names: vec![],
            cff: false,
            side_bearing_offset: None,
        }
    }

    /// A CFF font with an empty `.notdef` glyph.
    pub fn new_cff(units_per_em: u16) -> Self {
        let notdef = TestGlyph { chars: vec![], advance: 500, outline: Outline::Cubic(vec![]) };
        Self {
            units_per_em,
            glyphs: vec![notdef],
            names: vec![],
            cff: true,
            side_bearing_offset: None,
        }
    }

    pub fn glyph(mut self, chars: &[char], advance: u16, contours: &[Points]) -> Self {
        self.glyphs.push(TestGlyph {
            chars: chars.to_vec(),
            advance,
            outline: Outline::Quadratic(contours.to_vec()),
        });
        self
    }

    pub fn cubic_glyph(mut self, chars: &[char], advance: u16, ops: &[CubicOp]) -> Self {
        self.glyphs.push(TestGlyph {
            chars: chars.to_vec(),
            advance,
            outline: Outline::Cubic(ops.to_vec()),
        });
        self
    }

    /// Write hmtx left side bearings as `xMin + offset` instead of zero.
    pub fn side_bearing_offset(mut self, offset: i16) -> Self {
        self.side_bearing_offset = Some(offset);
        self
    }

    pub fn name(mut self, name_id: u16, value: &str) -> Self {
        self.names.push((name_id, value.to_string()));
        self
    }

    /// The fixture most tests share, at 2048 units per em.
    ///
    /// | gid | chars    | advance | outline  |
    /// |-----|----------|---------|----------|
    /// | 1   | `A`, `a` | 1100    | triangle |
    /// | 2   | `B`      | 700     | bowl     |
    /// | 3   | space    | 512     | empty    |
    /// | 4   | `D`      | 1024    | square   |
    /// | 5   | none     | 600     | square   |
    pub fn sample() -> Self {
        Self::new(2048)
            .glyph(&['A', 'a'], 1100, &[TRIANGLE])
            .glyph(&['B'], 700, &[BOWL])
            .glyph(&[' '], 512, &[])
            .glyph(&['D'], 1024, &[SQUARE])
            .glyph(&[], 600, &[SQUARE])
            .name(1, "Test Sans")
            .name(2, "Regular")
            .name(4, "Test Sans Regular")
            .name(5, "Version 1.000")
            .name(6, "TestSans-Regular")
    }

    pub fn build(&self) -> Vec<u8> {
        let mut builder = FontBuilder::new();

        let loca_format = if self.cff {
            let charstrings: Vec<Vec<u8>> = self
                .glyphs
                .iter()
                .map(|g| match &g.outline {
                    Outline::Cubic(ops) => charstring(ops),
                    Outline::Quadratic(_) => panic!("quadratic glyph in a CFF font"),
                })
                .collect();
            builder.add_raw(write_fonts::types::Tag::new(b"CFF "), cff_table(&charstrings));
            None
        } else {
            let mut glyf_builder = GlyfLocaBuilder::new();
            for glyph in &self.glyphs {
                let Outline::Quadratic(contours) = &glyph.outline else {
                    panic!("cubic glyph in a glyf font");
                };
                glyf_builder.add_glyph(&simple_glyph(contours)).unwrap();
            }
            let (glyf, loca, loca_format) = glyf_builder.build();
            builder.add_table(&glyf).unwrap();
            builder.add_table(&loca).unwrap();
            Some(loca_format)
        };

        let mappings: Vec<(char, GlyphId)> = self
            .glyphs
            .iter()
            .enumerate()
            .flat_map(|(gid, glyph)| glyph.chars.iter().map(move |ch| (*ch, GlyphId::new(gid as u32))))
            .collect();
        let cmap = Cmap::from_mappings(mappings).expect("cmap");

        let head = Head {
            font_revision: Fixed::from_f64(1.0),
            units_per_em: self.units_per_em,
            x_min: 0,
            y_min: -410,
            x_max: 1024,
            y_max: 1638,
            index_to_loc_format: match loca_format {
                Some(LocaFormat::Long) => 1,
                _ => 0,
            },
            ..Default::default()
        };

        let hhea = Hhea {
            ascender: FWord::new(1638),
            descender: FWord::new(-410),
            number_of_h_metrics: self.glyphs.len() as u16,
            ..Default::default()
        };

        let hmtx = Hmtx::new(
            self.glyphs
                .iter()
                .map(|g| LongMetric {
                    advance: g.advance,
                    side_bearing: self.side_bearing_offset.map_or(0, |off| g.outline.x_min() + off),
                })
                .collect(),
            vec![],
        );

        let num_glyphs = self.glyphs.len() as u16;
        let maxp = if self.cff {
            Maxp {
                num_glyphs,
                max_points: None,
                max_contours: None,
                max_composite_points: None,
                max_composite_contours: None,
                max_zones: None,
                max_twilight_points: None,
                max_storage: None,
                max_function_defs: None,
                max_instruction_defs: None,
                max_stack_elements: None,
                max_size_of_instructions: None,
                max_component_elements: None,
                max_component_depth: None,
            }
        } else {
            Maxp {
                num_glyphs,
                max_points: Some(8),
                max_contours: Some(2),
                max_composite_points: Some(0),
                max_composite_contours: Some(0),
                max_zones: Some(1),
                max_twilight_points: Some(0),
                max_storage: Some(0),
                max_function_defs: Some(0),
                max_instruction_defs: Some(0),
                max_stack_elements: Some(0),
                max_size_of_instructions: Some(0),
                max_component_elements: Some(0),
                max_component_depth: Some(0),
            }
        };

        let glyph_names: Vec<String> = (0..self.glyphs.len())
            .map(|gid| if gid == 0 { ".notdef".to_string() } else { format!("glyph{gid}") })
            .collect();
        let mut post = Post::new_v2(glyph_names.iter().map(String::as_str));
        post.underline_position = FWord::new(-154);
        post.underline_thickness = FWord::new(102);

        let records = self
            .names
            .iter()
            .map(|(name_id, value)| {
                NameRecord::new(3, 1, 0x409, NameId::new(*name_id), value.clone().into())
            })
            .collect();
        let name = Name::new(records);

        builder.add_table(&head).unwrap();
        builder.add_table(&hhea).unwrap();
        builder.add_table(&hmtx).unwrap();
        builder.add_table(&maxp).unwrap();
        builder.add_table(&cmap).unwrap();
        builder.add_table(&name).unwrap();
        builder.add_table(&post).unwrap();
        builder.build()
    }
}

fn simple_glyph(contours: &[Points]) -> Glyph {
    if contours.is_empty() {
        return Glyph::Empty;
    }

    let all = contours.iter().flat_map(|c| c.iter());
    let bbox = Bbox {
        x_min: all.clone().map(|p| p.0).min().unwrap_or(0),
        y_min: all.clone().map(|p| p.1).min().unwrap_or(0),
        x_max: all.clone().map(|p| p.0).max().unwrap_or(0),
        y_max: all.map(|p| p.1).max().unwrap_or(0),
    };
    let contours = contours
        .iter()
        .map(|points| {
            let points: Vec<CurvePoint> =
                points.iter().map(|&(x, y, on)| CurvePoint::new(x, y, on)).collect();
            Contour::from(points)
        })
        .collect();

    Glyph::Simple(SimpleGlyph { bbox, contours, instructions: vec![] })
}

/// Overwrite `head.unitsPerEm` in built font data.
pub fn patch_units_per_em(mut data: Vec<u8>, units_per_em: u16) -> Vec<u8> {
    let offset = {
        let font = FontRef::new(&data).unwrap();
        let record = font
            .table_directory
            .table_records()
            .iter()
            .find(|r| r.tag() == Tag::new(b"head"))
            .unwrap();
        record.offset() as usize
    };
    // version (4) + fontRevision (4) + checksumAdjustment (4) + magicNumber (4) + flags (2)
    let field = offset + 18;
    data[field..field + 2].copy_from_slice(&units_per_em.to_be_bytes());
    data
}

/// Type 2 charstring for absolute drawing operations.
fn charstring(ops: &[CubicOp]) -> Vec<u8> {
    fn push_number(out: &mut Vec<u8>, value: i16) {
        out.push(28);
        out.extend_from_slice(&value.to_be_bytes());
    }

    let mut out = Vec::new();
    let (mut x0, mut y0) = (0, 0);
    for op in ops {
        match *op {
            CubicOp::Move(x, y) => {
                push_number(&mut out, x - x0);
                push_number(&mut out, y - y0);
                out.push(21); // rmoveto
                (x0, y0) = (x, y);
            }
            CubicOp::Line(x, y) => {
                push_number(&mut out, x - x0);
                push_number(&mut out, y - y0);
                out.push(5); // rlineto
                (x0, y0) = (x, y);
            }
            CubicOp::Curve([c1x, c1y, c2x, c2y, x, y]) => {
                for value in [c1x - x0, c1y - y0, c2x - c1x, c2y - c1y, x - c2x, y - c2y] {
                    push_number(&mut out, value);
                }
                out.push(8); // rrcurveto
                (x0, y0) = (x, y);
            }
        }
    }
    out.push(14); // endchar
    out
}

/// CFF INDEX with 4-byte offsets.
fn cff_index(items: &[Vec<u8>]) -> Vec<u8> {
    let mut out = (items.len() as u16).to_be_bytes().to_vec();
    if items.is_empty() {
        return out;
    }
    out.push(4);
    let mut offset = 1u32;
    out.extend_from_slice(&offset.to_be_bytes());
    for item in items {
        offset += item.len() as u32;
        out.extend_from_slice(&offset.to_be_bytes());
    }
    for item in items {
        out.extend_from_slice(item);
    }
    out
}

/// A bare CFF table: one font, no subroutines, default charset.
fn cff_table(charstrings: &[Vec<u8>]) -> Vec<u8> {
    fn push_int(out: &mut Vec<u8>, value: u32) {
        out.push(29);
        out.extend_from_slice(&value.to_be_bytes());
    }

    let header = [1u8, 0, 4, 4];
    let name_index = cff_index(&[b"TestCff".to_vec()]);
    let string_index = cff_index(&[]);
    let global_subrs = cff_index(&[]);
    let charstrings_index = cff_index(charstrings);
    let private_dict = vec![139u8, 20]; // defaultWidthX 0

    // CharStrings (5 + 1) and Private (5 + 5 + 1) operands have fixed width.
    let top_dict_len = 17;
    let top_index_len = cff_index(&[vec![0; top_dict_len]]).len();
    let charstrings_offset =
        header.len() + name_index.len() + top_index_len + string_index.len() + global_subrs.len();
    let private_offset = charstrings_offset + charstrings_index.len();

    let mut top_dict = Vec::with_capacity(top_dict_len);
    push_int(&mut top_dict, charstrings_offset as u32);
    top_dict.push(17);
    push_int(&mut top_dict, private_dict.len() as u32);
    push_int(&mut top_dict, private_offset as u32);
    top_dict.push(18);

    let mut table = header.to_vec();
    table.extend(name_index);
    table.extend(cff_index(&[top_dict]));
    table.extend(string_index);
    table.extend(global_subrs);
    table.extend(charstrings_index);
    table.extend(private_dict);
    table
}

/// Wrap an sfnt in a WOFF 1.0 container, compressing every table that
/// gets smaller.
pub fn to_woff(sfnt: &[u8]) -> Vec<u8> {
    const HEADER_LEN: usize = 44;
    const ENTRY_LEN: usize = 20;

    let font = FontRef::new(sfnt).unwrap();
    let records = font.table_directory.table_records();

    let mut directory = Vec::new();
    let mut tables = Vec::new();
    let mut offset = HEADER_LEN + records.len() * ENTRY_LEN;
    for record in records {
        let data = font.data_for_tag(record.tag()).unwrap().as_bytes();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        let compressed = encoder.finish().unwrap();
        let stored = if compressed.len() < data.len() { compressed } else { data.to_vec() };

        directory.extend_from_slice(&record.tag().to_be_bytes());
        directory.extend_from_slice(&(offset as u32).to_be_bytes());
        directory.extend_from_slice(&(stored.len() as u32).to_be_bytes());
        directory.extend_from_slice(&(data.len() as u32).to_be_bytes());
        directory.extend_from_slice(&record.checksum().to_be_bytes());

        let padded = stored.len().next_multiple_of(4);
        offset += padded;
        tables.extend_from_slice(&stored);
        tables.resize(tables.len() + padded - stored.len(), 0);
    }

    let mut woff = Vec::with_capacity(offset);
    woff.extend_from_slice(b"wOFF");
    woff.extend_from_slice(&sfnt[..4]); // flavor
    woff.extend_from_slice(&(offset as u32).to_be_bytes());
    woff.extend_from_slice(&(records.len() as u16).to_be_bytes());
    woff.extend_from_slice(&0u16.to_be_bytes());
    woff.extend_from_slice(&(sfnt.len() as u32).to_be_bytes());
    woff.extend_from_slice(&[0, 1, 0, 0]); // version 1.0
    woff.extend_from_slice(&[0; 20]); // no metadata or private block
    woff.extend(directory);
    woff.extend(tables);
    woff
}
