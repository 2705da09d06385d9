//! Font summary for the `info` command.

use std::path::Path;

use anyhow::{Context, Result};
use read_fonts::{FontRef, TableProvider};
use typeface_core::{Scale, inspect, sfnt_data};

use crate::io::FontFile;

pub fn show_info(input: &Path) -> Result<()> {
    let data = FontFile::new(input).read()?;
    let context = || format!("Failed to inspect {}", input.display());
    let sfnt = sfnt_data(&data).with_context(context)?;
    let summary = inspect(&sfnt).with_context(context)?;

    println!("{}", input.display());
    println!("  Family:        {}", summary.family_name.as_deref().unwrap_or("(none)"));
    println!("  Units per em:  {}", summary.units_per_em);
    if let Ok(scale) = Scale::new(summary.units_per_em) {
        println!("  Scale factor:  {}", scale.factor());
    }
    println!("  Glyphs:        {}", summary.glyph_count);
    println!("  Code points:   {}", summary.mapped_code_points);

    let font = FontRef::new(&sfnt)?;
    println!("  Tables:        {}", table_tags(&font).join(" "));
    let outlines = if font.glyf().is_ok() {
        "glyf"
    } else if font.cff2().is_ok() {
        "CFF2"
    } else {
        "CFF"
    };
    println!("  Outlines:      {outlines}");
    Ok(())
}

/// Tags from the table directory, in file order.
fn table_tags(font: &FontRef) -> Vec<String> {
    font.table_directory.table_records().iter().map(|record| record.tag().to_string()).collect()
}
