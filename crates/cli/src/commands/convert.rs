//! Batch conversion of font files to typeface data.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{info, warn};
use typeface_core::{
    ConversionOptions, build_font_data, open_font, serialize, sfnt_data, variable_name,
};

use crate::{
    cli::ConvertArgs,
    io::{FontFile, expand_inputs, write_output},
    parallel::run_batch,
};

/// Convert one font and return the serialized text.
pub fn convert_to_string(input: &Path, options: &ConversionOptions) -> Result<String> {
    let data = FontFile::new(input).read()?;
    typeface_core::convert(&data, options)
        .with_context(|| format!("Failed to convert {}", input.display()))
}

/// Convert one font file and write the result, returning the output path.
pub fn convert_file(
    font: &FontFile,
    output_dir: Option<&Path>,
    name_from_family: bool,
    options: &ConversionOptions,
) -> Result<PathBuf> {
    let data = font.read()?;
    let context = || format!("Failed to convert {}", font.path().display());

    let sfnt = sfnt_data(&data).with_context(context)?;
    let parsed = open_font(&sfnt).with_context(context)?;
    let font_data = build_font_data(&parsed, options).with_context(context)?;
    let text = serialize(&font_data, options.format).with_context(context)?;

    let stem = name_from_family.then(|| variable_name(&font_data.family_name));
    let output = font.output_path(output_dir, stem.as_deref(), options.format.extension());
    write_output(&output, &text)?;

    info!("{} -> {}", font.path().display(), output.display());
    Ok(output)
}

/// Convert every input in parallel; fails if any single conversion failed.
pub fn convert_batch(args: &ConvertArgs, options: &ConversionOptions) -> Result<()> {
    let fonts = expand_inputs(&args.inputs)?;
    let output_dir = args.output_dir.as_deref();

    let written = run_batch("Convert", fonts, |font| {
        convert_file(&font, output_dir, args.name_from_family, options)
    })
    .into_outputs("Convert")?;

    for path in overwritten(&written) {
        warn!("{} was written by more than one input", path.display());
    }
    Ok(())
}

/// Output paths produced more than once, e.g. two fonts of one family with
/// `--name-from-family`.
fn overwritten(paths: &[PathBuf]) -> Vec<&PathBuf> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    paths.iter().filter(|p| !seen.insert(*p) && reported.insert(*p)).collect()
}
