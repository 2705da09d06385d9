//! Shared file I/O utilities.

use std::{
    fs::{create_dir_all, read, read_to_string, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::glob;
use typeface_core::{ConversionOptions, OptionForm};

/// A font file handle for I/O operations.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read font data from the file.
    pub fn read(&self) -> Result<Vec<u8>> {
        read(&self.path).with_context(|| format!("Failed to read font: {}", self.path.display()))
    }

    /// Where converted output for this font goes.
    ///
    /// Uses `dir` when given, otherwise the font's own directory. The file
    /// is named `stem` (or the font's file stem) with `extension`.
    pub fn output_path(&self, dir: Option<&Path>, stem: Option<&str>, extension: &str) -> PathBuf {
        let dir = dir.or_else(|| self.path.parent()).unwrap_or(Path::new(""));
        let stem = match stem {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => self
                .path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "typeface".to_string()),
        };
        dir.join(format!("{stem}.{extension}"))
    }
}

impl AsRef<Path> for FontFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Write converted text, creating the parent directory if needed.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    write(path, text).with_context(|| format!("Failed to write output: {}", path.display()))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Expand command-line inputs: existing paths are taken as-is, anything else
/// is treated as a glob pattern.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<FontFile>> {
    let mut fonts = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.exists() {
            fonts.push(FontFile::new(path));
            continue;
        }

        let matches: Vec<PathBuf> = glob(input)
            .with_context(|| format!("Failed to glob pattern: {input}"))?
            .filter_map(Result::ok)
            .collect();
        if matches.is_empty() {
            bail!("No fonts match {input}");
        }
        fonts.extend(matches.into_iter().map(FontFile::new));
    }
    Ok(fonts)
}

/// Load options saved from the web converter's option form.
pub fn read_option_form(path: &Path) -> Result<ConversionOptions> {
    let text = read_to_string(path)
        .with_context(|| format!("Failed to read options: {}", path.display()))?;
    let form: OptionForm = serde_json::from_str(&text)
        .with_context(|| format!("Invalid options file: {}", path.display()))?;
    Ok(form.into())
}
