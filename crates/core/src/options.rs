//! Conversion options.

use serde::Deserialize;

use crate::{CharSelection, OutputFormat};

/// What to convert and how to write it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Reverse the winding of every glyph outline.
    pub reverse_winding: bool,
    pub selection: CharSelection,
    pub format: OutputFormat,
}

impl ConversionOptions {
    pub fn new(format: OutputFormat) -> Self {
        Self { format, ..Default::default() }
    }

    pub fn with_selection(mut self, selection: CharSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_reverse_winding(mut self, reverse: bool) -> Self {
        self.reverse_winding = reverse;
        self
    }
}

/// The option form of the web converter, as JSON:
///
/// ```json
/// { "reverseWinding": false, "restrictCharacters": true,
///   "characterRange": "65-90", "characterSet": "", "outputFormat": "json" }
/// ```
///
/// `outputFormat` is required; everything else defaults to off or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionForm {
    #[serde(default)]
    pub reverse_winding: bool,
    #[serde(default)]
    pub restrict_characters: bool,
    #[serde(default)]
    pub character_range: String,
    #[serde(default)]
    pub character_set: String,
    pub output_format: OutputFormat,
}

impl From<OptionForm> for ConversionOptions {
    fn from(form: OptionForm) -> Self {
        Self {
            reverse_winding: form.reverse_winding,
            selection: CharSelection::from_form(
                form.restrict_characters,
                &form.character_range,
                &form.character_set,
            ),
            format: form.output_format,
        }
    }
}
