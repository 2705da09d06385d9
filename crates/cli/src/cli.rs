//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use typeface_core::{CharSelection, ConversionOptions, OutputFormat};

use crate::{
    commands::{convert, info},
    io::read_option_form,
};

#[derive(Parser)]
#[command(name = "typeface", version)]
#[command(about = "Convert TrueType/OpenType/WOFF fonts to typeface JSON or JavaScript")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Javascript,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Javascript => OutputFormat::JavaScript,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ConvertArgs {
    /// Font files or glob patterns (TTF/OTF/WOFF)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Output directory (default: next to each input)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: FormatArg,

    /// Reverse the winding of every outline
    #[arg(long)]
    pub reverse_winding: bool,

    /// Only export code points START-END (decimal)
    #[arg(long, value_name = "START-END", conflicts_with = "chars")]
    pub range: Option<String>,

    /// Only export these characters
    #[arg(long)]
    pub chars: Option<String>,

    /// Read options from a JSON option form instead of flags
    #[arg(long, conflicts_with_all = ["format", "reverse_winding", "range", "chars"])]
    pub options: Option<PathBuf>,

    /// Name output files after the font family instead of the input file
    #[arg(long)]
    pub name_from_family: bool,

    /// Print the result to stdout (single input only)
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,
}

impl ConvertArgs {
    /// Conversion options from either the option form file or the flags.
    pub fn conversion_options(&self) -> Result<ConversionOptions> {
        if let Some(path) = &self.options {
            return read_option_form(path);
        }

        let selection = match (&self.range, &self.chars) {
            (Some(range), _) => CharSelection::from_form(true, range, ""),
            (None, Some(chars)) => CharSelection::Set(chars.clone()),
            (None, None) => CharSelection::All,
        };
        Ok(ConversionOptions::new(self.format.into())
            .with_selection(selection)
            .with_reverse_winding(self.reverse_winding))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert fonts to typeface data
    Convert {
        #[command(flatten)]
        args: ConvertArgs,
    },
    /// Show family, metrics and table summary of a font
    Info {
        /// Font file
        input: PathBuf,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Convert { args } => {
                let options = args.conversion_options()?;
                if args.stdout {
                    let [input] = args.inputs.as_slice() else {
                        bail!("--stdout needs exactly one input");
                    };
                    print!("{}", convert::convert_to_string(input.as_ref(), &options)?);
                } else {
                    convert::convert_batch(&args, &options)?;
                }
            }
            Commands::Info { input } => info::show_info(&input)?,
        }
        Ok(())
    }
}
