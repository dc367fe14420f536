//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, error::ErrorKind};
use glyphmap_core::{GenerateOptions, generate};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "glyphmap", version)]
#[command(about = "Extract icon font glyph names from documentation tables")]
#[command(long_about = "Extract glyph name mappings from icon font documentation tables.\n\n\
    Writes a tab-separated dataset, or, when the output path ends in .h, a C header with one \
    compact tokenized lookup table per font.")]
#[command(after_help = "Examples:\n  \
    glyphmap --md segoe-ui-symbol-font.md --md segoe-fluent-icons-font.md --out names.tsv\n  \
    glyphmap --md icons.md --font 'Test Icons' --out names.h")]
pub struct Cli {
    /// Markdown document containing a glyph table (repeatable)
    #[arg(long = "md", value_name = "PATH", required = true)]
    pub inputs: Vec<PathBuf>,
    /// Output file; a .h extension selects the C header form
    #[arg(long = "out", value_name = "PATH")]
    pub output: PathBuf,
    /// Font family for the matching --md (repeat once per --md)
    #[arg(long = "font", value_name = "NAME")]
    pub fonts: Vec<String>,
    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check argument combinations clap cannot express.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if !self.fonts.is_empty() && self.fonts.len() != self.inputs.len() {
            return Err(Self::command().error(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "--font must be provided for each --md when used ({} --font for {} --md)",
                    self.fonts.len(),
                    self.inputs.len()
                ),
            ));
        }
        Ok(())
    }

    /// Default log level; `RUST_LOG` overrides it.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    pub fn options(&self) -> GenerateOptions {
        GenerateOptions::new(&self.inputs, &self.output).with_fonts(&self.fonts)
    }

    pub fn run(&self) -> Result<()> {
        generate(&self.options())?;
        Ok(())
    }
}
