//! End-to-end generation: documents in, one artifact out.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use indexmap::IndexMap;
use log::info;

use crate::{
    fonts::guess_font,
    header::write_header,
    io::OutputFile,
    markdown::parse_file,
    record::{Record, normalize},
    tsv::write_tsv,
};

/// Output artifact form, chosen by the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated `font`, `codepoint`, `name` lines.
    Tsv,
    /// C header with one dense table per font.
    Header,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        let is_header = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("h"));
        if is_header { Self::Header } else { Self::Tsv }
    }
}

/// Inputs for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Markdown documents, processed in order.
    pub inputs: Vec<PathBuf>,
    /// Artifact path; `.h` selects the header form.
    pub output: PathBuf,
    /// Font family per input. Empty means guess from each file name.
    pub fonts: Vec<String>,
}

impl GenerateOptions {
    pub fn new(
        inputs: impl IntoIterator<Item = impl Into<PathBuf>>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: output.into(),
            fonts: Vec::new(),
        }
    }

    pub fn with_fonts(mut self, fonts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fonts = fonts.into_iter().map(Into::into).collect();
        self
    }

    /// Font family for the input at `index`.
    fn font_for(&self, index: usize) -> String {
        match self.fonts.get(index) {
            Some(font) => font.clone(),
            None => guess_font(&self.inputs[index]).to_owned(),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub format: OutputFormat,
    /// Record count per font family, in output order.
    pub fonts: IndexMap<String, usize>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.fonts.values().sum()
    }
}

/// Parse every input and return the deduplicated, sorted record set.
pub fn collect_records(options: &GenerateOptions) -> Result<Vec<Record>> {
    if !options.fonts.is_empty() && options.fonts.len() != options.inputs.len() {
        bail!(
            "--font must be provided for each --md when used ({} fonts for {} inputs)",
            options.fonts.len(),
            options.inputs.len()
        );
    }
    if let Some(missing) = options.inputs.iter().find(|p| !p.exists()) {
        bail!("Missing file: {}", missing.display());
    }

    let mut records = Vec::new();
    for (index, path) in options.inputs.iter().enumerate() {
        records.extend(parse_file(path, &options.font_for(index))?);
    }
    Ok(normalize(records))
}

/// Render records in the given form.
pub fn render(records: &[Record], format: OutputFormat) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    match format {
        OutputFormat::Tsv => write_tsv(&mut out, records)?,
        OutputFormat::Header => write_header(&mut out, records)?,
    }
    Ok(out)
}

/// Extract glyph names from the inputs and write the artifact.
pub fn generate(options: &GenerateOptions) -> Result<Summary> {
    let records = collect_records(options)?;
    let format = OutputFormat::from_path(&options.output);
    let data = render(&records, format)?;

    let output = OutputFile::new(&options.output);
    output.write(&data)?;

    let mut fonts: IndexMap<String, usize> = IndexMap::new();
    for record in &records {
        *fonts.entry(record.font().to_owned()).or_default() += 1;
    }
    for (font, count) in &fonts {
        info!("{font}: {count} glyph names");
    }
    let summary = Summary { format, fonts };
    info!(
        "Wrote {} glyph names to {} ({format:?}, {} bytes)",
        summary.total(),
        output.path().display(),
        data.len()
    );

    Ok(summary)
}
