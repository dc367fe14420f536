//! Glyphmap Core - icon font name extraction and table generation.

pub mod fonts;
pub mod header;
pub mod io;
pub mod markdown;
pub mod pipeline;
pub mod record;
pub mod tsv;

pub use glyph_table::{DenseTable, IndexWidth, TokenTable, tokenize};
pub use pipeline::{GenerateOptions, OutputFormat, Summary, collect_records, generate, render};
pub use record::{Record, normalize};
