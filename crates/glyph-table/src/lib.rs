//! # Glyph Table
//!
//! Compact codepoint-to-name lookup tables for icon fonts.
//!
//! Names are split into CamelCase tokens, the tokens of one font are interned
//! most-frequent-first, and every codepoint between the smallest and largest one
//! gets an `(offset, length)` slot into a shared token index stream. The result
//! can be rendered as static C declarations.
//!
//! ## Example
//!
//! ```
//! use glyph_table::{DenseTable, IndexWidth};
//!
//! let table = DenseTable::encode([(0xE700, "Home"), (0xE701, "Settings16")]).unwrap();
//! assert_eq!(table.base(), 0xE700);
//! assert_eq!(table.count(), 2);
//! assert_eq!(table.index_width(), IndexWidth::U8);
//! assert_eq!(table.name(0xE701).as_deref(), Some("Settings16"));
//!
//! let mut header = Vec::new();
//! glyph_table::header::write_table(&mut header, &table, "kIcons").unwrap();
//! ```

mod dense;
mod error;
pub mod header;
mod interner;
mod tokenizer;

pub use dense::{DenseTable, IndexWidth, MAX_NAME_TOKENS, MAX_TOKENS, U8_TOKEN_LIMIT};
pub use error::{Error, Result};
pub use interner::TokenTable;
pub use tokenizer::tokenize;
