//! Dense codepoint-indexed name tables.
//!
//! A [`DenseTable`] covers every codepoint from the smallest to the largest one
//! in a font group. Each slot points into a shared stream of token indices with
//! an `(offset, length)` pair. Absent codepoints hold `(0, 0)`, which is the
//! same as a name that produced no tokens; consumers cannot tell the two apart.
//!
//! A non-empty group whose names all produce no tokens has an empty token list
//! and an empty stream. Its header arrays then have empty initializers, which C
//! only accepts from C23 on.

use std::collections::BTreeMap;

use log::debug;

use crate::{Error, Result, TokenTable, tokenize};

/// Largest vocabulary that still fits an 8-bit token index.
pub const U8_TOKEN_LIMIT: usize = u8::MAX as usize;

/// Largest vocabulary that fits a 16-bit token index.
pub const MAX_TOKENS: usize = u16::MAX as usize;

/// Most tokens a single name may split into (lengths are stored as `u8`).
pub const MAX_NAME_TOKENS: usize = u8::MAX as usize;

/// Storage width of entries in the token index stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexWidth {
    U8,
    U16,
}

impl IndexWidth {
    /// Narrowest width that can address `token_count` tokens.
    pub fn for_token_count(token_count: usize) -> Self {
        if token_count <= U8_TOKEN_LIMIT { Self::U8 } else { Self::U16 }
    }

    pub fn is_u8(self) -> bool {
        self == Self::U8
    }

    /// C integer type for this width.
    pub fn c_type(self) -> &'static str {
        match self {
            Self::U8 => "uint8_t",
            Self::U16 => "uint16_t",
        }
    }
}

/// Tokenized name table for one font group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseTable {
    base: u32,
    count: u32,
    offsets: Vec<u32>,
    lengths: Vec<u8>,
    stream: Vec<u16>,
    tokens: TokenTable,
    index_width: IndexWidth,
}

impl DenseTable {
    /// Encode `(codepoint, name)` pairs.
    ///
    /// When a codepoint repeats, the first name is kept.
    pub fn encode<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: AsRef<str>,
    {
        let mut names: BTreeMap<u32, S> = BTreeMap::new();
        for (codepoint, name) in entries {
            names.entry(codepoint).or_insert(name);
        }

        let (Some(&base), Some(&last)) = (names.keys().next(), names.keys().next_back()) else {
            return Ok(Self::empty());
        };
        let count = (last - base)
            .checked_add(1)
            .ok_or(Error::RangeTooLarge { base, last })?;

        let tokenized: Vec<(u32, Vec<&str>)> =
            names.iter().map(|(&cp, name)| (cp, tokenize(name.as_ref()))).collect();

        if let Some((codepoint, toks)) = tokenized.iter().find(|(_, t)| t.len() > MAX_NAME_TOKENS) {
            return Err(Error::NameTooLong { codepoint: *codepoint, tokens: toks.len() });
        }

        let tokens = TokenTable::build(tokenized.iter().map(|(_, t)| t.iter().copied()));
        if tokens.len() > MAX_TOKENS {
            return Err(Error::TooManyTokens(tokens.len()));
        }

        let mut offsets = vec![0u32; count as usize];
        let mut lengths = vec![0u8; count as usize];
        let mut stream = Vec::new();

        for (codepoint, toks) in &tokenized {
            if toks.is_empty() {
                continue;
            }
            let slot = (codepoint - base) as usize;
            offsets[slot] = stream.len() as u32;
            lengths[slot] = toks.len() as u8;
            // Every token was interned above and the vocabulary fits u16.
            stream.extend(toks.iter().filter_map(|t| tokens.get(t)).map(|i| i as u16));
        }

        let index_width = IndexWidth::for_token_count(tokens.len());
        debug!(
            "Encoded {} names over {base:#06X}..={last:#06X}: \
             {} tokens, {} stream entries, {index_width:?}",
            names.len(),
            tokens.len(),
            stream.len()
        );

        Ok(Self { base, count, offsets, lengths, stream, tokens, index_width })
    }

    /// A zero-sized table.
    pub fn empty() -> Self {
        Self {
            base: 0,
            count: 0,
            offsets: Vec::new(),
            lengths: Vec::new(),
            stream: Vec::new(),
            tokens: TokenTable::default(),
            index_width: IndexWidth::U8,
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of slots, `last - base + 1`.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Per-slot offsets into [`Self::stream`].
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Per-slot token counts.
    pub fn lengths(&self) -> &[u8] {
        &self.lengths
    }

    /// Flat token index stream shared by all slots.
    pub fn stream(&self) -> &[u16] {
        &self.stream
    }

    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    pub fn index_width(&self) -> IndexWidth {
        self.index_width
    }

    /// `(offset, length)` of the slot for `codepoint`, if it is in range.
    pub fn slot(&self, codepoint: u32) -> Option<(u32, u8)> {
        let index = self.slot_index(codepoint)?;
        Some((self.offsets[index], self.lengths[index]))
    }

    /// Token indices of the name at `codepoint`.
    ///
    /// Returns `None` outside the range and for zero-length slots.
    pub fn token_ids(&self, codepoint: u32) -> Option<&[u16]> {
        let index = self.slot_index(codepoint)?;
        self.ids_at(index)
    }

    /// Rebuild the name at `codepoint` by concatenating its tokens.
    pub fn name(&self, codepoint: u32) -> Option<String> {
        let ids = self.token_ids(codepoint)?;
        ids.iter().map(|&id| self.tokens.token(id as usize)).collect()
    }

    /// Lowest codepoint whose tokens spell `name`.
    pub fn codepoint_of(&self, name: &str) -> Option<u32> {
        let wanted: Vec<u16> = tokenize(name)
            .into_iter()
            .map(|t| self.tokens.get(t).map(|i| i as u16))
            .collect::<Option<_>>()?;
        if wanted.is_empty() {
            return None;
        }
        (0..self.count as usize)
            .find(|&index| self.ids_at(index) == Some(wanted.as_slice()))
            .map(|index| self.base + index as u32)
    }

    /// Present codepoints with their token indices, ascending.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &[u16])> + '_ {
        (0..self.count as usize)
            .filter_map(move |index| self.ids_at(index).map(|ids| (self.base + index as u32, ids)))
    }

    fn slot_index(&self, codepoint: u32) -> Option<usize> {
        let index = codepoint.checked_sub(self.base)?;
        (index < self.count).then_some(index as usize)
    }

    fn ids_at(&self, index: usize) -> Option<&[u16]> {
        let length = usize::from(self.lengths[index]);
        if length == 0 {
            return None;
        }
        let offset = self.offsets[index] as usize;
        self.stream.get(offset..offset + length)
    }
}
