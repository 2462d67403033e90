// File: src/core/composer.rs
use crate::core::expander::SegmentExpander;
use crate::core::table::EquivalenceTable;
use crate::core::types::Variant;
use crate::error::{Error, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TERMINATOR: char = '.';
pub const DEFAULT_DELIMITER: char = '·';

/// Where a word is cut into morphemes.
///
/// The terminator stays in the text of the morpheme it closes. The delimiter is
/// a pure split point and never shows up in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    pub terminator: char,
    pub delimiter: char,
}

impl Boundary {
    pub fn new(terminator: char, delimiter: char) -> Result<Self> {
        if terminator == delimiter {
            return Err(Error::BoundaryClash(terminator));
        }
        Ok(Self { terminator, delimiter })
    }

    /// Morphemes of `input`, in order. Equivalent to marking every terminator
    /// with a delimiter right after it and splitting on the delimiter.
    pub fn morphemes<'s>(&self, input: &'s str) -> impl Iterator<Item = &'s str> + 's {
        let terminator = self.terminator;
        input
            .split(self.delimiter)
            .flat_map(move |piece| split_after(piece, terminator))
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self {
            terminator: DEFAULT_TERMINATOR,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Splits after every `terminator`, keeping a trailing empty piece when the
/// text ends with one.
fn split_after(piece: &str, terminator: char) -> impl Iterator<Item = &str> {
    let trailing = piece.ends_with(terminator).then_some(&piece[piece.len()..]);
    piece.split_inclusive(terminator).chain(trailing)
}

/// Builds whole-word variants out of per-morpheme expansions.
pub struct WordComposer<'a> {
    table: &'a EquivalenceTable,
    boundary: Boundary,
}

impl<'a> WordComposer<'a> {
    pub fn new(table: &'a EquivalenceTable, boundary: Boundary) -> Self {
        Self { table, boundary }
    }

    /// Every whole-word variant of an encoded word, duplicates included and
    /// unsorted. Callers deduplicate and sort once over the full output.
    ///
    /// The result has one entry per combination of morpheme variants, so its
    /// length is the product of the per-morpheme counts. Nothing here bounds
    /// that; keep inputs short when this sits on a latency-sensitive path.
    pub fn generate_variations(&self, input: &str) -> Vec<Variant> {
        if input.is_empty() {
            return vec![String::new()];
        }

        let expander = SegmentExpander::new(self.table);
        let mut variations = vec![String::new()];

        for morpheme in self.boundary.morphemes(input) {
            let morpheme_variants = expander.expand(morpheme);
            tracing::trace!(morpheme, count = morpheme_variants.len(), "expanded morpheme");

            variations = variations
                .iter()
                .cartesian_product(morpheme_variants.iter())
                .map(|(prefix, variant)| self.table.canonicalize(&format!("{prefix}{variant}")))
                .collect();
        }

        variations
    }
}
