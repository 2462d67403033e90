use crate::config::EngineConfig;
use crate::core::composer::{Boundary, WordComposer};
use crate::core::encoder::DigraphEncoder;
use crate::core::expander::SegmentExpander;
use crate::core::normalizer::Normalizer;
use crate::core::table::EquivalenceTable;
use crate::core::types::Variant;
use crate::error::Result;
use crate::persistence::load_from_disk;
use crate::query::LikeQuery;
use itertools::Itertools;
use std::path::Path;

/// The spelling-variant engine: an injected equivalence table plus the
/// normalizer, digraph encoder and query settings that surround it.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Engine {
    table: EquivalenceTable,
    boundary: Boundary,
    normalizer: Normalizer,
    encoder: DigraphEncoder,
    query: LikeQuery,
}

impl Engine {
    /// Reference table and digraphs with the default boundary.
    pub fn new() -> Self {
        Self::with_table(EquivalenceTable::reference())
    }

    /// Custom table, reference front end.
    pub fn with_table(table: EquivalenceTable) -> Self {
        Self {
            table,
            boundary: Boundary::default(),
            normalizer: Normalizer::reference(),
            encoder: DigraphEncoder::reference(),
            query: LikeQuery::default(),
        }
    }

    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let EngineConfig {
            equivalences,
            digraphs,
            boundary,
            allowed_punctuation,
            query,
        } = config;

        Ok(Self {
            table: equivalences,
            boundary: Boundary::new(boundary.terminator, boundary.delimiter)?,
            normalizer: Normalizer::new(allowed_punctuation),
            encoder: DigraphEncoder::new(digraphs)?,
            query,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_config(load_from_disk(path)?)
    }

    /// Loads `path`, or falls back to the reference engine when it cannot be read.
    pub fn from_file_or_new(path: &Path) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "using reference config");
            Self::new()
        })
    }

    /// Snapshot of the active configuration, suitable for saving.
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            equivalences: self.table.clone(),
            digraphs: self.encoder.rules().to_vec(),
            boundary: self.boundary,
            allowed_punctuation: self.normalizer.extra().to_vec(),
            query: self.query.clone(),
        }
    }

    pub fn table(&self) -> &EquivalenceTable {
        &self.table
    }

    pub fn canonicalize(&self, variant: &str) -> String {
        self.table.canonicalize(variant)
    }

    pub fn expand_segment(&self, segment: &str) -> Vec<Variant> {
        SegmentExpander::new(&self.table).expand(segment)
    }

    /// Raw whole-word variants: duplicates kept, composition order.
    pub fn generate_variations(&self, encoded: &str) -> Vec<Variant> {
        WordComposer::new(&self.table, self.boundary).generate_variations(encoded)
    }

    /// Distinct variants of an already encoded word, sorted by code point.
    pub fn variants(&self, encoded: &str) -> Vec<Variant> {
        let raw = self.generate_variations(encoded);
        let generated = raw.len();

        let mut variants: Vec<Variant> = raw.into_iter().unique().collect();
        variants.sort_unstable();

        tracing::debug!(input = encoded, generated, distinct = variants.len(), "generated variants");
        variants
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    pub fn encode(&self, normalized: &str) -> String {
        self.encoder.encode(normalized)
    }

    /// Full pipeline from raw user input: normalize, encode, expand.
    pub fn spell(&self, raw: &str) -> Vec<Variant> {
        self.variants(&self.encode(&self.normalize(raw)))
    }

    /// Headword lookup for raw user input.
    pub fn query(&self, raw: &str) -> Result<String> {
        self.query.build(self.spell(raw).as_slice())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
