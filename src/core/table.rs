// File: src/core/table.rs
use crate::core::types::Placeholder;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One phoneme family: a placeholder and the surface spellings it may take.
/// The first spelling is the canonical one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub placeholder: Placeholder,
    pub spellings: Vec<String>,
}

impl Family {
    pub fn new<S, T>(placeholder: Placeholder, spellings: S) -> Self
    where
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            placeholder,
            spellings: spellings.into_iter().map(Into::into).collect(),
        }
    }

    /// The spelling every surviving placeholder is rewritten to.
    pub fn canonical(&self) -> &str {
        // Non-empty: checked by EquivalenceTable::new.
        &self.spellings[0]
    }
}

/// The read-only equivalence table the engine expands against.
///
/// Families are kept in declaration order. That order is the order in which
/// canonicalization and segment expansion visit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Family>", into = "Vec<Family>")]
pub struct EquivalenceTable {
    families: Vec<Family>,
}

impl EquivalenceTable {
    /// Validates and builds a table.
    ///
    /// Rejects empty spelling lists, empty spellings, repeated placeholders and
    /// spellings that contain a placeholder of the table. The last rule keeps
    /// `canonicalize` idempotent.
    pub fn new(families: Vec<Family>) -> Result<Self> {
        let mut seen = HashSet::new();
        for family in &families {
            if !seen.insert(family.placeholder) {
                return Err(Error::DuplicatePlaceholder { placeholder: family.placeholder });
            }
            if family.spellings.is_empty() {
                return Err(Error::EmptySpellings { placeholder: family.placeholder });
            }
        }

        for family in &families {
            for spelling in &family.spellings {
                if spelling.is_empty() {
                    return Err(Error::EmptySpelling { placeholder: family.placeholder });
                }
                if let Some(found) = spelling.chars().find(|c| seen.contains(c)) {
                    return Err(Error::PlaceholderInSpelling {
                        placeholder: family.placeholder,
                        spelling: spelling.clone(),
                        found,
                    });
                }
            }
        }

        Ok(Self { families })
    }

    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Placeholder, S)>,
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(p, s)| Family::new(p, s)).collect())
    }

    /// The palatal nasal, velar nasal and rounded vowel families.
    pub fn reference() -> Self {
        Self {
            families: vec![
                Family::new('ɲ', ["ny", "ni", "nyi"]),
                Family::new('ŋ', ["ng", "ny"]),
                Family::new('ʊ', ["ou", "o", "u"]),
            ],
        }
    }

    pub fn families(&self) -> &[Family] {
        &self.families
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&Family> {
        self.families.iter().find(|f| f.placeholder == placeholder)
    }

    pub fn is_placeholder(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    /// Rewrites every placeholder still present in `variant` to its family's
    /// canonical spelling, one left-to-right pass per family in table order.
    ///
    /// Two variants that reach the same spelling through different
    /// substitution paths compare equal afterwards.
    pub fn canonicalize(&self, variant: &str) -> String {
        let mut out = variant.to_string();
        for family in &self.families {
            if out.contains(family.placeholder) {
                out = out.replace(family.placeholder, family.canonical());
            }
        }
        out
    }
}

impl Default for EquivalenceTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<Family>> for EquivalenceTable {
    type Error = Error;

    fn try_from(families: Vec<Family>) -> Result<Self> {
        Self::new(families)
    }
}

impl From<EquivalenceTable> for Vec<Family> {
    fn from(table: EquivalenceTable) -> Self {
        table.families
    }
}
