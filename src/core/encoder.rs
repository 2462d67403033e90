// File: src/core/encoder.rs
use crate::core::types::Placeholder;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// `pattern` is rewritten to `placeholder` before expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigraphRule {
    pub pattern: String,
    pub placeholder: Placeholder,
}

impl DigraphRule {
    pub fn new(pattern: impl Into<String>, placeholder: Placeholder) -> Self {
        Self { pattern: pattern.into(), placeholder }
    }
}

/// Rewrites multi-character spellings into single placeholder glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigraphEncoder {
    /// Longest pattern first so `chh` wins over `ch`.
    rules: Vec<DigraphRule>,
}

impl DigraphEncoder {
    pub fn new(mut rules: Vec<DigraphRule>) -> Result<Self> {
        if rules.iter().any(|r| r.pattern.is_empty()) {
            return Err(Error::EmptyDigraph);
        }
        // Stable: equal-length patterns keep their declared priority.
        rules.sort_by_key(|r| std::cmp::Reverse(r.pattern.len()));
        Ok(Self { rules })
    }

    pub fn reference() -> Self {
        let rules = vec![
            DigraphRule::new("chh", 'ç'),
            DigraphRule::new("ch", 'ʧ'),
            DigraphRule::new("ng", 'ŋ'),
            DigraphRule::new("ny", 'ɲ'),
            DigraphRule::new("ni", 'ɲ'),
            DigraphRule::new("sh", 'ʃ'),
            DigraphRule::new("si", 'ʃ'),
            DigraphRule::new("j", 'ʧ'),
        ];
        Self { rules }
    }

    pub fn rules(&self) -> &[DigraphRule] {
        &self.rules
    }

    /// Left-to-right, non-overlapping; at each position the longest matching
    /// pattern is replaced, anything else is copied through.
    pub fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        'scan: while let Some(c) = rest.chars().next() {
            for rule in &self.rules {
                if let Some(tail) = rest.strip_prefix(rule.pattern.as_str()) {
                    out.push(rule.placeholder);
                    rest = tail;
                    continue 'scan;
                }
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }

        out
    }
}

impl Default for DigraphEncoder {
    fn default() -> Self {
        Self::reference()
    }
}
