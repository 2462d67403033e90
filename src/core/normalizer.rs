// File: src/core/normalizer.rs

pub const RAW_APOSTROPHE: char = '\'';
pub const APOSTROPHE: char = '’';

/// Allow-list filter applied to raw user input before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    /// Allowed besides ASCII letters and the two apostrophes.
    extra: Vec<char>,
}

impl Normalizer {
    pub fn new(extra: impl IntoIterator<Item = char>) -> Self {
        Self { extra: extra.into_iter().collect() }
    }

    /// Keeps the terminator and the `%` wildcard.
    pub fn reference() -> Self {
        Self::new(['.', '%'])
    }

    pub fn extra(&self) -> &[char] {
        &self.extra
    }

    pub fn is_allowed(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || c == RAW_APOSTROPHE || c == APOSTROPHE || self.extra.contains(&c)
    }

    /// Maps `'` to `’` and drops everything outside the allow-list.
    pub fn normalize(&self, raw: &str) -> String {
        raw.chars()
            .map(|c| if c == RAW_APOSTROPHE { APOSTROPHE } else { c })
            .filter(|&c| self.is_allowed(c))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::reference()
    }
}
