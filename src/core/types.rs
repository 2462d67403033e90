// src/core/types.rs

/// A single internal symbol standing for one phoneme, e.g. `ɲ`.
pub type Placeholder = char;

/// A candidate surface spelling of a morpheme or a whole word.
pub type Variant = String;

/// One occurrence of a placeholder inside a morpheme.
/// `start` is a byte offset into the morpheme text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub start: usize,
    pub pattern: Placeholder,
}

impl Occurrence {
    /// Byte offset one past the matched pattern.
    pub fn end(&self) -> usize {
        self.start + self.pattern.len_utf8()
    }
}
