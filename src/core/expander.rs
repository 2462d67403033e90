// File: src/core/expander.rs
use crate::core::table::EquivalenceTable;
use crate::core::types::{Occurrence, Placeholder, Variant};
use itertools::Itertools;

/// Forward scan for `pattern` in `segment`, resuming one character past the
/// start of each match.
pub fn occurrences(segment: &str, pattern: Placeholder) -> impl Iterator<Item = Occurrence> + '_ {
    segment
        .char_indices()
        .filter(move |&(_, c)| c == pattern)
        .map(move |(start, _)| Occurrence { start, pattern })
}

/// Replaces exactly the one occurrence `at` with `spelling`.
pub fn splice(segment: &str, at: Occurrence, spelling: &str) -> String {
    let mut out = String::with_capacity(segment.len() + spelling.len());
    out.push_str(&segment[..at.start]);
    out.push_str(spelling);
    out.push_str(&segment[at.end()..]);
    out
}

/// Expands a single morpheme into its one-substitution variants.
pub struct SegmentExpander<'a> {
    table: &'a EquivalenceTable,
}

impl<'a> SegmentExpander<'a> {
    pub fn new(table: &'a EquivalenceTable) -> Self {
        Self { table }
    }

    /// The identity plus, for every occurrence of every family's placeholder
    /// and every spelling of that family, the segment with that one
    /// occurrence substituted. All canonicalized, duplicates dropped,
    /// insertion order kept.
    ///
    /// Occurrences are never combined with each other inside one segment.
    pub fn expand(&self, segment: &str) -> Vec<Variant> {
        let identity = std::iter::once(self.table.canonicalize(segment));

        let substituted = self.table.families().iter().flat_map(move |family| {
            occurrences(segment, family.placeholder).flat_map(move |at| {
                family
                    .spellings
                    .iter()
                    .map(move |spelling| self.table.canonicalize(&splice(segment, at, spelling)))
            })
        });

        identity.chain(substituted).unique().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic() -> EquivalenceTable {
        EquivalenceTable::from_pairs([('A', ["a1", "a2"]), ('B', ["b1", "b2"])]).unwrap()
    }

    #[test]
    fn occurrences_report_byte_offsets() {
        let found: Vec<_> = occurrences("ɲaɲ", 'ɲ').map(|o| o.start).collect();
        assert_eq!(found, vec![0, 3]);
        assert_eq!(occurrences("", 'ɲ').count(), 0);
    }

    #[test]
    fn splice_replaces_a_single_occurrence() {
        let at = Occurrence { start: 3, pattern: 'ɲ' };
        assert_eq!(splice("ɲaɲ", at, "ni"), "ɲani");
    }

    #[test]
    fn two_family_segment() {
        let table = synthetic();
        let variants = SegmentExpander::new(&table).expand("AB");
        // AB, a1B, a2B, Ab1, Ab2 after canonicalization.
        assert_eq!(variants, vec!["a1b1", "a2b1", "a1b2"]);
    }

    #[test]
    fn segment_without_matches_is_a_singleton() {
        let table = synthetic();
        let expander = SegmentExpander::new(&table);
        assert_eq!(expander.expand("pan"), vec!["pan"]);
        assert_eq!(expander.expand(""), vec![""]);
    }

    #[test]
    fn occurrences_are_substituted_one_at_a_time() {
        let table = synthetic();
        let variants = SegmentExpander::new(&table).expand("AA");
        assert_eq!(variants, vec!["a1a1", "a2a1", "a1a2"]);
        assert!(!variants.contains(&"a2a2".to_string()));
    }

    #[test]
    fn reference_segment() {
        let table = EquivalenceTable::reference();
        let variants = SegmentExpander::new(&table).expand("ɲʊ.");
        assert_eq!(
            variants,
            vec!["nyou.", "niou.", "nyiou.", "nyo.", "nyu."]
        );
    }
}
