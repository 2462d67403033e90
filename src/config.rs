// File: src/config.rs
use crate::core::composer::Boundary;
use crate::core::encoder::{DigraphEncoder, DigraphRule};
use crate::core::normalizer::Normalizer;
use crate::core::table::EquivalenceTable;
use crate::query::LikeQuery;
use serde::{Deserialize, Serialize};

/// Everything an `Engine` is built from. Serializable so the table can be
/// swapped without touching code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub equivalences: EquivalenceTable,
    pub digraphs: Vec<DigraphRule>,
    pub boundary: Boundary,
    /// Characters kept by the normalizer on top of letters and apostrophes.
    pub allowed_punctuation: Vec<char>,
    pub query: LikeQuery,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            equivalences: EquivalenceTable::reference(),
            digraphs: DigraphEncoder::reference().rules().to_vec(),
            boundary: Boundary::default(),
            allowed_punctuation: Normalizer::reference().extra().to_vec(),
            query: LikeQuery::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{ "query": { "table": "words", "column": "lemma", "limit": 10 } }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.equivalences, EquivalenceTable::reference());
        assert_eq!(config.query.table, "words");
        assert_eq!(config.boundary, Boundary::default());
    }

    #[test]
    fn json_round_trip_keeps_table_order() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        let order: Vec<char> = back.equivalences.families().iter().map(|f| f.placeholder).collect();
        assert_eq!(order, vec!['ɲ', 'ŋ', 'ʊ']);
    }

    #[test]
    fn invalid_table_in_json_is_rejected() {
        let json = r#"{ "equivalences": [ { "placeholder": "A", "spellings": [] } ] }"#;
        assert!(serde_json::from_str::<EngineConfig>(json).is_err());
    }
}
