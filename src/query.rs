// File: src/query.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings for the headword lookup built from a variant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeQuery {
    pub table: String,
    pub column: String,
    pub limit: usize,
}

impl Default for LikeQuery {
    fn default() -> Self {
        Self {
            table: "table".to_string(),
            column: "headword".to_string(),
            limit: 25,
        }
    }
}

impl LikeQuery {
    /// One `LIKE` clause per pattern, OR-ed together, ordered by the column.
    pub fn build<S: AsRef<str>>(&self, patterns: &[S]) -> Result<String> {
        if patterns.is_empty() {
            return Err(Error::NoPatterns);
        }

        let column = quote_ident(&self.column);
        let clauses: Vec<String> = patterns
            .iter()
            .map(|p| format!("{column} LIKE \"{}\"", escape_literal(p.as_ref())))
            .collect();

        Ok(format!(
            "SELECT * FROM {} WHERE ({}) ORDER BY {column} ASC LIMIT {};",
            quote_ident(&self.table),
            clauses.join(" OR "),
            self.limit,
        ))
    }
}

fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn escape_literal(pattern: &str) -> String {
    pattern.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_or_chain() {
        let query = LikeQuery::default()
            .build(&["niou.pan", "nyou.pan"])
            .unwrap();
        assert_eq!(
            query,
            "SELECT * FROM `table` WHERE (`headword` LIKE \"niou.pan\" OR `headword` LIKE \"nyou.pan\") ORDER BY `headword` ASC LIMIT 25;"
        );
    }

    #[test]
    fn single_pattern_has_no_or() {
        let query = LikeQuery::default().build(&["pan"]).unwrap();
        assert!(!query.contains(" OR "));
    }

    #[test]
    fn escapes_quotes_and_identifiers() {
        let settings = LikeQuery {
            table: "we`ird".into(),
            column: "word".into(),
            limit: 3,
        };
        let query = settings.build(&["a\"b\\"]).unwrap();
        assert_eq!(
            query,
            "SELECT * FROM `we``ird` WHERE (`word` LIKE \"a\\\"b\\\\\") ORDER BY `word` ASC LIMIT 3;"
        );
    }

    #[test]
    fn empty_pattern_list_is_an_error() {
        let empty: [&str; 0] = [];
        assert!(matches!(LikeQuery::default().build(&empty), Err(Error::NoPatterns)));
    }
}
