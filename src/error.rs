// File: src/error.rs
use std::path::PathBuf;

use crate::core::types::Placeholder;

/// Everything that can go wrong outside the (total) generation path:
/// table validation, config persistence, query assembly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("placeholder {placeholder:?} has no spellings")]
    EmptySpellings { placeholder: Placeholder },

    #[error("placeholder {placeholder:?} has an empty spelling")]
    EmptySpelling { placeholder: Placeholder },

    #[error("placeholder {placeholder:?} is declared more than once")]
    DuplicatePlaceholder { placeholder: Placeholder },

    #[error("spelling {spelling:?} of {placeholder:?} contains placeholder {found:?}")]
    PlaceholderInSpelling {
        placeholder: Placeholder,
        spelling: String,
        found: Placeholder,
    },

    #[error("digraph rule has an empty pattern")]
    EmptyDigraph,

    #[error("terminator and delimiter must differ (both {0:?})")]
    BoundaryClash(char),

    #[error("cannot build a query from zero patterns")]
    NoPatterns,

    #[error("unsupported config format for {0}")]
    UnknownFormat(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),

    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, Error>;
