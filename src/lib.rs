// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod query;

pub use crate::config::EngineConfig;
pub use crate::core::engine::Engine;
pub use crate::core::table::{EquivalenceTable, Family};
pub use crate::error::{Error, Result};
