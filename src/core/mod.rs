// src/core/mod.rs
pub mod composer;
pub mod encoder;
pub mod engine;
pub mod expander;
pub mod normalizer;
pub mod table;
pub mod types;
