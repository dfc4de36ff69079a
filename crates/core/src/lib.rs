//! `stockkeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;

pub use error::{DomainError, DomainResult};
