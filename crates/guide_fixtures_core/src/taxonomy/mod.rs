//! Taxonomy views derived from a store.
//!
//! # Responsibility
//! - Interpret the `parent:child` code convention as an explicit tree.
//! - Surface drift between taxonomy fixtures meant to describe the same data.

pub mod drift;
pub mod tree;
