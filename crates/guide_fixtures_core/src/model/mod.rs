//! Localized content store data model.
//!
//! # Responsibility
//! - Define the canonical shapes for tasks, translations and taxonomy codes.
//! - Keep one partial `Store` shape shared by fixtures, ingestion and emitters.
//!
//! # Invariants
//! - Every task is keyed by its own `id`.
//! - Every supported locale has an entry in every `LocalizedText` field.
//! - Every taxonomy code maps to a record carrying an icon.

pub mod locale;
pub mod store;
pub mod task;
pub mod taxonomy;
