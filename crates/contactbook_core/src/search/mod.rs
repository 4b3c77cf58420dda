//! Read-only query layer for the contact table.
//!
//! # Responsibility
//! - Provide the interactive name filter backing type-as-you-search.
//! - Provide lower-cased name suggestions for autocomplete.
//!
//! # Invariants
//! - Filtering is a view transformation; the underlying contact set is
//!   never mutated.
//! - Suggestions are recomputed from storage on every call, so they are
//!   never stale after adds or deletes.

mod filter;

pub use filter::{name_suggestions, NameFilter};
