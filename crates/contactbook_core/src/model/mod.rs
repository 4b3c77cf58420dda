//! Domain model for contact records.
//!
//! # Responsibility
//! - Define the canonical contact shape shared by storage, CSV interchange
//!   and search.
//! - Own field-level validation rules (required fields, length ceilings).
//!
//! # Invariants
//! - A persisted contact always has non-empty `name`, `email` and `mobile`.
//! - `id` is storage-assigned and never reused for another contact.

pub mod contact;
