//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the contact data-access contract used by services and the UI.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Repository writes enforce `ContactDraft::validate()` before SQL
//!   mutations.
//! - Bulk operations are transactional: a database failure mid-batch leaves
//!   no visible partial state.

pub mod contact_repo;
