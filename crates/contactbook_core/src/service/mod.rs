//! Use-case services binding repository and CSV interchange.
//!
//! # Responsibility
//! - Provide one stable entry point per user action (add, bulk import,
//!   delete, export, clear all).
//! - Keep callers decoupled from storage and file-format details.

pub mod contact_service;
