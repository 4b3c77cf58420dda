//! Contact use-case service.
//!
//! # Responsibility
//! - Orchestrate repository and interchange calls for the five user
//!   actions: add, bulk import, delete, export backup, clear all.
//! - Map bulk-import row outcomes back to CSV line numbers for reporting.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - The service stays storage-agnostic; it sees only the repository trait.

use crate::interchange::{export_path, read_contacts, write_contacts, InterchangeError};
use crate::model::contact::{Contact, ContactDraft, ContactId, ContactValidationError};
use crate::repo::contact_repo::{ContactRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for contact use-cases.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    Interchange(InterchangeError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Interchange(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Interchange(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<InterchangeError> for ServiceError {
    fn from(value: InterchangeError) -> Self {
        Self::Interchange(value)
    }
}

/// A bulk-import row rejected by validation, keyed by its CSV line.
#[derive(Debug)]
pub struct RejectedRow {
    /// 1-based line in the import file (the header is line 1).
    pub line: u64,
    pub error: ContactValidationError,
}

/// End-to-end result of a CSV import.
#[derive(Debug)]
pub struct ImportReport {
    pub imported: Vec<Contact>,
    pub rejected: Vec<RejectedRow>,
}

/// Result of a CSV export.
#[derive(Debug)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub exported: usize,
}

/// Use-case service wrapper for contact operations.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds one contact from dialog input.
    pub fn add_contact(&self, draft: &ContactDraft) -> ServiceResult<Contact> {
        Ok(self.repo.add(draft)?)
    }

    /// Imports contacts from a CSV file.
    ///
    /// # Contract
    /// - A header mismatch or malformed row fails the import with zero rows
    ///   applied.
    /// - Rows with empty required fields are skipped and reported by line;
    ///   the remaining rows are stored in one batch.
    pub fn import_contacts(&self, path: impl AsRef<Path>) -> ServiceResult<ImportReport> {
        let drafts = read_contacts(path)?;
        let outcome = self.repo.add_bulk(&drafts)?;

        let rejected = outcome
            .rejected
            .into_iter()
            .map(|(index, error)| RejectedRow {
                line: index as u64 + 2,
                error,
            })
            .collect();

        Ok(ImportReport {
            imported: outcome.added,
            rejected,
        })
    }

    /// Exports every stored contact to `folder/file_name`.
    ///
    /// The filename must end in `.csv`; on a rejected path no file is
    /// created or modified.
    pub fn export_contacts(
        &self,
        folder: impl AsRef<Path>,
        file_name: &str,
    ) -> ServiceResult<ExportSummary> {
        let path = export_path(folder.as_ref(), file_name)?;
        let contacts = self.repo.all()?;
        write_contacts(&path, &contacts)?;

        Ok(ExportSummary {
            path,
            exported: contacts.len(),
        })
    }

    /// Deletes one contact by id; `Ok(false)` acknowledges a missing id.
    pub fn delete_contact(&self, id: ContactId) -> ServiceResult<bool> {
        Ok(self.repo.delete(id)?)
    }

    /// Removes every contact. Returns the removed count.
    pub fn clear_contacts(&self) -> ServiceResult<usize> {
        Ok(self.repo.clear_all()?)
    }

    /// Returns every contact in id order.
    pub fn all_contacts(&self) -> ServiceResult<Vec<Contact>> {
        Ok(self.repo.all()?)
    }
}
