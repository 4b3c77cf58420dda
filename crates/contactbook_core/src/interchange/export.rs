//! CSV export writing.
//!
//! # Responsibility
//! - Compose and validate the export destination path.
//! - Write the current contact set as header plus one row per contact.
//!
//! # Invariants
//! - The destination must end in `.csv`; the check runs before any file is
//!   created, so a rejected path leaves the filesystem untouched.
//! - An existing destination file is overwritten, never appended to.

use super::{InterchangeError, InterchangeResult, CSV_COLUMNS};
use crate::model::contact::{Contact, ContactDraft};
use log::info;
use std::path::{Path, PathBuf};

/// Builds the export destination from a user-chosen folder and filename.
pub fn export_path(folder: &Path, file_name: &str) -> InterchangeResult<PathBuf> {
    if folder.as_os_str().is_empty() || file_name.is_empty() {
        return Err(InterchangeError::MissingFileName);
    }

    let path = folder.join(file_name);
    check_csv_extension(&path)?;
    Ok(path)
}

/// Writes the contact set to `path`, overwriting any existing file.
///
/// The header row is always written, even for an empty contact set.
pub fn write_contacts(path: impl AsRef<Path>, contacts: &[Contact]) -> InterchangeResult<()> {
    let path = path.as_ref();
    check_csv_extension(path)?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(CSV_COLUMNS)?;
    for contact in contacts {
        writer.serialize(ContactDraft::from(contact))?;
    }
    writer.flush()?;

    info!(
        "event=csv_export module=interchange status=ok path={} rows={}",
        path.display(),
        contacts.len()
    );
    Ok(())
}

fn check_csv_extension(path: &Path) -> InterchangeResult<()> {
    match path.extension() {
        Some(ext) if ext == "csv" => Ok(()),
        _ => Err(InterchangeError::NotCsv(path.to_path_buf())),
    }
}
