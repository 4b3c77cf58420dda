//! CSV import parsing.
//!
//! # Responsibility
//! - Read an import file into contact drafts under the fixed column set.
//!
//! # Invariants
//! - The header row must equal `name,job,email,mobile` exactly
//!   (order and names, case-sensitive) before any data row is read.
//! - Field emptiness is not checked here; the repository validates drafts
//!   when they are inserted.

use super::{InterchangeError, InterchangeResult, CSV_COLUMNS};
use crate::model::contact::ContactDraft;
use log::info;
use std::path::Path;

/// Parses an import file into drafts, in file order.
///
/// Fails fast with zero rows on a header mismatch, and aborts on the first
/// malformed data row with its line number.
pub fn read_contacts(path: impl AsRef<Path>) -> InterchangeResult<Vec<ContactDraft>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?;
    if headers.iter().ne(CSV_COLUMNS) {
        return Err(InterchangeError::InvalidHeaders {
            found: headers.iter().map(str::to_owned).collect(),
        });
    }

    let mut drafts = Vec::new();
    for (index, record) in reader.deserialize::<ContactDraft>().enumerate() {
        let draft = record.map_err(|err| malformed_row(index, &err))?;
        drafts.push(draft);
    }

    info!(
        "event=csv_import module=interchange status=ok path={} rows={}",
        path.display(),
        drafts.len()
    );
    Ok(drafts)
}

fn malformed_row(index: usize, err: &csv::Error) -> InterchangeError {
    // Data rows start on line 2; the reader's position is preferred since it
    // stays correct across quoted multi-line fields.
    let line = err
        .position()
        .map(csv::Position::line)
        .unwrap_or(index as u64 + 2);
    InterchangeError::MalformedRow {
        line,
        message: err.to_string(),
    }
}
