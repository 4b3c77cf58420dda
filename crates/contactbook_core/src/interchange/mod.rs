//! CSV interchange between the contact store and the filesystem.
//!
//! # Responsibility
//! - Parse import files into contact drafts with strict header validation.
//! - Serialize the current contact set to a user-chosen export file.
//!
//! # Invariants
//! - Both directions use the fixed column set `name,job,email,mobile`.
//! - A header mismatch or malformed row fails the whole import; no partial
//!   row set is handed to the caller.
//! - Export never creates or touches a file unless the destination passed
//!   the `.csv` extension check.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod export;
mod import;

pub use export::{export_path, write_contacts};
pub use import::read_contacts;

/// Fixed CSV column set, in file order.
pub const CSV_COLUMNS: [&str; 4] = ["name", "job", "email", "mobile"];

pub type InterchangeResult<T> = Result<T, InterchangeError>;

/// Error for CSV import/export operations.
#[derive(Debug)]
pub enum InterchangeError {
    /// Import file header differs from [`CSV_COLUMNS`].
    InvalidHeaders { found: Vec<String> },
    /// A data row could not be decoded (column count, encoding).
    MalformedRow { line: u64, message: String },
    /// Export destination had no filename.
    MissingFileName,
    /// Export destination does not end in `.csv`.
    NotCsv(PathBuf),
    Csv(csv::Error),
    Io(std::io::Error),
}

impl Display for InterchangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHeaders { found } => write!(
                f,
                "invalid headers `{}`; expected `{}`",
                found.join(","),
                CSV_COLUMNS.join(",")
            ),
            Self::MalformedRow { line, message } => {
                write!(f, "malformed CSV row at line {line}: {message}")
            }
            Self::MissingFileName => write!(f, "export destination needs a folder and a filename"),
            Self::NotCsv(path) => {
                write!(f, "export file `{}` must be in `.csv` format", path.display())
            }
            Self::Csv(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InterchangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for InterchangeError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<std::io::Error> for InterchangeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
