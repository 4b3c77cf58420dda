//! SQLite storage bootstrap for the contact store.
//!
//! # Responsibility
//! - Open and configure the single SQLite connection used by the process.
//! - Ensure the `core` contact table exists before any data access.
//!
//! # Invariants
//! - The schema DDL is idempotent; repeated opens never duplicate the table
//!   or drop existing rows.
//! - Core code must not read or write contact data before the schema check
//!   succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_store, open_store_in_memory, DEFAULT_STORE_FILE};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The store file could not be opened or created.
    Open {
        path: String,
        source: rusqlite::Error,
    },
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open contact store `{path}`: {source}")
            }
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
