//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `core` contact table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `ContactDraft::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `add_bulk` and `clear_all` are all-or-nothing at the database level;
//!   per-row validation rejects are reported, not silently dropped.

use crate::db::DbError;
use crate::model::contact::{Contact, ContactDraft, ContactId, ContactValidationError};
use log::info;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT id, name, job, email, mobile FROM core";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Outcome of a bulk insert: which drafts were stored and which were
/// rejected by validation, keyed by their position in the input.
#[derive(Debug, Default)]
pub struct BulkAddOutcome {
    pub added: Vec<Contact>,
    pub rejected: Vec<(usize, ContactValidationError)>,
}

/// Repository interface for contact CRUD operations.
pub trait ContactRepository {
    /// Validates and inserts one draft, returning the stored contact with
    /// its assigned id.
    fn add(&self, draft: &ContactDraft) -> RepoResult<Contact>;
    /// Inserts many drafts in one transaction, reporting per-row outcomes.
    fn add_bulk(&self, drafts: &[ContactDraft]) -> RepoResult<BulkAddOutcome>;
    /// Deletes one contact by id. `Ok(false)` acknowledges a missing id.
    fn delete(&self, id: ContactId) -> RepoResult<bool>;
    /// Removes every contact, all-or-nothing. Returns the removed count.
    fn clear_all(&self) -> RepoResult<usize>;
    /// Returns every contact in id order.
    fn all(&self) -> RepoResult<Vec<Contact>>;
    /// Returns the number of stored contacts.
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed contact repository.
///
/// Holds a borrowed connection: the store handle is opened once at startup
/// and threaded explicitly into collaborators.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn insert_draft(conn: &Connection, draft: &ContactDraft) -> RepoResult<Contact> {
        conn.execute(
            "INSERT INTO core (name, job, email, mobile) VALUES (?1, ?2, ?3, ?4);",
            params![
                draft.name.as_str(),
                draft.job.as_deref(),
                draft.email.as_str(),
                draft.mobile.as_str(),
            ],
        )?;
        let id = conn.last_insert_rowid();
        Ok(draft.clone().into_contact(id))
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn add(&self, draft: &ContactDraft) -> RepoResult<Contact> {
        draft.validate()?;
        let contact = Self::insert_draft(self.conn, draft)?;
        info!("event=contact_add module=repo status=ok id={}", contact.id);
        Ok(contact)
    }

    fn add_bulk(&self, drafts: &[ContactDraft]) -> RepoResult<BulkAddOutcome> {
        let mut outcome = BulkAddOutcome::default();
        let tx = self.conn.unchecked_transaction()?;

        for (index, draft) in drafts.iter().enumerate() {
            match draft.validate() {
                Ok(()) => outcome.added.push(Self::insert_draft(&tx, draft)?),
                Err(err) => outcome.rejected.push((index, err)),
            }
        }

        tx.commit()?;
        info!(
            "event=contact_add_bulk module=repo status=ok added={} rejected={}",
            outcome.added.len(),
            outcome.rejected.len()
        );
        Ok(outcome)
    }

    fn delete(&self, id: ContactId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM core WHERE id = ?1;", [id])?;
        info!("event=contact_delete module=repo status=ok id={id} removed={changed}");
        Ok(changed > 0)
    }

    fn clear_all(&self) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = tx.execute("DELETE FROM core;", [])?;
        tx.commit()?;
        info!("event=contact_clear_all module=repo status=ok removed={removed}");
        Ok(removed)
    }

    fn all(&self) -> RepoResult<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn count(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM core;", [], |row| row.get::<_, u64>(0))?;
        Ok(count)
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let contact = Contact {
        id: row.get("id")?,
        name: row.get("name")?,
        job: row.get("job")?,
        email: row.get("email")?,
        mobile: row.get("mobile")?,
    };

    // A row that no longer satisfies the field rules points at outside
    // tampering with the store file; surface it instead of exporting it.
    ContactDraft::from(&contact).validate().map_err(|err| {
        RepoError::InvalidData(format!("contact id {} fails field rules: {err}", contact.id))
    })?;

    Ok(contact)
}
