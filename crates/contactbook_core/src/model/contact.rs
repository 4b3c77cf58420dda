//! Contact domain model and field validation.
//!
//! # Responsibility
//! - Define `Contact` (persisted) and `ContactDraft` (unsaved input).
//! - Validate drafts before they reach storage or leave a CSV file.
//!
//! # Invariants
//! - `ContactDraft` serde field names are the CSV column contract
//!   (`name,job,email,mobile`, in declaration order).
//! - An empty `job` input is normalized to `None`; the other fields are
//!   required and length-capped.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned contact identifier (SQLite rowid domain).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = i64;

/// Maximum lengths enforced by the store schema, in characters.
pub const NAME_MAX_CHARS: usize = 40;
pub const JOB_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 40;
pub const MOBILE_MAX_CHARS: usize = 40;

/// Validation failure for a single contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// A required field was empty.
    MissingField(&'static str),
    /// A field exceeded its schema length ceiling.
    TooLong {
        field: &'static str,
        max_chars: usize,
        actual_chars: usize,
    },
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "contact {field} must not be empty"),
            Self::TooLong {
                field,
                max_chars,
                actual_chars,
            } => write!(
                f,
                "contact {field} is {actual_chars} characters, maximum is {max_chars}"
            ),
        }
    }
}

impl Error for ContactValidationError {}

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique, monotonically increasing id assigned on insert.
    pub id: ContactId,
    pub name: String,
    /// Optional occupation. `None` when the user left it blank.
    pub job: Option<String>,
    pub email: String,
    pub mobile: String,
}

/// Contact input that has not been persisted yet.
///
/// Doubles as the CSV row shape for import and export; the serde field
/// names below are what the file header is validated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub job: Option<String>,
    pub email: String,
    pub mobile: String,
}

impl ContactDraft {
    /// Creates a draft from raw field values, normalizing a blank job to
    /// `None`.
    pub fn new(
        name: impl Into<String>,
        job: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        let job = job.into();
        Self {
            name: name.into(),
            job: if job.is_empty() { None } else { Some(job) },
            email: email.into(),
            mobile: mobile.into(),
        }
    }

    /// Checks required fields and length ceilings.
    ///
    /// # Contract
    /// - `name`, `email` and `mobile` must be non-empty.
    /// - All fields must fit the store schema limits.
    /// - The first violation is returned; storage never sees invalid drafts.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("mobile", &self.mobile)?;

        require_max_chars("name", &self.name, NAME_MAX_CHARS)?;
        if let Some(job) = &self.job {
            require_max_chars("job", job, JOB_MAX_CHARS)?;
        }
        require_max_chars("email", &self.email, EMAIL_MAX_CHARS)?;
        require_max_chars("mobile", &self.mobile, MOBILE_MAX_CHARS)?;

        Ok(())
    }

    /// Promotes this draft to a stored contact once storage assigned an id.
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            job: self.job,
            email: self.email,
            mobile: self.mobile,
        }
    }
}

impl From<&Contact> for ContactDraft {
    /// Projects a stored contact back to its four user-visible fields,
    /// as used by CSV export.
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            job: contact.job.clone(),
            email: contact.email.clone(),
            mobile: contact.mobile.clone(),
        }
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ContactValidationError> {
    if value.is_empty() {
        return Err(ContactValidationError::MissingField(field));
    }
    Ok(())
}

fn require_max_chars(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ContactValidationError> {
    let actual_chars = value.chars().count();
    if actual_chars > max_chars {
        return Err(ContactValidationError::TooLong {
            field,
            max_chars,
            actual_chars,
        });
    }
    Ok(())
}
