//! Case-insensitive name filtering and autocomplete suggestions.
//!
//! # Responsibility
//! - Match contacts by substring of `name` as the user types.
//! - Derive the suggestion set from the current table contents.
//!
//! # Invariants
//! - The needle is escaped before regex compilation, so matching is always
//!   literal-substring, never pattern syntax.
//! - An empty needle matches every contact.
//! - Result order preserves the input order.

use crate::db::DbResult;
use crate::model::contact::Contact;
use regex::{Regex, RegexBuilder};
use rusqlite::Connection;
use std::collections::BTreeSet;

/// Live filter over the contact name column.
///
/// Rebuilt on each search-box change; applying it never touches storage.
#[derive(Debug, Clone)]
pub struct NameFilter {
    // None when the needle is empty, which matches everything.
    matcher: Option<Regex>,
}

impl NameFilter {
    /// Compiles a filter for a literal needle, case-insensitively.
    pub fn new(needle: &str) -> Self {
        if needle.is_empty() {
            return Self { matcher: None };
        }

        let matcher = RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(true)
            .build()
            .expect("escaped needle is a valid literal pattern");
        Self {
            matcher: Some(matcher),
        }
    }

    /// Returns whether a single name matches this filter.
    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(name),
            None => true,
        }
    }

    /// Applies the filter as a view over `contacts`, preserving order.
    pub fn apply<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        contacts
            .iter()
            .filter(|contact| self.matches(&contact.name))
            .collect()
    }
}

/// Returns the lower-cased, deduplicated, sorted set of stored names.
///
/// Recomputed from the table on every call; callers must not cache the
/// result across mutations.
pub fn name_suggestions(conn: &Connection) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM core;")?;
    let mut rows = stmt.query([])?;

    let mut names = BTreeSet::new();
    while let Some(row) = rows.next()? {
        let name: String = row.get(0)?;
        names.insert(name.to_lowercase());
    }

    Ok(names.into_iter().collect())
}
