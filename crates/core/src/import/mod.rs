//! Core types, constants, and pure logic for the spreadsheet onboarding
//! importer.
//!
//! The pipeline is parse -> validate -> preview/select -> commit, with an
//! optional error-report export at any point before the session is
//! discarded. Parsing lives in `castdesk-sheet`; everything here operates
//! on header-keyed row maps and is free of I/O:
//!
//! - [`fields`] — canonical column names of the onboarding sheet.
//! - [`rules`] — the fixed per-field validation rule set.
//! - [`preview`] — paging and selection bookkeeping for the preview table.
//! - [`report`] — consolidated error-report rows for export.

pub mod fields;
pub mod preview;
pub mod report;
pub mod rules;

use std::collections::HashMap;

use crate::error::CoreError;

/// One parsed spreadsheet row: column header -> raw cell text.
///
/// Cells are kept exactly as parsed; validation trims but never rewrites.
pub type RowRecord = HashMap<String, String>;

/// Fetch a field from a row, treating whitespace-only cells as absent.
pub fn field<'a>(row: &'a RowRecord, name: &str) -> Option<&'a str> {
    row.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// A candidate record drafted from one spreadsheet row, ready to be mapped
/// to a store insert. Built for every committed row, including rows the
/// user selected despite validation errors, so every value is best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDraft {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub username: Option<String>,
    pub profile_url: Option<String>,
    pub followers: Option<i32>,
    pub following: Option<i32>,
    pub remarks: Option<String>,
    pub source: Option<String>,
}

/// Draft a candidate from a row.
///
/// The full name comes from `full_name`, or from `first_name` + `last_name`
/// joined with a space; the email from `email`, falling back to
/// `public_email`. Follower counts that fail to parse are dropped rather
/// than rejected (validation has already annotated them).
pub fn draft_candidate(row: &RowRecord) -> CandidateDraft {
    let full_name = match field(row, fields::COL_FULL_NAME) {
        Some(name) => name.to_string(),
        None => {
            let first = field(row, fields::COL_FIRST_NAME).unwrap_or_default();
            let last = field(row, fields::COL_LAST_NAME).unwrap_or_default();
            [first, last]
                .iter()
                .filter(|p| !p.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ")
        }
    };

    let email = field(row, fields::COL_EMAIL)
        .or_else(|| field(row, fields::COL_PUBLIC_EMAIL))
        .map(str::to_string);

    CandidateDraft {
        full_name,
        email,
        phone: field(row, fields::COL_PHONE).map(str::to_string),
        username: field(row, fields::COL_USERNAME).map(str::to_string),
        profile_url: field(row, fields::COL_PROFILE_URL).map(str::to_string),
        followers: parse_count(field(row, fields::COL_FOLLOWERS)),
        following: parse_count(field(row, fields::COL_FOLLOWING)),
        remarks: field(row, fields::COL_REMARKS).map(str::to_string),
        source: field(row, fields::COL_SOURCE).map(str::to_string),
    }
}

fn parse_count(value: Option<&str>) -> Option<i32> {
    value.and_then(|v| v.parse::<i32>().ok()).filter(|n| *n >= 0)
}

/// Reject a page size of zero before it can divide anything.
pub(crate) fn ensure_page_size(page_size: usize) -> Result<(), CoreError> {
    if page_size == 0 {
        return Err(CoreError::Validation("Page size must be positive".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RowRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_field_treats_blank_as_absent() {
        let r = row(&[("email", "   "), ("phone", "123-4567")]);
        assert_eq!(field(&r, "email"), None);
        assert_eq!(field(&r, "phone"), Some("123-4567"));
        assert_eq!(field(&r, "missing"), None);
    }

    #[test]
    fn test_draft_prefers_full_name() {
        let r = row(&[
            ("full_name", "Ada Lovelace"),
            ("first_name", "Ada"),
            ("last_name", "Byron"),
        ]);
        assert_eq!(draft_candidate(&r).full_name, "Ada Lovelace");
    }

    #[test]
    fn test_draft_joins_first_and_last_name() {
        let r = row(&[("first_name", "Ada"), ("last_name", "Lovelace")]);
        assert_eq!(draft_candidate(&r).full_name, "Ada Lovelace");
    }

    #[test]
    fn test_draft_email_falls_back_to_public_email() {
        let r = row(&[("public_email", "ada@example.com")]);
        assert_eq!(
            draft_candidate(&r).email.as_deref(),
            Some("ada@example.com")
        );
    }

    #[test]
    fn test_draft_drops_unparseable_counts() {
        let r = row(&[("followers", "12k"), ("following", "340")]);
        let draft = draft_candidate(&r);
        assert_eq!(draft.followers, None);
        assert_eq!(draft.following, Some(340));
    }

    #[test]
    fn test_draft_drops_negative_counts() {
        let r = row(&[("followers", "-5")]);
        assert_eq!(draft_candidate(&r).followers, None);
    }
}
