//! The fixed validation rule set applied to every parsed row.
//!
//! Validation never halts the pipeline: each pass walks the full row list
//! in index order and recomputes every annotation from scratch, so two
//! passes over the same rows always produce identical output.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use validator::{ValidateEmail, ValidateUrl};

use super::{field, fields, RowRecord};

/// Spreadsheet rows are 1-based and the first row is the header, so data
/// row index `i` is reported as spreadsheet row `i + 2`.
pub const HEADER_ROW_OFFSET: usize = 2;

/// All field errors found on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowErrors {
    /// 1-based spreadsheet row number (data index + [`HEADER_ROW_OFFSET`]).
    pub row: usize,
    /// Field name -> human-readable message, ordered by field name.
    pub fields: BTreeMap<String, String>,
}

/// Result of validating a full row list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// One entry per row with at least one field error, in row order.
    pub errors: Vec<RowErrors>,
    /// 0-based indices of rows with zero errors, order-preserving.
    pub valid: Vec<usize>,
}

impl ValidationOutcome {
    /// Errors for a given 0-based row index, if any.
    pub fn errors_for(&self, index: usize) -> Option<&RowErrors> {
        let row = index + HEADER_ROW_OFFSET;
        self.errors.iter().find(|e| e.row == row)
    }
}

/// Validate every row in index order.
pub fn validate_rows(rows: &[RowRecord]) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();
    for (index, row) in rows.iter().enumerate() {
        let fields = validate_row(row);
        if fields.is_empty() {
            outcome.valid.push(index);
        } else {
            outcome.errors.push(RowErrors {
                row: index + HEADER_ROW_OFFSET,
                fields,
            });
        }
    }
    outcome
}

/// Apply the rule set to a single row. Empty map means the row is clean.
pub fn validate_row(row: &RowRecord) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    check_name(row, &mut errors);
    check_email(row, &mut errors);
    check_phone(row, &mut errors);
    check_count(row, fields::COL_FOLLOWERS, &mut errors);
    check_count(row, fields::COL_FOLLOWING, &mut errors);
    check_profile_url(row, &mut errors);

    errors
}

/// A row needs `full_name`, or both `first_name` and `last_name`.
fn check_name(row: &RowRecord, errors: &mut BTreeMap<String, String>) {
    if field(row, fields::COL_FULL_NAME).is_some() {
        return;
    }
    let first = field(row, fields::COL_FIRST_NAME);
    let last = field(row, fields::COL_LAST_NAME);
    match (first, last) {
        (Some(_), Some(_)) => {}
        (None, None) => {
            errors.insert(
                fields::COL_FULL_NAME.to_string(),
                "Name is required: provide full_name, or first_name and last_name".to_string(),
            );
        }
        (None, Some(_)) => {
            errors.insert(
                fields::COL_FIRST_NAME.to_string(),
                "first_name is required when full_name is absent".to_string(),
            );
        }
        (Some(_), None) => {
            errors.insert(
                fields::COL_LAST_NAME.to_string(),
                "last_name is required when full_name is absent".to_string(),
            );
        }
    }
}

/// An email is required, taken from `email` with `public_email` as the
/// fallback column. The error lands on whichever column held the bad value.
fn check_email(row: &RowRecord, errors: &mut BTreeMap<String, String>) {
    let (column, value) = match field(row, fields::COL_EMAIL) {
        Some(v) => (fields::COL_EMAIL, Some(v)),
        None => (
            fields::COL_PUBLIC_EMAIL,
            field(row, fields::COL_PUBLIC_EMAIL),
        ),
    };
    match value {
        None => {
            errors.insert(
                fields::COL_EMAIL.to_string(),
                "Email is required".to_string(),
            );
        }
        Some(v) if !v.validate_email() => {
            errors.insert(
                column.to_string(),
                format!("'{v}' is not a valid email address"),
            );
        }
        Some(_) => {}
    }
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9(][0-9 ()\-]{5,18}$").expect("phone regex"))
}

/// Phone is optional; when present it must look like a phone number.
fn check_phone(row: &RowRecord, errors: &mut BTreeMap<String, String>) {
    if let Some(v) = field(row, fields::COL_PHONE) {
        if !phone_regex().is_match(v) {
            errors.insert(
                fields::COL_PHONE.to_string(),
                format!("'{v}' is not a valid phone number"),
            );
        }
    }
}

/// Follower counts are optional; when present they must be non-negative
/// integers.
fn check_count(row: &RowRecord, column: &str, errors: &mut BTreeMap<String, String>) {
    if let Some(v) = field(row, column) {
        match v.parse::<i64>() {
            Ok(n) if n >= 0 => {}
            _ => {
                errors.insert(
                    column.to_string(),
                    format!("'{v}' is not a non-negative integer"),
                );
            }
        }
    }
}

/// Profile URL is optional; when present it must be well-formed.
fn check_profile_url(row: &RowRecord, errors: &mut BTreeMap<String, String>) {
    if let Some(v) = field(row, fields::COL_PROFILE_URL) {
        if !v.validate_url() {
            errors.insert(
                fields::COL_PROFILE_URL.to_string(),
                format!("'{v}' is not a valid URL"),
            );
        }
    }
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

    fn clean_row() -> RowRecord {
        row(&[
            ("full_name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("phone", "+44 20 7946 0958"),
            ("username", "ada"),
            ("profile_url", "https://example.com/ada"),
            ("followers", "1200"),
            ("following", "300"),
        ])
    }

    #[test]
    fn test_clean_row_has_no_errors() {
        assert!(validate_row(&clean_row()).is_empty());
    }

    #[test]
    fn test_row_number_offset_accounts_for_header() {
        let rows = vec![
            clean_row(),
            row(&[("full_name", "Bad Email"), ("email", "not-an-email")]),
            clean_row(),
        ];
        let outcome = validate_rows(&rows);
        assert_eq!(outcome.valid, vec![0, 2]);
        assert_eq!(outcome.errors.len(), 1);
        // Data row index 1 is spreadsheet row 3.
        assert_eq!(outcome.errors[0].row, 3);
        assert!(outcome.errors[0].fields.contains_key("email"));
    }

    #[test]
    fn test_missing_email_is_an_error() {
        let errors = validate_row(&row(&[("full_name", "No Mail")]));
        assert_eq!(errors.get("email").unwrap(), "Email is required");
    }

    #[test]
    fn test_public_email_fallback_accepted() {
        let errors = validate_row(&row(&[
            ("full_name", "Fallback"),
            ("public_email", "fb@example.com"),
        ]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_bad_public_email_reported_on_its_own_column() {
        let errors = validate_row(&row(&[
            ("full_name", "Fallback"),
            ("public_email", "nope"),
        ]));
        assert!(errors.contains_key("public_email"));
        assert!(!errors.contains_key("email"));
    }

    #[test]
    fn test_name_from_parts_accepted() {
        let errors = validate_row(&row(&[
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("email", "ada@example.com"),
        ]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_half_a_name_is_an_error() {
        let errors = validate_row(&row(&[
            ("first_name", "Ada"),
            ("email", "ada@example.com"),
        ]));
        assert!(errors.contains_key("last_name"));
    }

    #[test]
    fn test_missing_name_entirely_is_an_error() {
        let errors = validate_row(&row(&[("email", "ada@example.com")]));
        assert!(errors.contains_key("full_name"));
    }

    #[test]
    fn test_bad_phone_rejected_good_phone_accepted() {
        let mut r = clean_row();
        r.insert("phone".into(), "call me maybe".into());
        assert!(validate_row(&r).contains_key("phone"));

        r.insert("phone".into(), "(020) 7946-0958".into());
        assert!(validate_row(&r).is_empty());
    }

    #[test]
    fn test_negative_and_garbage_counts_rejected() {
        let mut r = clean_row();
        r.insert("followers".into(), "-1".into());
        assert!(validate_row(&r).contains_key("followers"));

        r.insert("followers".into(), "12k".into());
        assert!(validate_row(&r).contains_key("followers"));
    }

    #[test]
    fn test_bad_profile_url_rejected() {
        let mut r = clean_row();
        r.insert("profile_url".into(), "not a url".into());
        assert!(validate_row(&r).contains_key("profile_url"));
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let errors = validate_row(&row(&[
            ("full_name", "Minimal"),
            ("email", "min@example.com"),
        ]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_multiple_errors_collected_on_one_row() {
        let errors = validate_row(&row(&[
            ("email", "broken"),
            ("followers", "lots"),
            ("profile_url", "::"),
        ]));
        assert!(errors.len() >= 3);
        assert!(errors.contains_key("full_name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("followers"));
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let rows = vec![
            clean_row(),
            row(&[("email", "broken")]),
            row(&[("full_name", "B"), ("email", "b@example.com")]),
        ];
        let first = validate_rows(&rows);
        let second = validate_rows(&rows);
        assert_eq!(first, second);
    }
}
