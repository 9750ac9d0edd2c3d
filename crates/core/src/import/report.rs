//! Error-report shaping for the downloadable annotated spreadsheet.
//!
//! The report is a pure transform of the validation errors: one row per
//! offending spreadsheet row, carrying the original cell values plus a
//! consolidated `field: message; field: message` column. Serialization to
//! an actual workbook lives in `castdesk-sheet`.

use super::rules::{RowErrors, HEADER_ROW_OFFSET};
use super::RowRecord;

/// Header of the generated row-number column.
pub const REPORT_COL_ROW: &str = "row";

/// Header of the generated consolidated-errors column.
pub const REPORT_COL_ERRORS: &str = "errors";

/// A flat, column-ordered error report ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// `row`, then the original headers, then `errors`.
    pub headers: Vec<String>,
    /// One row per validation-error entry, in spreadsheet row order.
    pub rows: Vec<Vec<String>>,
}

/// Consolidate one row's field errors into a single display string.
///
/// Fields are already ordered by name in [`RowErrors`], so the output is
/// deterministic.
pub fn consolidate_errors(errors: &RowErrors) -> String {
    errors
        .fields
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build the error report for a parsed row set.
///
/// `rows` is the full parsed row list; `errors` the validation entries for
/// it. Only offending rows appear in the output, one report row each.
pub fn build_error_report(
    headers: &[String],
    rows: &[RowRecord],
    errors: &[RowErrors],
) -> ErrorReport {
    let mut report_headers = Vec::with_capacity(headers.len() + 2);
    report_headers.push(REPORT_COL_ROW.to_string());
    report_headers.extend(headers.iter().cloned());
    report_headers.push(REPORT_COL_ERRORS.to_string());

    let report_rows = errors
        .iter()
        .map(|entry| {
            let index = entry.row - HEADER_ROW_OFFSET;
            let row = &rows[index];
            let mut cells = Vec::with_capacity(headers.len() + 2);
            cells.push(entry.row.to_string());
            for header in headers {
                cells.push(row.get(header).cloned().unwrap_or_default());
            }
            cells.push(consolidate_errors(entry));
            cells
        })
        .collect();

    ErrorReport {
        headers: report_headers,
        rows: report_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::rules::validate_rows;

    fn row(pairs: &[(&str, &str)]) -> RowRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn headers() -> Vec<String> {
        vec!["full_name".into(), "email".into(), "followers".into()]
    }

    #[test]
    fn test_one_report_row_per_error_entry() {
        let rows = vec![
            row(&[("full_name", "Ok"), ("email", "ok@example.com")]),
            row(&[("full_name", "Bad"), ("email", "nope")]),
            row(&[("email", "also@bad")]),
        ];
        let outcome = validate_rows(&rows);
        let report = build_error_report(&headers(), &rows, &outcome.errors);

        assert_eq!(report.rows.len(), outcome.errors.len());
        assert_eq!(report.rows.len(), 2);
        // Spreadsheet row numbers in the first column, in order.
        assert_eq!(report.rows[0][0], "3");
        assert_eq!(report.rows[1][0], "4");
    }

    #[test]
    fn test_report_carries_original_cells() {
        let rows = vec![row(&[
            ("full_name", "Bad"),
            ("email", "nope"),
            ("followers", "12"),
        ])];
        let outcome = validate_rows(&rows);
        let report = build_error_report(&headers(), &rows, &outcome.errors);

        assert_eq!(
            report.headers,
            vec!["row", "full_name", "email", "followers", "errors"]
        );
        assert_eq!(report.rows[0][1], "Bad");
        assert_eq!(report.rows[0][2], "nope");
        assert_eq!(report.rows[0][3], "12");
    }

    #[test]
    fn test_consolidated_message_lists_every_failed_field() {
        let rows = vec![row(&[("email", "nope"), ("followers", "lots")])];
        let outcome = validate_rows(&rows);
        let summary = consolidate_errors(&outcome.errors[0]);

        assert!(summary.contains("email:"));
        assert!(summary.contains("followers:"));
        assert!(summary.contains("full_name:"));
        assert!(summary.contains("; "));
        // The summary lands in the last column of the report row.
        let report = build_error_report(&headers(), &rows, &outcome.errors);
        assert_eq!(report.rows[0].last().unwrap(), &summary);
    }

    #[test]
    fn test_clean_sheet_produces_empty_report() {
        let rows = vec![row(&[("full_name", "Ok"), ("email", "ok@example.com")])];
        let outcome = validate_rows(&rows);
        let report = build_error_report(&headers(), &rows, &outcome.errors);
        assert!(report.rows.is_empty());
        assert_eq!(report.headers.first().unwrap(), "row");
    }
}
