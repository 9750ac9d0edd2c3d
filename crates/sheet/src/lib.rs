//! Spreadsheet codec for the onboarding importer.
//!
//! Wraps `calamine` (read) and `rust_xlsxwriter` (write) behind a small
//! typed API that only deals in in-memory buffers. Parsing uses the first
//! worksheet; its first row is the column header, and every following row
//! becomes a header-keyed [`RowRecord`]. Rows whose cells are all empty
//! are dropped, since exported sheets routinely carry trailing blanks.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use castdesk_core::import::report::ErrorReport;
use castdesk_core::import::RowRecord;

/// Errors from parsing or serializing a workbook.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// The uploaded bytes are not a readable xlsx workbook.
    #[error("Workbook could not be read: {0}")]
    Malformed(String),

    /// The workbook contains no worksheets.
    #[error("Workbook has no worksheets")]
    NoWorksheet,

    /// The first worksheet has no usable header row.
    #[error("Worksheet has no header row")]
    MissingHeader,

    /// Workbook serialization failed.
    #[error("Failed to write workbook: {0}")]
    Write(String),
}

impl From<rust_xlsxwriter::XlsxError> for SheetError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        SheetError::Write(err.to_string())
    }
}

/// A parsed worksheet: ordered headers plus one record per data row.
#[derive(Debug, Clone)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<RowRecord>,
}

/// Parse an in-memory xlsx buffer into header-keyed row records.
pub fn parse_workbook(bytes: &[u8]) -> Result<ParsedSheet, SheetError> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| SheetError::Malformed(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::NoWorksheet)?
        .map_err(|e| SheetError::Malformed(e.to_string()))?;

    let mut rows_iter = range.rows();
    let header_row = rows_iter.next().ok_or(SheetError::MissingHeader)?;
    let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();
    if headers.iter().all(String::is_empty) {
        return Err(SheetError::MissingHeader);
    }

    let mut rows = Vec::new();
    for data_row in rows_iter {
        let mut record: RowRecord = HashMap::new();
        let mut has_value = false;
        for (header, cell) in headers.iter().zip(data_row.iter()) {
            if header.is_empty() {
                continue;
            }
            let value = cell_to_string(cell);
            if !value.is_empty() {
                has_value = true;
            }
            record.insert(header.clone(), value);
        }
        if has_value {
            rows.push(record);
        }
    }

    Ok(ParsedSheet { headers, rows })
}

/// Serialize a header row plus flat string rows into an xlsx buffer.
pub fn write_rows(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>, SheetError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32 + 1, col as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Serialize a validation error report into a downloadable xlsx buffer.
pub fn write_error_report(report: &ErrorReport) -> Result<Vec<u8>, SheetError> {
    write_rows(&report.headers, &report.rows)
}

/// Render a cell as the raw text the validator and preview operate on.
///
/// Numbers keep their minimal display form (`1200.0` renders as `1200`),
/// which matches how follower counts arrive from exported sheets.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn sheet_bytes(headers: &[&str], rows: &[&[&str]]) -> Vec<u8> {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();
        write_rows(&headers, &rows).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_headers_and_cells() {
        let bytes = sheet_bytes(
            &["full_name", "email", "followers"],
            &[
                &["Ada Lovelace", "ada@example.com", "1200"],
                &["Grace Hopper", "grace@example.com", "3400"],
            ],
        );

        let sheet = parse_workbook(&bytes).unwrap();
        assert_eq!(sheet.headers, vec!["full_name", "email", "followers"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0]["full_name"], "Ada Lovelace");
        assert_eq!(sheet.rows[1]["email"], "grace@example.com");
        assert_eq!(sheet.rows[1]["followers"], "3400");
    }

    #[test]
    fn test_numeric_cells_render_without_decimal_point() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "followers").unwrap();
        worksheet.write_number(1, 0, 1200.0).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let sheet = parse_workbook(&bytes).unwrap();
        assert_eq!(sheet.rows[0]["followers"], "1200");
    }

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let err = parse_workbook(b"definitely not a zip archive").unwrap_err();
        assert_matches!(err, SheetError::Malformed(_));
    }

    #[test]
    fn test_header_only_sheet_has_no_rows() {
        let bytes = sheet_bytes(&["full_name", "email"], &[]);
        let sheet = parse_workbook(&bytes).unwrap();
        assert_eq!(sheet.headers.len(), 2);
        assert!(sheet.rows.is_empty());
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let bytes = sheet_bytes(
            &["full_name", "email"],
            &[
                &["Ada", "ada@example.com"],
                &["", ""],
                &["Grace", "grace@example.com"],
            ],
        );
        let sheet = parse_workbook(&bytes).unwrap();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1]["full_name"], "Grace");
    }

    #[test]
    fn test_short_rows_leave_missing_cells_absent() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "full_name").unwrap();
        worksheet.write_string(0, 1, "email").unwrap();
        worksheet.write_string(1, 0, "Ada").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let sheet = parse_workbook(&bytes).unwrap();
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0]["full_name"], "Ada");
        // The email cell was never written; the record may omit it or hold
        // an empty string depending on the stored range, both of which the
        // validator treats as absent.
        assert!(sheet.rows[0]
            .get("email")
            .map(|v| v.is_empty())
            .unwrap_or(true));
    }

    #[test]
    fn test_error_report_serializes() {
        use castdesk_core::import::report::build_error_report;
        use castdesk_core::import::rules::validate_rows;
        use std::collections::HashMap;

        let mut bad = HashMap::new();
        bad.insert("full_name".to_string(), "Bad".to_string());
        bad.insert("email".to_string(), "nope".to_string());
        let rows = vec![bad];
        let outcome = validate_rows(&rows);
        let headers = vec!["full_name".to_string(), "email".to_string()];
        let report = build_error_report(&headers, &rows, &outcome.errors);

        let bytes = write_error_report(&report).unwrap();
        let parsed = parse_workbook(&bytes).unwrap();
        assert_eq!(parsed.headers, vec!["row", "full_name", "email", "errors"]);
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0]["row"], "2");
        assert!(parsed.rows[0]["errors"].contains("email:"));
    }
}
