//! Preview, paging, and selection bookkeeping for an import session.
//!
//! Every parsed row is shown in the preview, valid or not; rows with
//! validation errors carry their per-field annotations. All rows start
//! selected. Selection is tracked by row index and survives page changes;
//! the page-level toggle inspects only the rows visible on that page.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use serde::Serialize;

use super::rules::{validate_rows, ValidationOutcome, HEADER_ROW_OFFSET};
use super::{ensure_page_size, RowRecord};
use crate::error::CoreError;

/// Fixed preview page size.
pub const PAGE_SIZE: usize = 50;

/// In-memory state of one import preview session.
#[derive(Debug, Clone)]
pub struct ImportPreview {
    headers: Vec<String>,
    rows: Vec<RowRecord>,
    outcome: ValidationOutcome,
    selected: BTreeSet<usize>,
    page_size: usize,
}

/// Result of a page-level select-all toggle.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageToggle {
    /// `true` if the toggle selected the page's rows, `false` if it
    /// deselected them.
    pub selected: bool,
    /// How many rows the toggle touched.
    pub affected: usize,
}

/// One row as rendered in the preview table.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewEntry {
    /// 0-based index into the parsed row list.
    pub index: usize,
    /// 1-based spreadsheet row number.
    pub row: usize,
    pub selected: bool,
    pub cells: BTreeMap<String, String>,
    /// Field -> message annotations; empty for clean rows.
    pub errors: BTreeMap<String, String>,
}

/// One page of the preview table.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub error_rows: usize,
    pub selected_rows: usize,
    pub entries: Vec<PreviewEntry>,
}

impl ImportPreview {
    /// Build a preview over parsed rows with the default page size.
    /// Validates every row and selects everything.
    pub fn new(headers: Vec<String>, rows: Vec<RowRecord>) -> Self {
        Self::with_page_size(headers, rows, PAGE_SIZE).expect("default page size is positive")
    }

    /// Build a preview with an explicit page size.
    pub fn with_page_size(
        headers: Vec<String>,
        rows: Vec<RowRecord>,
        page_size: usize,
    ) -> Result<Self, CoreError> {
        ensure_page_size(page_size)?;
        let outcome = validate_rows(&rows);
        let selected = (0..rows.len()).collect();
        Ok(Self {
            headers,
            rows,
            outcome,
            selected,
            page_size,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn valid_count(&self) -> usize {
        self.outcome.valid.len()
    }

    pub fn error_count(&self) -> usize {
        self.outcome.errors.len()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Number of pages (0 for an empty sheet).
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size)
    }

    /// The row-index range covered by a 0-based page.
    fn page_range(&self, page: usize) -> Result<Range<usize>, CoreError> {
        if page >= self.page_count() {
            return Err(CoreError::Validation(format!(
                "Page {page} out of range (0..{})",
                self.page_count()
            )));
        }
        let start = page * self.page_size;
        let end = (start + self.page_size).min(self.rows.len());
        Ok(start..end)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Flip one row's selection. Returns the new state.
    pub fn toggle_row(&mut self, index: usize) -> Result<bool, CoreError> {
        if index >= self.rows.len() {
            return Err(CoreError::Validation(format!(
                "Row index {index} out of range (0..{})",
                self.rows.len()
            )));
        }
        if self.selected.remove(&index) {
            Ok(false)
        } else {
            self.selected.insert(index);
            Ok(true)
        }
    }

    /// Select-all toggle scoped to one page.
    ///
    /// If every row on the page is selected, deselect exactly those rows;
    /// otherwise select exactly those rows. Rows on other pages are never
    /// touched.
    pub fn toggle_page(&mut self, page: usize) -> Result<PageToggle, CoreError> {
        let range = self.page_range(page)?;
        let all_selected = range.clone().all(|i| self.selected.contains(&i));
        let affected = range.len();
        if all_selected {
            for i in range {
                self.selected.remove(&i);
            }
        } else {
            self.selected.extend(range);
        }
        Ok(PageToggle {
            selected: !all_selected,
            affected,
        })
    }

    /// Selected row indices in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// The selected rows, in index order, paired with their indices.
    pub fn selected_rows(&self) -> Vec<(usize, &RowRecord)> {
        self.selected.iter().map(|&i| (i, &self.rows[i])).collect()
    }

    /// Render one page of the preview table.
    pub fn page_view(&self, page: usize) -> Result<PageView, CoreError> {
        let range = self.page_range(page)?;
        let entries = range
            .map(|index| PreviewEntry {
                index,
                row: index + HEADER_ROW_OFFSET,
                selected: self.selected.contains(&index),
                cells: self.rows[index]
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
                errors: self
                    .outcome
                    .errors_for(index)
                    .map(|e| e.fields.clone())
                    .unwrap_or_default(),
            })
            .collect();
        Ok(PageView {
            page,
            page_count: self.page_count(),
            page_size: self.page_size,
            total_rows: self.rows.len(),
            valid_rows: self.valid_count(),
            error_rows: self.error_count(),
            selected_rows: self.selected_count(),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rows(count: usize) -> Vec<RowRecord> {
        (0..count)
            .map(|i| {
                let mut row = RowRecord::new();
                row.insert("full_name".into(), format!("Person {i}"));
                row.insert("email".into(), format!("person{i}@example.com"));
                row
            })
            .collect()
    }

    fn headers() -> Vec<String> {
        vec!["full_name".into(), "email".into()]
    }

    fn preview(count: usize, page_size: usize) -> ImportPreview {
        ImportPreview::with_page_size(headers(), make_rows(count), page_size).unwrap()
    }

    #[test]
    fn test_everything_starts_selected() {
        let p = preview(7, 50);
        assert_eq!(p.selected_count(), 7);
        assert!((0..7).all(|i| p.is_selected(i)));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(preview(0, 50).page_count(), 0);
        assert_eq!(preview(50, 50).page_count(), 1);
        assert_eq!(preview(51, 50).page_count(), 2);
        assert_eq!(preview(120, 50).page_count(), 3);
    }

    #[test]
    fn test_toggle_row_flips_state() {
        let mut p = preview(3, 50);
        assert!(!p.toggle_row(1).unwrap());
        assert!(!p.is_selected(1));
        assert!(p.toggle_row(1).unwrap());
        assert!(p.is_selected(1));
    }

    #[test]
    fn test_toggle_row_out_of_range() {
        let mut p = preview(3, 50);
        assert!(p.toggle_row(3).is_err());
    }

    #[test]
    fn test_page_toggle_only_touches_that_page() {
        // 120 rows at 50/page: page 0 holds 0..50, page 1 holds 50..100.
        let mut p = preview(120, 50);

        let toggle = p.toggle_page(1).unwrap();
        // Everything started selected, so the first toggle deselects.
        assert!(!toggle.selected);
        assert_eq!(toggle.affected, 50);
        assert!((0..50).all(|i| p.is_selected(i)));
        assert!((50..100).all(|i| !p.is_selected(i)));
        assert!((100..120).all(|i| p.is_selected(i)));

        // Toggling again re-selects rows 50..100 and leaves the rest alone.
        let toggle = p.toggle_page(1).unwrap();
        assert!(toggle.selected);
        assert_eq!(p.selected_count(), 120);
    }

    #[test]
    fn test_select_all_across_two_pages_accumulates() {
        let mut p = preview(120, 50);
        // Clear everything row by row, then select pages 0 and 1.
        for i in 0..120 {
            p.toggle_row(i).unwrap();
        }
        assert_eq!(p.selected_count(), 0);

        p.toggle_page(0).unwrap();
        assert_eq!(p.selected_count(), 50);
        assert!((0..50).all(|i| p.is_selected(i)));

        p.toggle_page(1).unwrap();
        assert_eq!(p.selected_count(), 100);
        assert!((100..120).all(|i| !p.is_selected(i)));
    }

    #[test]
    fn test_partially_selected_page_selects_all_first() {
        let mut p = preview(10, 5);
        p.toggle_row(2).unwrap();
        // Page 0 is partially selected, so the toggle selects the gap.
        let toggle = p.toggle_page(0).unwrap();
        assert!(toggle.selected);
        assert_eq!(p.selected_count(), 10);
    }

    #[test]
    fn test_page_out_of_range() {
        let mut p = preview(10, 5);
        assert!(p.toggle_page(2).is_err());
        assert!(p.page_view(2).is_err());
        assert!(preview(0, 50).page_view(0).is_err());
    }

    #[test]
    fn test_selected_rows_is_exact_subset_in_order() {
        let mut p = preview(8, 50);
        p.toggle_row(2).unwrap();
        p.toggle_row(5).unwrap();

        let selected = p.selected_rows();
        assert_eq!(selected.len(), 6);
        let indices: Vec<usize> = selected.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 3, 4, 6, 7]);
    }

    #[test]
    fn test_page_view_annotates_error_rows() {
        let mut rows = make_rows(3);
        rows[1].insert("email".into(), "broken".into());
        let p = ImportPreview::with_page_size(headers(), rows, 50).unwrap();

        let view = p.page_view(0).unwrap();
        assert_eq!(view.total_rows, 3);
        assert_eq!(view.valid_rows, 2);
        assert_eq!(view.error_rows, 1);
        assert_eq!(view.entries.len(), 3);
        assert!(view.entries[0].errors.is_empty());
        assert!(view.entries[1].errors.contains_key("email"));
        assert_eq!(view.entries[1].row, 3);
        assert!(view.entries[1].selected);
    }

    #[test]
    fn test_last_page_is_short() {
        let p = preview(120, 50);
        let view = p.page_view(2).unwrap();
        assert_eq!(view.entries.len(), 20);
        assert_eq!(view.entries[0].index, 100);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(ImportPreview::with_page_size(headers(), make_rows(1), 0).is_err());
    }
}
