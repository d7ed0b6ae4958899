// LineTally - core/rows.rs
//
// The row collection manager: ordered line-item rows with index-addressed
// mutation, derived-total recomputation, the auto-append policy, and
// submit-time validation.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Field, FormRow, RowErrors};

/// The ordered row collection backing the form.
///
/// Invariant: the collection is never empty. A fresh set holds exactly one
/// fully-empty row, and validation collapses an all-empty form back to that
/// state rather than to zero rows.
#[derive(Debug, Clone)]
pub struct RowSet {
    rows: Vec<FormRow>,
    max_rows: usize,
}

impl RowSet {
    /// Create a row set holding a single empty row, bounded at `max_rows`.
    pub fn new(max_rows: usize) -> Self {
        Self {
            rows: vec![FormRow::default()],
            max_rows,
        }
    }

    /// All rows in display order.
    pub fn rows(&self) -> &[FormRow] {
        &self.rows
    }

    /// Number of rows currently in the form.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; present for completeness of the collection API.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The configured row bound.
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Update a single field of a single row by index.
    ///
    /// Returns false for an out-of-range index. Does not touch the derived
    /// total; callers follow a cost/amount edit with [`recompute_total`].
    ///
    /// [`recompute_total`]: RowSet::recompute_total
    pub fn set_field(&mut self, index: usize, field: Field, value: String) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Recompute the derived total of one row from its current cost and
    /// amount text. Out-of-range indices are ignored.
    pub fn recompute_total(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.recompute_total();
        }
    }

    /// Append an empty row. Refused (returns false) at the row bound.
    pub fn push_empty(&mut self) -> bool {
        if self.rows.len() >= self.max_rows {
            return false;
        }
        self.rows.push(FormRow::default());
        true
    }

    /// Auto-append policy, checked after every amount edit: append exactly
    /// one empty row iff no row has an empty amount.
    ///
    /// The appended row's own empty amount makes the check fail on
    /// subsequent calls, so at most one append occurs per qualifying edit.
    pub fn try_auto_append(&mut self) -> bool {
        if self.rows.iter().any(|r| r.amount.is_empty()) {
            return false;
        }
        self.push_empty()
    }

    /// Remove a row by index, shifting subsequent rows up.
    ///
    /// The first row can never be removed; index 0 and out-of-range
    /// indices are refused (returns false).
    pub fn remove(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// The rows that participate in validation: the trailing run of
    /// fully-empty rows is dropped, and an all-empty form collapses to a
    /// single empty row.
    pub fn trimmed_for_validation(&self) -> Vec<FormRow> {
        match self.rows.iter().rposition(|r| !r.is_blank()) {
            Some(last) => self.rows[..=last].to_vec(),
            None => vec![FormRow::default()],
        }
    }

    /// Submit-time validation.
    ///
    /// Replaces the row set with the trimmed set, clears all previous error
    /// flags, and marks `required` on every empty product, cost, and amount
    /// of the remaining rows. Returns whether the form is submission-valid.
    ///
    /// An all-empty form collapses to one empty row carrying all three
    /// flags, which blocks submission.
    pub fn validate(&mut self) -> bool {
        let mut rows = self.trimmed_for_validation();
        for row in &mut rows {
            row.errors = RowErrors::default();
            for field in Field::all() {
                if row.get(*field).is_empty() {
                    row.errors.mark(*field);
                }
            }
        }
        self.rows = rows;
        self.error_count() == 0
    }

    /// Total number of flagged fields across all rows.
    pub fn error_count(&self) -> usize {
        self.rows.iter().map(|r| r.errors.count()).sum()
    }

    /// Running sum of all derived row totals.
    pub fn filled_total(&self) -> f64 {
        self.rows.iter().map(|r| r.intermediate_total).sum()
    }

    /// Reset to the initial single-empty-row state.
    pub fn reset(&mut self) {
        self.rows = vec![FormRow::default()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(max_rows: usize) -> RowSet {
        RowSet::new(max_rows)
    }

    /// Fill one row completely, the way the form panel does it: field
    /// updates followed by a recompute, then the auto-append check after
    /// the amount edit.
    fn fill_row(rows: &mut RowSet, index: usize, product: &str, cost: &str, amount: &str) {
        rows.set_field(index, Field::Product, product.to_string());
        rows.set_field(index, Field::Cost, cost.to_string());
        rows.recompute_total(index);
        rows.set_field(index, Field::Amount, amount.to_string());
        rows.recompute_total(index);
        rows.try_auto_append();
    }

    #[test]
    fn fresh_form_has_one_blank_row_with_zero_total() {
        let rows = set(10);
        assert_eq!(rows.len(), 1);
        assert!(rows.rows()[0].is_blank());
        assert_eq!(rows.rows()[0].intermediate_total, 0.0);
        assert!(!rows.rows()[0].errors.any());
    }

    #[test]
    fn cost_or_amount_edit_recomputes_total() {
        let mut rows = set(10);
        rows.set_field(0, Field::Cost, "2".to_string());
        rows.set_field(0, Field::Amount, "3".to_string());
        rows.recompute_total(0);
        assert_eq!(rows.rows()[0].intermediate_total, 6.0);

        rows.set_field(0, Field::Cost, "5".to_string());
        rows.recompute_total(0);
        assert_eq!(rows.rows()[0].intermediate_total, 15.0);
    }

    #[test]
    fn unparseable_numeric_text_coerces_to_zero_total() {
        let mut rows = set(10);
        rows.set_field(0, Field::Cost, "not a number".to_string());
        rows.set_field(0, Field::Amount, "3".to_string());
        rows.recompute_total(0);
        assert_eq!(rows.rows()[0].intermediate_total, 0.0);
    }

    #[test]
    fn set_field_out_of_range_is_refused() {
        let mut rows = set(10);
        assert!(!rows.set_field(5, Field::Product, "x".to_string()));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn auto_append_fires_once_when_every_amount_is_filled() {
        let mut rows = set(10);
        fill_row(&mut rows, 0, "Widget", "2", "3");
        assert_eq!(rows.len(), 2);
        assert!(rows.rows()[1].is_blank());

        // The appended row's empty amount blocks a second append.
        assert!(!rows.try_auto_append());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn auto_append_skipped_while_any_amount_is_empty() {
        let mut rows = set(10);
        rows.push_empty();
        rows.set_field(0, Field::Amount, "3".to_string());
        rows.recompute_total(0);
        // Row 1's amount is still empty.
        assert!(!rows.try_auto_append());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn auto_append_respects_row_bound() {
        let mut rows = set(2);
        fill_row(&mut rows, 0, "A", "1", "1");
        assert_eq!(rows.len(), 2);
        fill_row(&mut rows, 1, "B", "1", "1");
        // Bound reached: both amounts filled but no third row appears.
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn manual_append_refused_at_bound() {
        let mut rows = set(1);
        assert!(!rows.push_empty());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn first_row_cannot_be_removed() {
        let mut rows = set(10);
        rows.push_empty();
        assert!(!rows.remove(0));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn remove_shifts_subsequent_rows_up() {
        let mut rows = set(10);
        rows.push_empty();
        rows.push_empty();
        rows.set_field(1, Field::Product, "middle".to_string());
        rows.set_field(2, Field::Product, "last".to_string());

        assert!(rows.remove(1));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.rows()[1].product, "last");
    }

    #[test]
    fn remove_out_of_range_is_refused() {
        let mut rows = set(10);
        assert!(!rows.remove(3));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn validation_drops_trailing_blank_rows() {
        let mut rows = set(10);
        fill_row(&mut rows, 0, "Widget", "2", "3");
        // fill_row auto-appended a blank trailing row.
        assert_eq!(rows.len(), 2);

        assert!(rows.validate());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows()[0].product, "Widget");
        assert_eq!(rows.error_count(), 0);
    }

    #[test]
    fn validation_keeps_blank_rows_before_the_last_filled_row() {
        let mut rows = set(10);
        rows.push_empty();
        rows.set_field(1, Field::Product, "late".to_string());
        rows.set_field(1, Field::Cost, "1".to_string());
        rows.set_field(1, Field::Amount, "1".to_string());

        // Row 0 is blank but precedes a filled row, so it is validated
        // (and flagged) rather than dropped.
        assert!(!rows.validate());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.rows()[0].errors.count(), 3);
        assert!(!rows.rows()[1].errors.any());
    }

    #[test]
    fn all_empty_form_collapses_to_single_flagged_row() {
        let mut rows = set(10);
        rows.push_empty();
        rows.push_empty();

        assert!(!rows.validate());
        assert_eq!(rows.len(), 1);
        let errors = rows.rows()[0].errors;
        assert!(errors.product && errors.cost && errors.amount);
        assert_eq!(rows.error_count(), 3);
    }

    #[test]
    fn partial_row_flags_only_missing_fields() {
        let mut rows = set(10);
        rows.set_field(0, Field::Product, "Widget".to_string());
        rows.set_field(0, Field::Cost, "2".to_string());

        assert!(!rows.validate());
        let errors = rows.rows()[0].errors;
        assert!(!errors.product);
        assert!(!errors.cost);
        assert!(errors.amount);
    }

    #[test]
    fn revalidation_clears_stale_flags() {
        let mut rows = set(10);
        rows.set_field(0, Field::Product, "Widget".to_string());
        assert!(!rows.validate());
        assert!(rows.rows()[0].errors.any());

        rows.set_field(0, Field::Cost, "2".to_string());
        rows.set_field(0, Field::Amount, "3".to_string());
        rows.recompute_total(0);
        assert!(rows.validate());
        assert!(!rows.rows()[0].errors.any());
    }

    #[test]
    fn filled_total_sums_row_totals() {
        let mut rows = set(10);
        fill_row(&mut rows, 0, "A", "2", "3");
        fill_row(&mut rows, 1, "B", "1.5", "2");
        assert_eq!(rows.filled_total(), 9.0);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut rows = set(10);
        fill_row(&mut rows, 0, "A", "2", "3");
        rows.reset();
        assert_eq!(rows.len(), 1);
        assert!(rows.rows()[0].is_blank());
    }
}
