// LineTally - app/state.rs
//
// Application state management. Holds the row collection, the last
// submission, window flags, and the status bar message.
// Owned by the eframe::App implementation.

use crate::core::model::{Field, Submission};
use crate::core::rows::RowSet;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The ordered line-item rows being edited.
    pub rows: RowSet,

    /// Status message for the status bar.
    pub status_message: String,

    /// The most recent valid submission, if any.
    pub last_submission: Option<Submission>,

    /// Whether the submission window is shown.
    pub show_submission: bool,

    /// UI body font size in points (from config).
    pub ui_font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state: one empty row, ready for entry.
    pub fn new(max_rows: usize, ui_font_size: f32, debug_mode: bool) -> Self {
        Self {
            rows: RowSet::new(max_rows),
            status_message: "Ready. Fill in a line item to begin.".to_string(),
            last_submission: None,
            show_submission: false,
            ui_font_size,
            debug_mode,
        }
    }

    /// Apply one field edit from the form panel.
    ///
    /// Cost and amount edits recompute the row's derived total; amount
    /// edits additionally run the auto-append check.
    pub fn apply_edit(&mut self, index: usize, field: Field, value: String) {
        if !self.rows.set_field(index, field, value) {
            tracing::warn!(index, "Ignored edit for out-of-range row");
            return;
        }
        if field.is_numeric() {
            self.rows.recompute_total(index);
        }
        if field == Field::Amount && self.rows.try_auto_append() {
            tracing::debug!(rows = self.rows.len(), "Auto-appended empty row");
        }
    }

    /// Append an empty row from the Add Row button.
    pub fn add_row(&mut self) {
        if self.rows.push_empty() {
            self.status_message = format!("Added row {}.", self.rows.len());
        } else {
            self.status_message =
                format!("Row limit reached ({} rows max).", self.rows.max_rows());
            tracing::warn!(max_rows = self.rows.max_rows(), "Add Row refused at bound");
        }
    }

    /// Remove a row from its per-row remove button.
    pub fn remove_row(&mut self, index: usize) {
        if self.rows.remove(index) {
            self.status_message = format!("Removed row {}.", index + 1);
        }
    }

    /// Validate and, if clean, capture the submission.
    ///
    /// On failure the flagged row set stays in place so the form shows the
    /// error outlines; on success the validated rows remain displayed and
    /// the submission window opens.
    pub fn submit(&mut self) {
        if self.rows.validate() {
            let submission = Submission::new(self.rows.rows().to_vec());
            tracing::info!(rows = submission.rows.len(), "Form submitted");
            self.status_message = format!("Submitted {} line item(s).", submission.rows.len());
            self.last_submission = Some(submission);
            self.show_submission = true;
        } else {
            let missing = self.rows.error_count();
            tracing::debug!(missing, "Submission blocked by validation");
            self.status_message =
                format!("Submission blocked: {missing} required field(s) missing.");
        }
    }

    /// Clear the form back to a single empty row.
    ///
    /// The last submission is kept so it can still be viewed or exported.
    pub fn reset_form(&mut self) {
        self.rows.reset();
        self.status_message = "Form cleared.".to_string();
    }
}
