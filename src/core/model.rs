// LineTally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI
// dependencies; these types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::Serialize;

// =============================================================================
// Field
// =============================================================================

/// The three user-editable columns of the form.
///
/// The derived total column is not addressable here: it is never edited
/// directly and never carries a validation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Product,
    Cost,
    Amount,
}

impl Field {
    /// Returns all variants in column display order.
    pub fn all() -> &'static [Field] {
        &[Field::Product, Field::Cost, Field::Amount]
    }

    /// Human-readable column label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Product => "Product",
            Field::Cost => "Cost",
            Field::Amount => "Amount",
        }
    }

    /// Whether edits to this field feed the derived total.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Cost | Field::Amount)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Row errors
// =============================================================================

/// Per-row required-field validation flags, keyed by field.
///
/// Flags are set only by validation and cleared only by the next
/// validation or a form reset; typing into a flagged field does not
/// clear its flag mid-edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowErrors {
    pub product: bool,
    pub cost: bool,
    pub amount: bool,
}

impl RowErrors {
    /// True if any field on this row is flagged.
    pub fn any(&self) -> bool {
        self.product || self.cost || self.amount
    }

    /// Number of flagged fields on this row.
    pub fn count(&self) -> usize {
        usize::from(self.product) + usize::from(self.cost) + usize::from(self.amount)
    }

    /// Whether the given field is flagged.
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::Product => self.product,
            Field::Cost => self.cost,
            Field::Amount => self.amount,
        }
    }

    /// Flag the given field as missing.
    pub fn mark(&mut self, field: Field) {
        match field {
            Field::Product => self.product = true,
            Field::Cost => self.cost = true,
            Field::Amount => self.amount = true,
        }
    }
}

// =============================================================================
// Form row
// =============================================================================

/// A single product / cost / amount line item.
///
/// Cost and amount are kept as the raw text the user typed; the derived
/// `intermediate_total` is recomputed from their numeric coercion on every
/// edit. `Default` is the fully-empty row with a zero total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormRow {
    /// Free-text product description.
    pub product: String,

    /// Per-unit cost as entered (numeric text).
    pub cost: String,

    /// Quantity as entered (numeric text).
    pub amount: String,

    /// Derived field: cost × amount under numeric coercion.
    pub intermediate_total: f64,

    /// Validation flags from the last submit attempt. Not serialised.
    #[serde(skip)]
    pub errors: RowErrors,
}

impl FormRow {
    /// Current text of the given editable field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Product => &self.product,
            Field::Cost => &self.cost,
            Field::Amount => &self.amount,
        }
    }

    /// Replace the text of the given editable field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Product => self.product = value,
            Field::Cost => self.cost = value,
            Field::Amount => self.amount = value,
        }
    }

    /// True when product, cost, and amount are all empty.
    pub fn is_blank(&self) -> bool {
        self.product.is_empty() && self.cost.is_empty() && self.amount.is_empty()
    }

    /// Recompute the derived total from the current cost and amount text.
    pub fn recompute_total(&mut self) {
        self.intermediate_total = coerce_numeric(&self.cost) * coerce_numeric(&self.amount);
    }
}

// =============================================================================
// Submission
// =============================================================================

/// A validated row set captured at submit time.
///
/// This is what the submission window displays and what the CSV/JSON
/// exporters consume. Rows inside a submission have already passed
/// validation, so none is blank and none carries error flags.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    /// UTC timestamp of the submit that produced this snapshot.
    pub submitted_at: DateTime<Utc>,

    /// The cleaned, validated rows in display order.
    pub rows: Vec<FormRow>,
}

impl Submission {
    /// Capture the given validated rows with the current time.
    pub fn new(rows: Vec<FormRow>) -> Self {
        Self {
            submitted_at: Utc::now(),
            rows,
        }
    }

    /// Sum of all row totals.
    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(|r| r.intermediate_total).sum()
    }
}

// =============================================================================
// Numeric coercion and display formatting
// =============================================================================

/// Coerce numeric text input to a value.
///
/// Empty (or whitespace-only) and unparseable input both coerce to 0.0 so
/// the derived total is always finite.
pub fn coerce_numeric(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(0.0)
}

/// Format a total for display: whole values without decimals, fractional
/// values with two decimal places.
pub fn format_quantity(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_empty_and_whitespace_to_zero() {
        assert_eq!(coerce_numeric(""), 0.0);
        assert_eq!(coerce_numeric("   "), 0.0);
    }

    #[test]
    fn coerce_parses_integers_and_decimals() {
        assert_eq!(coerce_numeric("3"), 3.0);
        assert_eq!(coerce_numeric("2.5"), 2.5);
        assert_eq!(coerce_numeric(" 7 "), 7.0);
    }

    #[test]
    fn coerce_unparseable_to_zero() {
        assert_eq!(coerce_numeric("abc"), 0.0);
        assert_eq!(coerce_numeric("1,5"), 0.0);
    }

    #[test]
    fn format_whole_values_without_decimals() {
        assert_eq!(format_quantity(6.0), "6");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn format_fractional_values_with_two_decimals() {
        assert_eq!(format_quantity(7.5), "7.50");
        assert_eq!(format_quantity(2.126), "2.13");
    }

    #[test]
    fn row_recompute_total_multiplies_coerced_fields() {
        let mut row = FormRow {
            cost: "2.5".to_string(),
            amount: "4".to_string(),
            ..Default::default()
        };
        row.recompute_total();
        assert_eq!(row.intermediate_total, 10.0);
    }
}
