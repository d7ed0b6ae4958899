// LineTally - core/export.rs
//
// CSV and JSON export of a validated submission, plus the plain-text
// clipboard report. Core layer: writes to any Write trait object.

use crate::core::model::{format_quantity, FormRow, Submission};
use crate::util::constants::MAX_EXPORT_ROWS;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export submitted rows to CSV format.
///
/// Writes: product, cost, amount, total
pub fn export_csv<W: Write>(
    rows: &[FormRow],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    if rows.len() > MAX_EXPORT_ROWS {
        return Err(ExportError::TooManyRows {
            count: rows.len(),
            max: MAX_EXPORT_ROWS,
        });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["product", "cost", "amount", "total"])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for row in rows {
        let total = row.intermediate_total.to_string();
        csv_writer
            .write_record([
                row.product.as_str(),
                row.cost.as_str(),
                row.amount.as_str(),
                total.as_str(),
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export a submission to JSON format (pretty-printed object with the
/// submit timestamp and row array).
pub fn export_json<W: Write>(
    submission: &Submission,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    if submission.rows.len() > MAX_EXPORT_ROWS {
        return Err(ExportError::TooManyRows {
            count: submission.rows.len(),
            max: MAX_EXPORT_ROWS,
        });
    }
    serde_json::to_writer_pretty(writer, submission).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(submission.rows.len())
}

/// Render a submission as a plain-text report for the clipboard.
pub fn submission_report(submission: &Submission) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Submission at {}\n",
        submission.submitted_at.to_rfc3339()
    ));
    for (i, row) in submission.rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} | cost {} | amount {} | total {}\n",
            i + 1,
            row.product,
            row.cost,
            row.amount,
            format_quantity(row.intermediate_total)
        ));
    }
    out.push_str(&format!(
        "Grand total: {}\n",
        format_quantity(submission.grand_total())
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(product: &str, cost: &str, amount: &str) -> FormRow {
        let mut row = FormRow {
            product: product.to_string(),
            cost: cost.to_string(),
            amount: amount.to_string(),
            ..Default::default()
        };
        row.recompute_total();
        row
    }

    #[test]
    fn test_csv_export() {
        let rows = vec![make_row("Widget", "2", "3"), make_row("Gadget", "1.5", "4")];
        let mut buf = Vec::new();
        let count = export_csv(&rows, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("product,cost,amount,total"));
        assert!(output.contains("Widget,2,3,6"));
        assert!(output.contains("Gadget,1.5,4,6"));
    }

    #[test]
    fn test_json_export() {
        let submission = Submission::new(vec![make_row("Widget", "2", "3")]);
        let mut buf = Vec::new();
        let count = export_json(&submission, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Widget"));
        assert!(output.contains("submitted_at"));
        // Error flags never leak into the serialised form.
        assert!(!output.contains("errors"));
    }

    #[test]
    fn test_csv_export_rejects_oversized_row_set() {
        let rows = vec![FormRow::default(); MAX_EXPORT_ROWS + 1];
        let mut buf = Vec::new();
        let result = export_csv(&rows, &mut buf, Path::new("out.csv"));
        assert!(matches!(result, Err(ExportError::TooManyRows { .. })));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_report_includes_grand_total() {
        let submission = Submission::new(vec![make_row("Widget", "2", "3")]);
        let report = submission_report(&submission);
        assert!(report.contains("Widget"));
        assert!(report.contains("Grand total: 6"));
    }
}
