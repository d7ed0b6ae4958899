// LineTally - ui/panels/submission.rs
//
// Submission window shown after a valid submit: the captured rows, the
// grand total, and the serialized JSON document with a clipboard copy
// button.

use crate::app::state::AppState;
use crate::core::model::{format_quantity, Field};
use crate::ui::theme;

/// Render the submission window (if `state.show_submission` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_submission {
        return;
    }
    // Clone the snapshot so the window body can freely mutate state
    // (status message, window flag) while rendering it.
    let Some(submission) = state.last_submission.clone() else {
        state.show_submission = false;
        return;
    };

    let json = serde_json::to_string_pretty(&submission)
        .unwrap_or_else(|e| format!("serialisation failed: {e}"));

    let mut open = true;
    egui::Window::new("Submission")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Submitted {}",
                    submission.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
                ))
                .small()
                .weak(),
            );
            ui.add_space(6.0);

            egui::Grid::new("submission_grid")
                .num_columns(4)
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for field in Field::all() {
                        ui.label(egui::RichText::new(field.label()).strong());
                    }
                    ui.label(egui::RichText::new("Total").strong());
                    ui.end_row();

                    for row in &submission.rows {
                        ui.label(&row.product);
                        ui.label(&row.cost);
                        ui.label(&row.amount);
                        ui.label(
                            egui::RichText::new(format_quantity(row.intermediate_total))
                                .monospace()
                                .color(theme::READONLY_TEXT),
                        );
                        ui.end_row();
                    }
                });

            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!(
                    "Grand total: {}",
                    format_quantity(submission.grand_total())
                ))
                .strong(),
            );

            ui.separator();
            ui.label("Serialized submission:");
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    let mut json_view = json.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut json_view)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY),
                    );
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Copy JSON").clicked() {
                    ctx.copy_text(json.clone());
                    state.status_message = "Copied submission JSON to clipboard.".to_string();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        state.show_submission = false;
                    }
                });
            });
        });

    if !open {
        state.show_submission = false;
    }
}
