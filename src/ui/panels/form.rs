// LineTally - ui/panels/form.rs
//
// The line-item entry grid: one header cell per column, one input cell per
// editable field with an error outline when validation has flagged it, a
// read-only total cell, and a per-row remove button (hidden on the first
// row). Add Row and Submit buttons follow the grid.

use crate::app::state::AppState;
use crate::core::model::{format_quantity, Field};
use crate::ui::theme;

/// Mutations requested by widgets during this frame.
///
/// Collected while the grid renders and applied after `Grid::show` returns,
/// so the render closure only needs an immutable borrow of the row set.
enum FormAction {
    Edit {
        index: usize,
        field: Field,
        value: String,
    },
    Remove(usize),
}

/// Render the form panel (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut actions: Vec<FormAction> = Vec::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("line_item_grid")
                .num_columns(5)
                .spacing(theme::GRID_SPACING)
                .show(ui, |ui| {
                    // Column headers.
                    for field in Field::all() {
                        ui.label(egui::RichText::new(field.label()).strong());
                    }
                    ui.label(egui::RichText::new("Total").strong());
                    ui.label(egui::RichText::new("Action").strong());
                    ui.end_row();

                    for (index, row) in state.rows.rows().iter().enumerate() {
                        for &field in Field::all() {
                            field_cell(ui, index, field, row.get(field), row.errors.get(field), &mut actions);
                        }

                        // Read-only derived total.
                        ui.label(
                            egui::RichText::new(format_quantity(row.intermediate_total))
                                .monospace()
                                .color(theme::READONLY_TEXT),
                        );

                        // The first row is permanent; every other row gets a
                        // remove button.
                        if index > 0 {
                            if ui
                                .small_button("\u{2715}")
                                .on_hover_text("Remove this row")
                                .clicked()
                            {
                                actions.push(FormAction::Remove(index));
                            }
                        } else {
                            ui.label("");
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let can_add = state.rows.len() < state.rows.max_rows();
                if ui
                    .add_enabled(can_add, egui::Button::new("+ Add Row"))
                    .on_hover_text("Append an empty line item")
                    .clicked()
                {
                    state.add_row();
                }
                if ui
                    .button("Submit")
                    .on_hover_text("Validate the form and capture the submission")
                    .clicked()
                {
                    state.submit();
                }
            });
        });

    for action in actions {
        match action {
            FormAction::Edit {
                index,
                field,
                value,
            } => state.apply_edit(index, field, value),
            FormAction::Remove(index) => state.remove_row(index),
        }
    }
}

/// One editable input cell: current value, change detection, and the error
/// outline + hover hint when validation has flagged the field.
fn field_cell(
    ui: &mut egui::Ui,
    index: usize,
    field: Field,
    value: &str,
    has_error: bool,
    actions: &mut Vec<FormAction>,
) {
    let mut buffer = value.to_owned();
    let mut response = ui.add(
        egui::TextEdit::singleline(&mut buffer).desired_width(theme::CELL_WIDTH),
    );

    if has_error {
        ui.painter().rect_stroke(
            response.rect,
            2.0,
            egui::Stroke::new(theme::ERROR_OUTLINE_WIDTH, theme::ERROR_OUTLINE),
            egui::StrokeKind::Outside,
        );
        response = response.on_hover_text("required");
    }

    if response.changed() {
        actions.push(FormAction::Edit {
            index,
            field,
            value: buffer,
        });
    }
}
