// LineTally - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu bar, the form panel, the status bar, and the
// submission window.

use crate::app::state::AppState;
use crate::core::export;
use crate::core::model::format_quantity;
use crate::ui;

/// The LineTally application.
pub struct LineTallyApp {
    pub state: AppState,
}

impl LineTallyApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LineTallyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Form").clicked() {
                        self.state.reset_form();
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export sub-menu -- enabled only once a submission exists
                    let has_submission = self.state.last_submission.is_some();
                    ui.add_enabled_ui(has_submission, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Export CSV...").clicked() {
                                if let Some(dest) = rfd::FileDialog::new()
                                    .add_filter("CSV", &["csv"])
                                    .set_file_name("submission.csv")
                                    .save_file()
                                {
                                    if let Some(ref submission) = self.state.last_submission {
                                        match std::fs::File::create(&dest) {
                                            Ok(f) => {
                                                match export::export_csv(&submission.rows, f, &dest)
                                                {
                                                    Ok(n) => {
                                                        self.state.status_message =
                                                            format!("Exported {n} rows to CSV.");
                                                    }
                                                    Err(e) => {
                                                        self.state.status_message =
                                                            format!("CSV export failed: {e}");
                                                    }
                                                }
                                            }
                                            Err(e) => {
                                                self.state.status_message =
                                                    format!("Cannot create file: {e}");
                                            }
                                        }
                                    }
                                }
                                ui.close_menu();
                            }
                            if ui.button("Export JSON...").clicked() {
                                if let Some(dest) = rfd::FileDialog::new()
                                    .add_filter("JSON", &["json"])
                                    .set_file_name("submission.json")
                                    .save_file()
                                {
                                    if let Some(ref submission) = self.state.last_submission {
                                        match std::fs::File::create(&dest) {
                                            Ok(f) => {
                                                match export::export_json(submission, f, &dest) {
                                                    Ok(n) => {
                                                        self.state.status_message =
                                                            format!("Exported {n} rows to JSON.");
                                                    }
                                                    Err(e) => {
                                                        self.state.status_message =
                                                            format!("JSON export failed: {e}");
                                                    }
                                                }
                                            }
                                            Err(e) => {
                                                self.state.status_message =
                                                    format!("Cannot create file: {e}");
                                            }
                                        }
                                    }
                                }
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let has_submission = self.state.last_submission.is_some();
                    ui.add_enabled_ui(has_submission, |ui| {
                        if ui.button("Submission Details").clicked() {
                            self.state.show_submission = true;
                            ui.close_menu();
                        }
                        if ui.button("Copy Submission Report").clicked() {
                            if let Some(ref submission) = self.state.last_submission {
                                ctx.copy_text(export::submission_report(submission));
                                self.state.status_message =
                                    "Copied submission report to clipboard.".to_string();
                            }
                            ui.close_menu();
                        }
                    });
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                let errors = self.state.rows.error_count();
                if errors > 0 {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{errors} missing field(s)"))
                            .color(ui::theme::ERROR_OUTLINE),
                    );
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} row(s)  |  total {}",
                        self.state.rows.len(),
                        format_quantity(self.state.rows.filled_total())
                    ));
                });
            });
        });

        // Central panel (the form grid)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::form::render(ui, &mut self.state);
        });

        // Submission window (modal-ish)
        ui::panels::submission::render(ctx, &mut self.state);
    }
}
