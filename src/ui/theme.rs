// LineTally - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Outline colour for a field flagged as required-but-empty.
pub const ERROR_OUTLINE: Color32 = Color32::from_rgb(244, 63, 94); // Rose 500

/// Text colour for the read-only total cell.
pub const READONLY_TEXT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Layout constants.
pub const CELL_WIDTH: f32 = 130.0;
pub const GRID_SPACING: [f32; 2] = [8.0, 6.0];
pub const ERROR_OUTLINE_WIDTH: f32 = 2.0;
