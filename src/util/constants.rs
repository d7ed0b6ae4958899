// LineTally - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LineTally";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LineTally";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Form limits
// =============================================================================

/// Default maximum number of rows the form may hold.
///
/// Auto-append and the Add Row button both stop at this bound. 200 line
/// items is far beyond any realistic manual entry session while keeping the
/// grid render cost negligible.
pub const DEFAULT_MAX_ROWS: usize = 200;

/// Minimum sensible value for the max-rows limit (the form always holds at
/// least one row, so the bound can never be zero).
pub const MIN_MAX_ROWS: usize = 1;

/// Hard upper bound on max rows (prevents configuration mistakes).
pub const ABSOLUTE_MAX_ROWS: usize = 5_000;

// =============================================================================
// Export
// =============================================================================

/// Maximum number of rows that can be exported in a single operation.
pub const MAX_EXPORT_ROWS: usize = ABSOLUTE_MAX_ROWS;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
