// LineTally - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (platform default or --config override)
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use linetally::app;
pub use linetally::core;
pub use linetally::platform;
pub use linetally::ui;
pub use linetally::util;

use clap::Parser;
use std::path::PathBuf;

/// Apply the configured body font size to every text style.
///
/// Headings and small text keep their relative scale so the whole UI
/// grows or shrinks together.
fn configure_text_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    for (text_style, font_id) in style.text_styles.iter_mut() {
        font_id.size = match text_style {
            egui::TextStyle::Heading => font_size * 1.4,
            egui::TextStyle::Small => font_size * 0.8,
            _ => font_size,
        };
    }
    ctx.set_style(style);
}

/// LineTally - desktop line-item entry form.
///
/// Enter product / cost / amount rows with live computed totals, then
/// submit to produce a validated, exportable line-item document.
#[derive(Parser, Debug)]
#[command(name = "LineTally", version, about)]
struct Cli {
    /// Path to an alternative config.toml (platform default if omitted).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and read the config file before logging init
    // so the [logging] level can participate in the filter priority chain.
    // Load errors are held and reported once the subscriber is installed.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform_paths.config_file());

    let mut config_issue = None;
    let raw_config = if config_path.is_file() {
        match platform::config::load_config(&config_path) {
            Ok(raw) => raw,
            Err(e) => {
                config_issue = Some(e);
                platform::config::RawConfig::default()
            }
        }
    } else {
        platform::config::RawConfig::default()
    };

    // Initialise logging subsystem
    util::logging::init(cli.debug, raw_config.logging.level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "LineTally starting"
    );

    if let Some(e) = config_issue {
        tracing::warn!(error = %e, "Config loading warning, using defaults");
    }

    // Clamp configured values to the named bounds.
    let settings = platform::config::resolve_settings(&raw_config);

    // Create application state
    let state = app::state::AppState::new(settings.max_rows, settings.font_size, cli.debug);

    tracing::info!(
        max_rows = settings.max_rows,
        font_size = settings.font_size,
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_text_size(&cc.egui_ctx, state.ui_font_size);
            Ok(Box::new(gui::LineTallyApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LineTally GUI: {e}");
        std::process::exit(1);
    }
}
