//! Application entry point wiring egui/eframe to launch the rich list demo.

use anyhow::Result;
use eframe::egui;
use egui_phosphor::Variant;
use tracing_subscriber::EnvFilter;

use crate::models::config::FormDefinition;
use crate::ui::{DEMO_FORM, RichListApp};

/// Install the `tracing` subscriber; `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Bootstrap the desktop application and run the main egui event loop.
///
/// `definition` is an optional path to a form definition JSON file; the bundled
/// demo form is used otherwise.
pub fn run(definition: Option<std::path::PathBuf>) -> Result<()> {
    let form = match &definition {
        Some(path) => FormDefinition::from_path(path)?,
        None => FormDefinition::from_json_str(DEMO_FORM)?,
    };
    let app = RichListApp::new(form);
    let source = definition
        .as_deref()
        .map_or_else(|| "bundled".to_string(), |p| p.display().to_string());
    tracing::info!(%source, "form definition loaded");

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_min_inner_size([420.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rich list",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("UI event loop failed: {err}"))
}
