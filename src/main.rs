mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;

use app::LaunchDashApp;
use config::{DashboardConfig, CONFIG_FILE};
use state::DashboardState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE))?;

    // The table is read exactly once; a failure here aborts startup.
    let dataset = data::loader::load_file(&config.data_path)
        .inspect_err(|e| log::error!("Failed to load launch data: {e}"))
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let bounds = dataset.payload_bounds();
    log::info!(
        "Loaded {} launches from {} sites {:?}, payload {}..={} kg",
        dataset.len(),
        dataset.sites().len(),
        dataset.sites(),
        bounds.min,
        bounds.max
    );

    let state = DashboardState::new(Arc::new(dataset), &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state, title)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
