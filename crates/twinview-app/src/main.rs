//! TwinView - side-by-side video comparison
//!
//! Entry point: configuration, logging and the window loop.

mod app;

use anyhow::Result;
use app::TwinViewApp;
use eframe::egui;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use twinview_core::defaults::SLOT_COUNT;
use twinview_core::AppConfig;

fn main() -> Result<()> {
    // Config first so its log level can seed the filter; report problems
    // once logging is up.
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("TwinView starting...");
    if let Some(e) = config_error {
        warn!(error = %e, "Using default configuration");
    }

    twinview_media::init();

    // Up to two clips on the command line preload the slots in order.
    let preload: Vec<PathBuf> = std::env::args()
        .skip(1)
        .take(SLOT_COUNT)
        .map(PathBuf::from)
        .collect();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("TwinView"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "TwinView",
        options,
        Box::new(move |cc| Ok(Box::new(TwinViewApp::new(cc, config, preload)))),
    )?;

    Ok(())
}
