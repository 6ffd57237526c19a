mod app;
mod config;
mod controller;
mod error;
mod index;
mod input;
mod io;
mod resource;
mod startup;
mod state;
mod style;
mod view;

use app::GalleryApp;
use config::Config;
use eframe::egui;
use startup::StartupOptions;
use std::env;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("galleria=info")),
        )
        .init();

    if let Err(e) = Config::create_default() {
        warn!("Could not write default configuration: {}", e);
    }
    let config = Config::load();
    let startup = StartupOptions::from_args(env::args_os().skip(1));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Galleria"),
        ..Default::default()
    };

    eframe::run_native(
        "Galleria",
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, config, startup)))),
    )
}
