// main.rs - Game of Life window: egui host around the life_engine core

use eframe::egui;
use life_engine::Simulation;
use tracing::Level;

mod app;
mod config;
mod controls;
mod error;
mod pacing;

use app::LifeApp;
use config::HostConfig;
use error::DisplayError;

fn main() -> Result<(), DisplayError> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let host = HostConfig::from_env();
    let life = host.life_config();
    let surface = life.surface;

    // Both grids are carved once here; running out of arena is fatal.
    let simulation = Simulation::new(life).inspect_err(|err| {
        tracing::error!(%err, "cannot start simulation");
    })?;
    let app = LifeApp::new(&host, simulation);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([surface.width as f32 + 20.0, surface.height as f32 + 80.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game Of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| DisplayError::Window(err.to_string()))
}
