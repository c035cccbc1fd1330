mod app;
mod config;
mod error;
mod input;
mod io;
mod message;
mod model;
mod session;
mod state;
mod style;
mod view;

use app::Console;
use config::Config;
use eframe::egui;
use session::{FileSessionStore, MemorySessionStore, SessionStore};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = Config::create_default() {
        tracing::warn!("could not write default config: {e}");
    }
    let mut config = Config::load();
    let registry = match config.registry() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::warn!("falling back to the built-in menu: {e}");
            config.menu = None;
            state::SectionRegistry::default()
        }
    };

    let session_store: Box<dyn SessionStore> = match FileSessionStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("session file unavailable, keeping session in memory: {e}");
            Box::new(MemorySessionStore::default())
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("H4 Console")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "H4 Console",
        options,
        Box::new(|cc| Ok(Box::new(Console::new(cc, config, registry, session_store)))),
    )
}
