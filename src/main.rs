mod ui;
mod engine;
mod model;

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::model::catalog::Catalog;
use crate::model::fact::FactCatalog;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "green_prom_planner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Green Prom Planner");

    let catalog = Catalog::builtin()?;
    let facts = FactCatalog::builtin()?;
    let settings = ui::settings_io::load_settings();

    tracing::info!(
        phases = catalog.len(),
        facts = facts.entries.len(),
        remote_tutor = settings.remote.enabled,
        "Loaded game data"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Green Prom Planner",
        options,
        Box::new(|_cc| {
            Ok(Box::new(ui::app::PromApp::new(catalog, facts, settings)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI failed: {e}"))
}
