//! artwall - a terminal gallery of artworks on a timeline
//!
//! The page is covered by a loading overlay until enough of the first
//! images have loaded, bounded below by a minimum display time and above
//! by a maximum wait.

mod app;
mod components;
mod config;
mod event;
mod gallery;
mod logging;
mod spinner;
mod theme;
mod tui;
mod ui;

use app::App;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init_logging()?;

    let config = Config::load();
    log::info!(
        "Starting artwall (minMs={}, maxMs={}, imageThreshold={}, fadeMs={})",
        config.spinner.min_display_ms,
        config.spinner.max_wait_ms,
        config.spinner.image_threshold,
        config.spinner.fade_ms
    );

    let mut app = App::new(config).await?;
    app.run().await?;

    Ok(())
}
