//! Logging module using tui-logger
//!
//! Log records are captured in memory and shown in the logs popup, since
//! stdout belongs to the terminal UI.

use color_eyre::Result;
use log::LevelFilter;

/// Initialize the tui-logger system
pub fn init_logging() -> Result<()> {
    tui_logger::init_logger(LevelFilter::Trace)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to init logger: {}", e))?;

    tui_logger::set_default_level(LevelFilter::Info);

    // Spinner transitions are logged at debug; keep them visible
    for target in ["artwall::spinner::state", "artwall::spinner::controller"] {
        tui_logger::set_level_for_target(target, LevelFilter::Debug);
    }

    if std::env::var("RUST_LOG").is_ok() {
        tui_logger::set_env_filter_from_env(Some("RUST_LOG"));
    }

    log::info!("Artwall started - tui-logger initialized");

    Ok(())
}
