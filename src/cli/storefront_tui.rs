//! TUI mode for browsing the product page.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that shows the product, the cart, and the review panel.

use std::io::{self, Write};

use bubbletea_rs::Program;

use storefront::tui::{StartupSettings, StorefrontApp, set_startup_settings};
use storefront::{Product, StorefrontConfig, StorefrontError};

/// Runs the TUI mode for the product page.
///
/// # Errors
///
/// Returns an error if:
/// - The configured review template does not parse
/// - The TUI fails to initialise
pub async fn run(config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let settings = startup_settings(config)?;

    // Store settings in global state for Model::init() to retrieve.
    // If already set (e.g. re-running TUI in same process), this is a no-op
    // and the existing settings remain.
    let _ = set_startup_settings(settings);

    run_tui().await.map_err(|error| StorefrontError::Tui {
        message: error.to_string(),
    })?;

    Ok(())
}

/// Builds the startup settings from configuration.
fn startup_settings(config: &StorefrontConfig) -> Result<StartupSettings, StorefrontError> {
    Ok(StartupSettings {
        product: Product::socks(),
        premium: config.premium(),
        review_template: config.review_card_template()?,
    })
}

/// Runs the bubbletea-rs program with the `StorefrontApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // StorefrontApp::init() will retrieve settings from module-level storage.
    let program = Program::<StorefrontApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
