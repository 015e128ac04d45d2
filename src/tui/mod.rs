//! Terminal User Interface for the storefront product page.
//!
//! This module provides an interactive TUI showing one product with its
//! variants, stock, and shipping cost, plus a tabbed review panel, using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application root state in [`app::StorefrontApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Components talk to each other in three ways: the root passes properties
//! down, the product display hands cart intents back up, and the review form
//! publishes submitted reviews on an [`crate::events::EventChannel`] that the
//! product display subscribes to.
//!
//! # Modules
//!
//! - [`app`]: Application root model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Tab selection and review draft state
//! - [`components`]: Product display, review panel, and review form
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for startup settings. Call
//! [`set_startup_settings`] before starting the program, and
//! `StorefrontApp::init()` will automatically retrieve them.

use std::sync::OnceLock;

use crate::catalog::Product;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::StorefrontApp;
use components::ReviewCardTemplate;

/// Global storage for startup settings.
///
/// This is set before the TUI program starts and read by
/// `StorefrontApp::init()`.
static STARTUP_SETTINGS: OnceLock<StartupSettings> = OnceLock::new();

/// Settings the application root is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupSettings {
    /// The product to display.
    pub product: Product,
    /// Initial premium flag owned by the root.
    pub premium: bool,
    /// Template used to render review cards.
    pub review_template: ReviewCardTemplate,
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self {
            product: Product::socks(),
            premium: true,
            review_template: ReviewCardTemplate::default(),
        }
    }
}

/// Sets the startup settings for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the settings were set, `false` if they were already set.
pub fn set_startup_settings(settings: StartupSettings) -> bool {
    STARTUP_SETTINGS.set(settings).is_ok()
}

/// Gets a clone of the startup settings, falling back to defaults.
pub(crate) fn get_startup_settings() -> StartupSettings {
    STARTUP_SETTINGS.get().cloned().unwrap_or_default()
}
