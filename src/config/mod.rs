//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.storefront.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `STOREFRONT_REVIEW_TEMPLATE`
//! 4. **Command-line arguments** – `--no-premium`/`-n` and
//!    `--review-template`/`-t`
//!
//! Sessions are premium unless `no_premium` is set, so an absent flag keeps
//! the default.
//!
//! # Configuration File
//!
//! ```toml
//! no_premium = true
//! review_template = "{{ name }} ({{ rating }}/5): {{ review }}"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;
use crate::tui::components::ReviewCardTemplate;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use storefront::StorefrontConfig;
///
/// let config = StorefrontConfig::load().expect("failed to load configuration");
/// let template = config.review_card_template().expect("template should parse");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STOREFRONT",
    discovery(
        dotfile_name = ".storefront.toml",
        config_file_name = "storefront.toml",
        app_name = "storefront"
    )
)]
pub struct StorefrontConfig {
    /// Starts the session without a premium membership (flat-rate
    /// shipping).
    ///
    /// Can be provided via:
    /// - CLI: `--no-premium` / `-n`
    /// - Config file: `no_premium = true`
    ///
    /// Note: Environment variable `STOREFRONT_NO_PREMIUM` is not supported
    /// because `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config(cli_short = 'n')]
    pub no_premium: bool,

    /// `MiniJinja` template used to render each submitted review.
    ///
    /// Variables: `name`, `rating`, `review`, `recommend`.
    ///
    /// Can be provided via:
    /// - CLI: `--review-template <TEMPLATE>` or `-t <TEMPLATE>`
    /// - Environment: `STOREFRONT_REVIEW_TEMPLATE`
    /// - Config file: `review_template = "..."`
    #[ortho_config(cli_short = 't')]
    pub review_template: Option<String>,
}

impl StorefrontConfig {
    /// Returns whether the session starts with a premium membership.
    #[must_use]
    pub const fn premium(&self) -> bool {
        !self.no_premium
    }

    /// Returns the configured review card template, or the default one.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Configuration`] when the configured
    /// template does not parse.
    pub fn review_card_template(&self) -> Result<ReviewCardTemplate, StorefrontError> {
        match self.review_template.as_deref() {
            Some(source) => Ok(ReviewCardTemplate::new(source)?),
            None => Ok(ReviewCardTemplate::default()),
        }
    }
}

#[cfg(test)]
mod tests;
