//! CLI operation mode handlers.
//!
//! - [`storefront_tui`]: Interactive TUI showing the product page

pub mod storefront_tui;
