//! UI components for the storefront TUI.
//!
//! Each component owns its own state and renders itself to a string. Data
//! flows down as constructor arguments and `view` parameters; cart intents
//! flow up as return values; submitted reviews travel over the event
//! channel.

mod product_display;
mod review_card;
mod review_form;
mod review_panel;

pub use product_display::{
    CartIntent, FLAT_SHIPPING_CENTS, ProductDisplayComponent, ProductDisplayProps, ReviewLog,
    Shipping,
};
pub use review_card::{DEFAULT_REVIEW_TEMPLATE, ReviewCardTemplate, ReviewTemplateError};
pub use review_form::ReviewFormComponent;
pub use review_panel::ReviewPanelComponent;
