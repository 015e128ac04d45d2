//! Storefront library crate providing a terminal product page.
//!
//! The library models a single product with variants, stock, and shipping
//! cost, a review form with required-field validation, and a tabbed review
//! panel. Components communicate through properties, returned cart intents,
//! and a typed publish/subscribe [`events::EventChannel`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod tui;

pub use catalog::{Product, Rating, Recommend, Review, Variant, VariantId};
pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use events::{EventChannel, REVIEW_SUBMITTED, SubscriptionId};
