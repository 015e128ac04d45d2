//! Product display component: variant selection, derived values, and cart
//! intents.
//!
//! The component owns the product, the selected variant index, and the
//! review sequence. Cart mutations belong to the application root, so cart
//! operations here only return a [`CartIntent`] for the parent to apply.
//! Submitted reviews arrive over the [`EventChannel`] once the component is
//! mounted.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::catalog::{Product, Review, Variant, VariantId};
use crate::events::{EventChannel, REVIEW_SUBMITTED, SubscriptionId};

use super::review_panel::ReviewPanelComponent;

/// Flat shipping rate in cents charged to non-premium users.
pub const FLAT_SHIPPING_CENTS: u32 = 299;

/// Inputs passed down from the application root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDisplayProps {
    /// Whether the user has a premium membership.
    pub premium: bool,
}

/// Cart change requested by the product display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartIntent {
    /// Add the given variant to the cart.
    Add(VariantId),
    /// Remove an entry from the cart.
    Remove,
}

/// Shipping cost shown for the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shipping {
    /// No charge for premium users.
    Free,
    /// A flat rate, in cents.
    Flat {
        /// Rate in cents.
        cents: u32,
    },
}

impl fmt::Display for Shipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("Free"),
            Self::Flat { cents } => write!(
                f,
                "{}.{:02}",
                cents.div_euclid(100),
                cents.rem_euclid(100)
            ),
        }
    }
}

/// Append-only review sequence shared with the channel subscription.
#[derive(Debug, Clone, Default)]
pub struct ReviewLog {
    entries: Arc<Mutex<Vec<Review>>>,
}

impl ReviewLog {
    fn append(&self, review: Review) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(review);
    }

    /// Returns a copy of the reviews in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Review> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of reviews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether no review has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Component displaying one product and its review panel.
#[derive(Debug)]
pub struct ProductDisplayComponent {
    product: Product,
    selected_variant: usize,
    premium: bool,
    reviews: ReviewLog,
    subscription: Option<SubscriptionId>,
    review_panel: ReviewPanelComponent,
}

impl ProductDisplayComponent {
    /// Creates a display for `product` with the first variant selected.
    #[must_use]
    pub fn new(
        product: Product,
        props: ProductDisplayProps,
        review_panel: ReviewPanelComponent,
    ) -> Self {
        Self {
            product,
            selected_variant: 0,
            premium: props.premium,
            reviews: ReviewLog::default(),
            subscription: None,
            review_panel,
        }
    }

    /// Subscribes to submitted reviews on `channel`.
    ///
    /// Mounting twice keeps the original subscription.
    pub fn mount(&mut self, channel: &mut EventChannel<Review>) {
        if self.subscription.is_some() {
            return;
        }
        let log = self.reviews.clone();
        let id = channel.subscribe(REVIEW_SUBMITTED, move |review: &Review| {
            log.append(review.clone());
        });
        self.subscription = Some(id);
    }

    /// Drops the review subscription, if any.
    pub fn unmount(&mut self, channel: &mut EventChannel<Review>) {
        if let Some(id) = self.subscription.take() {
            channel.unsubscribe(id);
        }
    }

    /// Returns whether the component is subscribed to submitted reviews.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Returns the displayed product.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the selected variant index.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_variant
    }

    /// Returns the selected variant.
    #[must_use]
    pub fn selected_variant(&self) -> Option<&Variant> {
        self.product.variant(self.selected_variant)
    }

    /// Selects the variant at `index`.
    ///
    /// Returns `false`, leaving the selection unchanged, when `index` is out
    /// of range.
    pub fn select_variant(&mut self, index: usize) -> bool {
        if index >= self.product.variants.len() {
            return false;
        }
        self.selected_variant = index;
        true
    }

    /// Selects the next variant, wrapping to the first.
    pub fn next_variant(&mut self) {
        let count = self.product.variants.len();
        if count > 0 {
            self.selected_variant = self.selected_variant.saturating_add(1).rem_euclid(count);
        }
    }

    /// Selects the previous variant, wrapping to the last.
    pub fn previous_variant(&mut self) {
        let count = self.product.variants.len();
        self.selected_variant = match self.selected_variant.checked_sub(1) {
            Some(index) => index,
            None => count.saturating_sub(1),
        };
    }

    /// Returns whether the user is premium.
    #[must_use]
    pub const fn premium(&self) -> bool {
        self.premium
    }

    /// Applies a new `premium` prop from the parent.
    pub const fn set_premium(&mut self, premium: bool) {
        self.premium = premium;
    }

    /// Returns the brand followed by the product name.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.product.brand, self.product.name)
    }

    /// Returns the selected variant's image reference.
    #[must_use]
    pub fn image(&self) -> &str {
        self.selected_variant()
            .map_or("", |variant| variant.image_ref.as_str())
    }

    /// Returns the selected variant's remaining quantity.
    ///
    /// Zero means out of stock.
    #[must_use]
    pub fn in_stock(&self) -> u32 {
        self.selected_variant().map_or(0, |variant| variant.quantity)
    }

    /// Returns whether the selected variant has stock left.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.in_stock() > 0
    }

    /// Returns the shipping cost for the current premium state.
    #[must_use]
    pub const fn shipping(&self) -> Shipping {
        if self.premium {
            Shipping::Free
        } else {
            Shipping::Flat {
                cents: FLAT_SHIPPING_CENTS,
            }
        }
    }

    /// Requests that the selected variant be added to the cart.
    ///
    /// Returns `None` while the selected variant is out of stock.
    #[must_use]
    pub fn add_to_cart(&self) -> Option<CartIntent> {
        self.selected_variant()
            .filter(|variant| variant.quantity > 0)
            .map(|variant| CartIntent::Add(variant.id))
    }

    /// Requests that an entry be removed from the cart.
    #[must_use]
    pub const fn remove_from_cart(&self) -> CartIntent {
        CartIntent::Remove
    }

    /// Returns the received reviews in submission order.
    #[must_use]
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.snapshot()
    }

    /// Returns the review panel.
    #[must_use]
    pub const fn review_panel(&self) -> &ReviewPanelComponent {
        &self.review_panel
    }

    /// Returns mutable access to the review panel.
    pub const fn review_panel_mut(&mut self) -> &mut ReviewPanelComponent {
        &mut self.review_panel
    }

    /// Gives the component `rows` terminal rows. The review panel gets
    /// whatever the product summary leaves over.
    pub fn set_visible_height(&mut self, rows: usize) {
        let summary_rows = self.render_summary().lines().count();
        self.review_panel
            .set_visible_height(rows.saturating_sub(summary_rows));
    }

    /// Scrolls the review list down by one review.
    pub fn scroll_reviews_down(&mut self) {
        let count = self.reviews.len();
        self.review_panel.scroll_down(count);
    }

    /// Scrolls the review list up by one review.
    pub const fn scroll_reviews_up(&mut self) {
        self.review_panel.scroll_up();
    }

    /// Renders the product summary followed by the review panel.
    #[must_use]
    pub fn view(&self) -> String {
        let mut output = self.render_summary();
        output.push_str(&self.review_panel.view(&self.reviews.snapshot()));
        output
    }

    fn render_summary(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.title()));
        output.push_str(&format!(
            "Image: {} ({})\n",
            self.image(),
            self.product.link
        ));
        output.push_str(&format!("{}\n", self.product.description));

        let stock = if self.is_in_stock() {
            "In Stock"
        } else {
            "Out of Stock"
        };
        let sale = if self.product.on_sale { "  On Sale!" } else { "" };
        output.push_str(&format!(
            "{stock}{sale}  Shipping: {}  User is premium: {}\n",
            self.shipping(),
            self.premium
        ));

        output.push_str(&format!("Details: {}\n", self.product.details.join(", ")));
        output.push_str(&format!(
            "Colors: {}   Sizes: {}\n",
            self.render_swatches(),
            self.product.sizes.join(" ")
        ));

        let add_label = if self.is_in_stock() {
            "[a] Add to Cart"
        } else {
            "[a] Add to Cart (unavailable)"
        };
        output.push_str(&format!("{add_label}   [x] Remove from Cart\n\n"));
        output
    }

    fn render_swatches(&self) -> String {
        self.product
            .variants
            .iter()
            .enumerate()
            .map(|(index, variant)| {
                if index == self.selected_variant {
                    format!("[{}]", variant.color)
                } else {
                    format!(" {} ", variant.color)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
