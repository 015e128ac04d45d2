//! Application root model implementing the MVU pattern.
//!
//! The root owns the shopping cart, the premium flag, and the event channel.
//! It passes `premium` down to the product display, applies the cart intents
//! the display hands back, and lends the channel to the review form when a
//! review is submitted.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `rendering`: Header, status bar, and help overlay rendering

use bubbletea_rs::Cmd;

use crate::catalog::{Product, Review, VariantId};
use crate::events::EventChannel;

use super::StartupSettings;
use super::components::{
    CartIntent, ProductDisplayComponent, ProductDisplayProps, ReviewCardTemplate,
    ReviewFormComponent, ReviewPanelComponent,
};
use super::messages::AppMsg;
use super::state::TabSelection;

mod model_impl;
mod rendering;

/// Rows used by the header, the status bar, and their blank separators.
const CHROME_HEIGHT: usize = 4;

/// Application root for the storefront TUI.
#[derive(Debug)]
pub struct StorefrontApp {
    /// Variant ids in the cart, oldest first.
    pub(crate) cart: Vec<VariantId>,
    /// Premium flag passed down to the product display.
    pub(crate) premium: bool,
    /// Channel carrying submitted reviews to the product display.
    channel: EventChannel<Review>,
    /// Product display component.
    product_display: ProductDisplayComponent,
    /// One-line feedback for the last action, if any.
    pub(crate) status: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
}

impl StorefrontApp {
    /// Creates an application displaying `product`.
    #[must_use]
    pub fn new(product: Product, premium: bool, review_template: ReviewCardTemplate) -> Self {
        let mut channel = EventChannel::new();
        let mut product_display = ProductDisplayComponent::new(
            product,
            ProductDisplayProps { premium },
            ReviewPanelComponent::new(review_template),
        );
        product_display.mount(&mut channel);

        let mut app = Self {
            cart: Vec::new(),
            premium,
            channel,
            product_display,
            status: None,
            width: 80,
            height: 24,
            show_help: false,
        };
        app.sync_layout();
        app
    }

    /// Creates an application from startup settings.
    #[must_use]
    pub fn from_settings(settings: StartupSettings) -> Self {
        Self::new(settings.product, settings.premium, settings.review_template)
    }

    /// Returns the cart contents, oldest first.
    #[must_use]
    pub fn cart(&self) -> &[VariantId] {
        &self.cart
    }

    /// Returns the root premium flag.
    #[must_use]
    pub const fn premium(&self) -> bool {
        self.premium
    }

    /// Returns the product display component.
    #[must_use]
    pub const fn product_display(&self) -> &ProductDisplayComponent {
        &self.product_display
    }

    /// Returns the status line for the last action, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_product() {
            return self.handle_product_msg(msg);
        }
        if msg.is_review() {
            return self.handle_review_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches product display messages to their handlers.
    fn handle_product_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::HoverVariant(index) => {
                self.product_display.select_variant(*index);
            }
            AppMsg::NextVariant => self.product_display.next_variant(),
            AppMsg::PreviousVariant => self.product_display.previous_variant(),
            AppMsg::AddToCart => match self.product_display.add_to_cart() {
                Some(intent) => self.apply_cart_intent(intent),
                None => self.status = Some("Selected variant is out of stock".to_owned()),
            },
            AppMsg::RemoveFromCart => {
                let intent = self.product_display.remove_from_cart();
                self.apply_cart_intent(intent);
            }
            AppMsg::TogglePremium => {
                self.premium = !self.premium;
                self.product_display.set_premium(self.premium);
            }
            _ => {
                debug_assert!(false, "non-product message routed to handle_product_msg");
            }
        }
        None
    }

    /// Dispatches review panel and form messages to their handlers.
    fn handle_review_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SubmitReview => self.handle_submit_review(),
            AppMsg::ScrollReviewsDown => self.product_display.scroll_reviews_down(),
            AppMsg::ScrollReviewsUp => self.product_display.scroll_reviews_up(),
            AppMsg::SelectTab(tab) => self.review_panel_mut().select_tab(*tab),
            AppMsg::CycleTab => self.review_panel_mut().cycle_tab(),
            AppMsg::FocusNextField => self.review_form_mut().focus_next(),
            AppMsg::FocusPreviousField => self.review_form_mut().focus_previous(),
            AppMsg::InputChar(character) => {
                self.review_form_mut().input_char(*character);
            }
            AppMsg::Backspace => self.review_form_mut().backspace(),
            _ => {
                debug_assert!(false, "non-review message routed to handle_review_msg");
            }
        }
        None
    }

    const fn review_panel_mut(&mut self) -> &mut ReviewPanelComponent {
        self.product_display.review_panel_mut()
    }

    const fn review_form_mut(&mut self) -> &mut ReviewFormComponent {
        self.product_display.review_panel_mut().form_mut()
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.sync_layout();
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    fn handle_submit_review(&mut self) {
        let form = self.product_display.review_panel_mut().form_mut();
        self.status = match form.submit(&mut self.channel) {
            Ok(review) => Some(format!("Thanks for your review, {}!", review.name)),
            Err(rejected) => Some(rejected.to_string()),
        };
    }

    /// Applies a cart intent emitted by the product display.
    ///
    /// Removal pops the most recently added entry; it does nothing on an
    /// empty cart.
    fn apply_cart_intent(&mut self, intent: CartIntent) {
        match intent {
            CartIntent::Add(id) => {
                self.cart.push(id);
                tracing::debug!(variant = id, size = self.cart.len(), "added to cart");
            }
            CartIntent::Remove => {
                let removed = self.cart.pop();
                tracing::debug!(?removed, size = self.cart.len(), "removed from cart");
            }
        }
        self.status = None;
    }

    /// Hands the rows left by the header and status bar to the product
    /// display.
    fn sync_layout(&mut self) {
        let body = usize::from(self.height).saturating_sub(CHROME_HEIGHT);
        self.product_display.set_visible_height(body);
    }

    /// Returns whether the review form is the visible tab.
    pub(crate) const fn is_editing_review(&self) -> bool {
        matches!(
            self.product_display.review_panel().selected_tab(),
            TabSelection::MakeAReview
        )
    }
}
