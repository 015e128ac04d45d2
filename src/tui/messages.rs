//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions and system events.

use super::state::TabSelection;

/// Messages for the storefront TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Product
    /// Hover the variant swatch at the given index.
    HoverVariant(usize),
    /// Hover the next variant swatch.
    NextVariant,
    /// Hover the previous variant swatch.
    PreviousVariant,
    /// Press "Add to Cart".
    AddToCart,
    /// Press "Remove from Cart".
    RemoveFromCart,
    /// Flip the root's premium flag.
    TogglePremium,

    // Review panel
    /// Show the given tab.
    SelectTab(TabSelection),
    /// Show the other tab.
    CycleTab,
    /// Focus the next form field.
    FocusNextField,
    /// Focus the previous form field.
    FocusPreviousField,
    /// Type a character into the focused form field.
    InputChar(char),
    /// Delete from the focused form field.
    Backspace,
    /// Submit the review form.
    SubmitReview,
    /// Scroll the review list down by one review.
    ScrollReviewsDown,
    /// Scroll the review list up by one review.
    ScrollReviewsUp,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns whether the message targets the product display.
    #[must_use]
    pub const fn is_product(&self) -> bool {
        matches!(
            self,
            Self::HoverVariant(_)
                | Self::NextVariant
                | Self::PreviousVariant
                | Self::AddToCart
                | Self::RemoveFromCart
                | Self::TogglePremium
        )
    }

    /// Returns whether the message targets the review panel or its form.
    #[must_use]
    pub const fn is_review(&self) -> bool {
        matches!(
            self,
            Self::SelectTab(_)
                | Self::CycleTab
                | Self::FocusNextField
                | Self::FocusPreviousField
                | Self::InputChar(_)
                | Self::Backspace
                | Self::SubmitReview
                | Self::ScrollReviewsDown
                | Self::ScrollReviewsUp
        )
    }
}
