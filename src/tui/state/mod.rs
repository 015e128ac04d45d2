//! State management for the storefront TUI.
//!
//! This module provides the plain state types the components build on: the
//! review panel's tab selection and the review form's editable draft.

mod review_draft;

pub use review_draft::{FormField, MissingField, ReviewDraft, ReviewRejected};

/// Sub-view shown by the review panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TabSelection {
    /// Submitted reviews.
    #[default]
    Reviews,
    /// The review form.
    MakeAReview,
}

impl TabSelection {
    /// All tabs in display order.
    pub const ALL: [Self; 2] = [Self::Reviews, Self::MakeAReview];

    /// Returns the tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::MakeAReview => "Make a Review",
        }
    }

    /// Returns the other tab.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Reviews => Self::MakeAReview,
            Self::MakeAReview => Self::Reviews,
        }
    }
}
