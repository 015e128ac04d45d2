//! Data models for the product catalogue and customer reviews.
//!
//! A [`Product`] is immutable for the lifetime of a session: the variant list,
//! details and sizes are fixed at construction. A [`Review`] is created by the
//! review form once validation succeeds and is never mutated afterwards.

use std::fmt;

use thiserror::Error;

#[cfg(feature = "test-support")]
pub mod test_support;

/// Identifier of a purchasable variant; also the payload of a cart entry.
pub type VariantId = u64;

/// A purchasable configuration of a product (e.g. a colour).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Variant identifier.
    pub id: VariantId,
    /// Display colour of the variant swatch.
    pub color: String,
    /// Reference to the variant's product image.
    pub image_ref: String,
    /// Remaining stock. Zero means out of stock.
    pub quantity: u32,
}

impl Variant {
    /// Creates a variant.
    #[must_use]
    pub fn new(id: VariantId, color: &str, image_ref: &str, quantity: u32) -> Self {
        Self {
            id,
            color: color.to_owned(),
            image_ref: image_ref.to_owned(),
            quantity,
        }
    }
}

/// A catalogue product with its variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Brand shown before the product name in the title.
    pub brand: String,
    /// Product name.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// External product page.
    pub link: String,
    /// Ordered variants. Never empty for a displayable product.
    pub variants: Vec<Variant>,
    /// Ordered detail bullet points.
    pub details: Vec<String>,
    /// Ordered size labels.
    pub sizes: Vec<String>,
    /// Whether the product is currently on sale.
    pub on_sale: bool,
}

impl Product {
    /// Returns the built-in socks product shown by the storefront.
    #[must_use]
    pub fn socks() -> Self {
        Self {
            brand: "Vue Mastery".to_owned(),
            name: "Socks".to_owned(),
            description: "lovely banging socks".to_owned(),
            link: "https://www.vuemastery.com".to_owned(),
            variants: vec![
                Variant::new(2234, "green", "./assets/vmSocks-green-onWhite.jpg", 10),
                Variant::new(2235, "blue", "./assets/vmSocks-blue-onWhite.jpg", 0),
            ],
            details: ["80% cotton", "20% polyester", "Gender-neutral"]
                .map(str::to_owned)
                .to_vec(),
            sizes: ["S", "M", "L", "XL"].map(str::to_owned).to_vec(),
            on_sale: false,
        }
    }

    /// Returns the variant at `index`, if any.
    #[must_use]
    pub fn variant(&self, index: usize) -> Option<&Variant> {
        self.variants.get(index)
    }
}

/// Star rating attached to a review. Always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// Lowest selectable rating.
    pub const MIN: u8 = 1;
    /// Highest selectable rating.
    pub const MAX: u8 = 5;

    /// Creates a rating, clamping `value` into `1..=5`.
    #[must_use]
    pub const fn saturating(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the numeric rating.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingOutOfRange { value })
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a rating outside `1..=5` is requested.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("rating {value} is outside the range 1-5")]
pub struct RatingOutOfRange {
    /// The rejected value.
    pub value: u8,
}

/// Answer to "Would you recommend this product?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommend {
    /// The reviewer recommends the product.
    Yes,
    /// The reviewer does not recommend the product.
    No,
}

impl Recommend {
    /// Returns the lowercase answer as displayed on the review card.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for Recommend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted customer review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Reviewer name.
    pub name: String,
    /// Free-form review text.
    pub review_text: String,
    /// Star rating.
    pub rating: Rating,
    /// Recommendation answer.
    pub recommend: Recommend,
}
