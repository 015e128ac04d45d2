//! Test helpers for constructing catalogue and review fixtures.
//!
//! # Examples
//!
//! ```
//! use storefront::catalog::test_support::{review, two_variant_product};
//!
//! let product = two_variant_product();
//! assert_eq!(product.variants.len(), 2);
//!
//! let review = review("alice", "Warm and soft", 5);
//! assert_eq!(review.rating.value(), 5);
//! ```

use super::{Product, Rating, Recommend, Review, Variant};

/// Builds a product with one stocked variant (2234, qty 10) and one sold-out
/// variant (2235, qty 0).
#[must_use]
pub fn two_variant_product() -> Product {
    Product {
        brand: "Acme".to_owned(),
        name: "Gloves".to_owned(),
        description: "test gloves".to_owned(),
        link: "https://example.com/gloves".to_owned(),
        variants: vec![
            Variant::new(2234, "green", "green.jpg", 10),
            Variant::new(2235, "blue", "blue.jpg", 0),
        ],
        details: vec!["wool".to_owned()],
        sizes: vec!["M".to_owned()],
        on_sale: true,
    }
}

/// Builds a review recommending the product.
///
/// Ratings outside `1..=5` are clamped so fixtures never fail to build.
#[must_use]
pub fn review(name: &str, text: &str, stars: u8) -> Review {
    Review {
        name: name.to_owned(),
        review_text: text.to_owned(),
        rating: Rating::saturating(stars),
        recommend: Recommend::Yes,
    }
}
