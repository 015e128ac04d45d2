//! Editable review draft and its required-field validation.
//!
//! A draft holds the four inputs of the review form. Text inputs count as
//! present when non-empty; rating and recommendation count as present once
//! chosen. Validation reports every absent field in form order.

use thiserror::Error;

use crate::catalog::{Rating, Recommend, Review};

/// Inputs of the review form, in display and validation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Reviewer name.
    #[default]
    Name,
    /// Review text.
    Review,
    /// Star rating.
    Rating,
    /// Recommendation answer.
    Recommend,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Review, Self::Rating, Self::Recommend];

    /// Returns the field after this one, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Review,
            Self::Review => Self::Rating,
            Self::Rating => Self::Recommend,
            Self::Recommend => Self::Name,
        }
    }

    /// Returns the field before this one, wrapping to the last.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Recommend,
            Self::Review => Self::Name,
            Self::Rating => Self::Review,
            Self::Recommend => Self::Rating,
        }
    }

    /// Returns the label shown beside the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name:",
            Self::Review => "Review:",
            Self::Rating => "Rating (1-5):",
            Self::Recommend => "Would you recommend this product? (y/n):",
        }
    }

    /// Returns the message shown when the field is missing on submit.
    #[must_use]
    pub const fn required_message(self) -> &'static str {
        match self {
            Self::Name => "Name required.",
            Self::Review => "Review required.",
            Self::Rating => "Rating required.",
            Self::Recommend => "Answer for recommendation required.",
        }
    }
}

/// A required field was absent when the review was submitted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{}", .0.required_message())]
pub struct MissingField(pub FormField);

/// A submission attempt failed required-field validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("review rejected: {} required field(s) missing", .missing.len())]
pub struct ReviewRejected {
    /// Fields absent in this attempt, in form order. Never empty.
    pub missing: Vec<MissingField>,
}

/// In-progress values of the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    name: String,
    review_text: String,
    rating: Option<Rating>,
    recommend: Option<Recommend>,
}

impl ReviewDraft {
    /// Creates an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            review_text: String::new(),
            rating: None,
            recommend: None,
        }
    }

    /// Returns the entered name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the entered review text.
    #[must_use]
    pub const fn review_text(&self) -> &str {
        self.review_text.as_str()
    }

    /// Returns the chosen rating.
    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Returns the chosen recommendation.
    #[must_use]
    pub const fn recommend(&self) -> Option<Recommend> {
        self.recommend
    }

    /// Appends a character to a text field.
    ///
    /// Returns `false` when `field` is not a text field.
    pub fn push_char(&mut self, field: FormField, character: char) -> bool {
        match field {
            FormField::Name => self.name.push(character),
            FormField::Review => self.review_text.push(character),
            FormField::Rating | FormField::Recommend => return false,
        }
        true
    }

    /// Removes the last character of a text field, or clears a choice.
    pub fn backspace(&mut self, field: FormField) {
        match field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Review => {
                self.review_text.pop();
            }
            FormField::Rating => self.rating = None,
            FormField::Recommend => self.recommend = None,
        }
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.name);
    }

    /// Replaces the review text.
    pub fn set_review_text(&mut self, text: &str) {
        text.clone_into(&mut self.review_text);
    }

    /// Chooses a rating.
    pub const fn set_rating(&mut self, rating: Rating) {
        self.rating = Some(rating);
    }

    /// Chooses a recommendation.
    pub const fn set_recommend(&mut self, recommend: Recommend) {
        self.recommend = Some(recommend);
    }

    /// Returns the fields that are currently absent, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<MissingField> {
        FormField::ALL
            .into_iter()
            .filter(|field| !self.is_present(*field))
            .map(MissingField)
            .collect()
    }

    const fn is_present(&self, field: FormField) -> bool {
        match field {
            FormField::Name => !self.name.is_empty(),
            FormField::Review => !self.review_text.is_empty(),
            FormField::Rating => self.rating.is_some(),
            FormField::Recommend => self.recommend.is_some(),
        }
    }

    /// Builds a review when every required field is present.
    ///
    /// The draft itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRejected`] listing every absent field.
    pub fn validate(&self) -> Result<Review, ReviewRejected> {
        match (self.rating, self.recommend) {
            (Some(rating), Some(recommend))
                if !self.name.is_empty() && !self.review_text.is_empty() =>
            {
                Ok(Review {
                    name: self.name.clone(),
                    review_text: self.review_text.clone(),
                    rating,
                    recommend,
                })
            }
            _ => Err(ReviewRejected {
                missing: self.missing_fields(),
            }),
        }
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn complete_draft() -> ReviewDraft {
        let mut draft = ReviewDraft::new();
        draft.set_name("alice");
        draft.set_review_text("Warm and soft");
        draft.set_rating(Rating::saturating(4));
        draft.set_recommend(Recommend::Yes);
        draft
    }

    #[rstest]
    fn complete_draft_validates_into_review(complete_draft: ReviewDraft) {
        let review = complete_draft.validate().expect("draft should validate");

        assert_eq!(review.name, "alice");
        assert_eq!(review.review_text, "Warm and soft");
        assert_eq!(review.rating.value(), 4);
        assert_eq!(review.recommend, Recommend::Yes);
    }

    #[test]
    fn empty_draft_reports_all_fields_in_order() {
        let rejected = ReviewDraft::new()
            .validate()
            .expect_err("empty draft should be rejected");

        let messages: Vec<String> = rejected.missing.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Name required.",
                "Review required.",
                "Rating required.",
                "Answer for recommendation required.",
            ]
        );
    }

    #[rstest]
    #[case::name(FormField::Name)]
    #[case::review(FormField::Review)]
    #[case::rating(FormField::Rating)]
    #[case::recommend(FormField::Recommend)]
    fn clearing_one_field_reports_only_that_field(
        mut complete_draft: ReviewDraft,
        #[case] field: FormField,
    ) {
        match field {
            FormField::Name => complete_draft.set_name(""),
            FormField::Review => complete_draft.set_review_text(""),
            FormField::Rating | FormField::Recommend => complete_draft.backspace(field),
        }

        let rejected = complete_draft
            .validate()
            .expect_err("draft with a missing field should be rejected");

        assert_eq!(rejected.missing, vec![MissingField(field)]);
    }

    #[test]
    fn push_char_only_edits_text_fields() {
        let mut draft = ReviewDraft::new();

        assert!(draft.push_char(FormField::Name, 'a'));
        assert!(draft.push_char(FormField::Review, 'b'));
        assert!(!draft.push_char(FormField::Rating, '3'));

        assert_eq!(draft.name(), "a");
        assert_eq!(draft.review_text(), "b");
        assert_eq!(draft.rating(), None);
    }

    #[rstest]
    fn clear_resets_every_field(mut complete_draft: ReviewDraft) {
        complete_draft.clear();

        assert_eq!(complete_draft, ReviewDraft::new());
    }

    #[test]
    fn focus_order_wraps_both_ways() {
        assert_eq!(FormField::Recommend.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Recommend);
        assert_eq!(FormField::Review.next().previous(), FormField::Review);
    }
}
