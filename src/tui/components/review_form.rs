//! Review form component: editing, validation, and publication.
//!
//! A successful submission publishes the review on the
//! [`REVIEW_SUBMITTED`] topic and resets the form. A failed submission
//! appends one error per missing field to the error list. The list is not
//! cleared between failed attempts, so repeated failures accumulate
//! duplicates until a submission succeeds.

use crate::catalog::{Rating, Recommend, Review};
use crate::events::{EventChannel, REVIEW_SUBMITTED};
use crate::tui::state::{FormField, MissingField, ReviewDraft, ReviewRejected};

/// Rows taken by the four fields and the submit hint.
const FIELD_BLOCK_HEIGHT: usize = 5;

/// Rows taken by the error header and the blank separator.
const ERROR_BLOCK_CHROME: usize = 2;

/// Component collecting a candidate review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFormComponent {
    draft: ReviewDraft,
    errors: Vec<MissingField>,
    focus: FormField,
}

impl ReviewFormComponent {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            draft: ReviewDraft::new(),
            errors: Vec::new(),
            focus: FormField::Name,
        }
    }

    /// Returns the in-progress values.
    #[must_use]
    pub const fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Returns mutable access to the in-progress values.
    pub const fn draft_mut(&mut self) -> &mut ReviewDraft {
        &mut self.draft
    }

    /// Returns the accumulated validation errors.
    #[must_use]
    pub fn errors(&self) -> &[MissingField] {
        &self.errors
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Moves focus to the next field.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub const fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Applies a typed character to the focused field.
    ///
    /// Text fields append the character. The rating field accepts digits
    /// `1`-`5`; the recommendation field accepts `y` or `n`. Returns `false`
    /// when the character was ignored.
    pub fn input_char(&mut self, character: char) -> bool {
        match self.focus {
            FormField::Name | FormField::Review => self.draft.push_char(self.focus, character),
            FormField::Rating => {
                let parsed = character
                    .to_digit(10)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .and_then(|digit| Rating::try_from(digit).ok());
                if let Some(rating) = parsed {
                    self.draft.set_rating(rating);
                }
                parsed.is_some()
            }
            FormField::Recommend => match character.to_ascii_lowercase() {
                'y' => {
                    self.draft.set_recommend(Recommend::Yes);
                    true
                }
                'n' => {
                    self.draft.set_recommend(Recommend::No);
                    true
                }
                _ => false,
            },
        }
    }

    /// Deletes from the focused field.
    pub fn backspace(&mut self) {
        self.draft.backspace(self.focus);
    }


    /// Validates the draft and publishes it when complete.
    ///
    /// On success the review is published on `channel`, every field and the
    /// error list are cleared, and focus returns to the name field. On
    /// failure the missing-field errors are appended to the error list and
    /// the entered values are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRejected`] when any required field is absent.
    pub fn submit(&mut self, channel: &mut EventChannel<Review>) -> Result<Review, ReviewRejected> {
        match self.draft.validate() {
            Ok(review) => {
                channel.publish(REVIEW_SUBMITTED, &review);
                self.draft.clear();
                self.errors.clear();
                self.focus = FormField::Name;
                Ok(review)
            }
            Err(rejected) => {
                tracing::debug!(
                    missing = rejected.missing.len(),
                    "review submission rejected"
                );
                self.errors.extend(rejected.missing.iter().copied());
                Err(rejected)
            }
        }
    }

    /// Renders the form within `max_height` rows.
    ///
    /// The fields and the submit hint are always rendered. Errors are listed
    /// above them in whatever rows remain; when they do not all fit, the
    /// last visible row counts the hidden ones.
    #[must_use]
    pub fn view(&self, max_height: usize) -> String {
        let mut output = self.render_errors(max_height.saturating_sub(FIELD_BLOCK_HEIGHT));

        for field in FormField::ALL {
            let prefix = if field == self.focus { ">" } else { " " };
            let value = self.field_value(field);
            output.push_str(&format!("{prefix} {} {value}
", field.label()));
        }

        output.push_str("  [Enter] Submit\n");
        output
    }

    fn render_errors(&self, budget: usize) -> String {
        let total = self.errors.len();
        if total == 0 || budget == 0 {
            return String::new();
        }
        if budget < ERROR_BLOCK_CHROME.saturating_add(1) {
            return format!("{total} error(s) to correct\n");
        }

        let slots = budget.saturating_sub(ERROR_BLOCK_CHROME);
        let listed = if total > slots {
            slots.saturating_sub(1)
        } else {
            total
        };

        let mut output = String::from("Please correct the following error(s):\n");
        for error in self.errors.iter().take(listed) {
            output.push_str(&format!("  - {error}\n"));
        }
        let hidden = total.saturating_sub(listed);
        if hidden > 0 {
            output.push_str(&format!("  ... and {hidden} more\n"));
        }
        output.push('\n');
        output
    }

    fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.draft.name().to_owned(),
            FormField::Review => self.draft.review_text().to_owned(),
            FormField::Rating => self
                .draft
                .rating()
                .map_or_else(String::new, |rating| rating.to_string()),
            FormField::Recommend => self
                .draft
                .recommend()
                .map_or_else(String::new, |recommend| recommend.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rstest::{fixture, rstest};

    use super::*;

    type Published = Arc<Mutex<Vec<Review>>>;

    #[fixture]
    fn published() -> Published {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn channel_recording(published: &Published) -> EventChannel<Review> {
        let mut channel = EventChannel::new();
        let sink = Arc::clone(published);
        channel.subscribe(REVIEW_SUBMITTED, move |review: &Review| {
            sink.lock()
                .expect("published mutex should be available")
                .push(review.clone());
        });
        channel
    }

    fn published_reviews(published: &Published) -> Vec<Review> {
        published
            .lock()
            .expect("published mutex should be available")
            .clone()
    }

    fn type_text(form: &mut ReviewFormComponent, text: &str) {
        for character in text.chars() {
            form.input_char(character);
        }
    }

    fn fill(form: &mut ReviewFormComponent) {
        type_text(form, "alice");
        form.focus_next();
        type_text(form, "Warm");
        form.focus_next();
        form.input_char('4');
        form.focus_next();
        form.input_char('y');
    }

    fn filled_form() -> ReviewFormComponent {
        let mut form = ReviewFormComponent::new();
        fill(&mut form);
        form
    }

    #[rstest]
    fn complete_submission_publishes_once_and_clears(published: Published) {
        let mut channel = channel_recording(&published);
        let mut form = filled_form();

        let review = form.submit(&mut channel).expect("submission should succeed");

        assert_eq!(published_reviews(&published), vec![review.clone()]);
        assert_eq!(review.name, "alice");
        assert_eq!(review.review_text, "Warm");
        assert_eq!(review.rating.value(), 4);
        assert_eq!(review.recommend, Recommend::Yes);
        assert_eq!(form.draft(), &ReviewDraft::new());
        assert!(form.errors().is_empty());
        assert_eq!(form.focus(), FormField::Name);
    }

    #[rstest]
    fn incomplete_submission_keeps_present_fields(published: Published) {
        let mut channel = channel_recording(&published);
        let mut form = ReviewFormComponent::new();
        type_text(&mut form, "alice");

        let rejected = form
            .submit(&mut channel)
            .expect_err("submission should be rejected");

        assert_eq!(rejected.missing.len(), 3);
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.draft().name(), "alice");
        assert!(published_reviews(&published).is_empty());
    }

    #[rstest]
    fn repeated_failures_accumulate_duplicate_errors(published: Published) {
        let mut channel = channel_recording(&published);
        let mut form = ReviewFormComponent::new();

        let first = form.submit(&mut channel).map(|_| ());
        let second = form.submit(&mut channel).map(|_| ());

        assert!(first.is_err() && second.is_err());
        assert_eq!(form.errors().len(), 8);
        assert_eq!(form.errors().first(), form.errors().get(4));
    }

    #[rstest]
    fn success_after_failure_clears_error_list(published: Published) {
        let mut channel = channel_recording(&published);
        let mut form = ReviewFormComponent::new();
        assert!(form.submit(&mut channel).is_err());
        assert_eq!(form.errors().len(), 4);

        fill(&mut form);
        let review = form.submit(&mut channel).expect("completed form should submit");

        assert_eq!(review.name, "alice");
        assert!(form.errors().is_empty());
        assert_eq!(published_reviews(&published).len(), 1);
    }

    #[rstest]
    #[case('0', None)]
    #[case('3', Some(3))]
    #[case('6', None)]
    #[case('x', None)]
    fn rating_field_accepts_only_selectable_digits(
        #[case] character: char,
        #[case] expected: Option<u8>,
    ) {
        let mut form = ReviewFormComponent::new();
        form.focus_next();
        form.focus_next();

        form.input_char(character);

        assert_eq!(form.draft().rating().map(Rating::value), expected);
    }

    #[test]
    fn recommend_field_accepts_yes_and_no() {
        let mut form = ReviewFormComponent::new();
        form.focus_previous();
        assert_eq!(form.focus(), FormField::Recommend);

        assert!(form.input_char('N'));
        assert_eq!(form.draft().recommend(), Some(Recommend::No));
        assert!(!form.input_char('q'));
        assert_eq!(form.draft().recommend(), Some(Recommend::No));
    }

    fn rejected_twice() -> ReviewFormComponent {
        let mut channel = EventChannel::new();
        let mut form = ReviewFormComponent::new();
        assert!(form.submit(&mut channel).is_err());
        assert!(form.submit(&mut channel).is_err());
        form
    }

    #[test]
    fn view_lists_errors_above_fields() {
        let mut channel = EventChannel::new();
        let mut form = ReviewFormComponent::new();
        assert!(form.submit(&mut channel).is_err());

        let view = form.view(20);

        let errors_at = view
            .find("Please correct the following error(s):")
            .expect("error header should render");
        let name_at = view.find("> Name:").expect("focused name field should render");
        assert!(errors_at < name_at);
        assert!(view.contains("  - Answer for recommendation required."));
        assert!(!view.contains("more"));
    }

    #[rstest]
    #[case::roomy(12, 4)]
    #[case::tight(9, 1)]
    fn accumulated_errors_are_capped_to_keep_fields_visible(
        #[case] max_height: usize,
        #[case] listed: usize,
    ) {
        let form = rejected_twice();

        let view = form.view(max_height);

        assert_eq!(view.lines().count(), max_height);
        assert!(view.contains("> Name:"));
        assert!(view.contains("[Enter] Submit"));
        assert_eq!(view.matches("  - ").count(), listed);
    }

    #[test]
    fn errors_collapse_to_a_count_when_space_is_short() {
        let form = rejected_twice();

        let view = form.view(FIELD_BLOCK_HEIGHT.saturating_add(1));

        assert!(view.starts_with("8 error(s) to correct\n"));
        assert!(view.contains("> Name:"));
    }

    #[test]
    fn fields_render_even_without_room() {
        let form = rejected_twice();

        let view = form.view(0);

        assert_eq!(view.lines().count(), FIELD_BLOCK_HEIGHT);
        assert!(view.starts_with("> Name:"));
    }
}
