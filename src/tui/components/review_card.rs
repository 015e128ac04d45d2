//! Template-driven rendering of a single submitted review.
//!
//! Review cards are rendered with `MiniJinja`. Templates can use the
//! following variables:
//! - `name`
//! - `rating`
//! - `review`
//! - `recommend`

use minijinja::{Environment, context};
use thiserror::Error;

use crate::catalog::Review;

/// Template used when no custom review template is configured.
pub const DEFAULT_REVIEW_TEMPLATE: &str = "Name: {{ name }}\n\
Rating: {{ rating }}\n\
{{ review }}\n\
Would you recommend this product? Answer: {{ recommend }}";

const TEMPLATE_NAME: &str = "review";

/// Errors raised while preparing or rendering a review card template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewTemplateError {
    /// The template source failed to parse.
    #[error("invalid review template syntax: {message}")]
    InvalidSyntax {
        /// Human-readable parser message from `MiniJinja`.
        message: String,
    },
    /// Rendering failed after successful parsing.
    #[error("review template rendering failed: {message}")]
    RenderFailed {
        /// Human-readable rendering failure from `MiniJinja`.
        message: String,
    },
}

/// A parsed-and-checked review card template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCardTemplate {
    source: String,
}

impl Default for ReviewCardTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_REVIEW_TEMPLATE.to_owned(),
        }
    }
}

impl ReviewCardTemplate {
    /// Creates a template after checking that `source` parses.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewTemplateError::InvalidSyntax`] when `source` fails to
    /// parse.
    pub fn new(source: &str) -> Result<Self, ReviewTemplateError> {
        let mut environment = Environment::new();
        environment
            .add_template(TEMPLATE_NAME, source)
            .map_err(|error| ReviewTemplateError::InvalidSyntax {
                message: error.to_string(),
            })?;
        Ok(Self {
            source: source.to_owned(),
        })
    }

    /// Returns the template source.
    #[must_use]
    pub const fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Renders `review` through the template.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewTemplateError::InvalidSyntax`] if the source no longer
    /// parses, or [`ReviewTemplateError::RenderFailed`] when rendering fails.
    pub fn render(&self, review: &Review) -> Result<String, ReviewTemplateError> {
        let mut environment = Environment::new();
        environment.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

        environment
            .add_template(TEMPLATE_NAME, &self.source)
            .map_err(|error| ReviewTemplateError::InvalidSyntax {
                message: error.to_string(),
            })?;

        let template = environment.get_template(TEMPLATE_NAME).map_err(|error| {
            ReviewTemplateError::RenderFailed {
                message: error.to_string(),
            }
        })?;

        template
            .render(context! {
                name => review.name.as_str(),
                rating => review.rating.value(),
                review => review.review_text.as_str(),
                recommend => review.recommend.as_str(),
            })
            .map_err(|error| ReviewTemplateError::RenderFailed {
                message: error.to_string(),
            })
    }
}
