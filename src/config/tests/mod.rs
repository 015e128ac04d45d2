//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `premium_flag`: Premium opt-out loading through the CLI parser
//! - `review_template`: Review card template resolution tests

mod helpers;
mod premium_flag;
mod review_template;
