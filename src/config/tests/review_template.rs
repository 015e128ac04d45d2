//! Tests for review card template resolution.

use rstest::rstest;
use serde_json::json;

use super::helpers::build_config_from_layers;
use crate::StorefrontConfig;
use crate::StorefrontError;
use crate::tui::components::DEFAULT_REVIEW_TEMPLATE;

#[rstest]
fn missing_template_falls_back_to_default() {
    let template = StorefrontConfig::default()
        .review_card_template()
        .expect("default template should parse");

    assert_eq!(template.source(), DEFAULT_REVIEW_TEMPLATE);
}

#[rstest]
fn configured_template_is_used() {
    let config = build_config_from_layers(&[(
        "file",
        json!({"review_template": "{{ name }}: {{ review }}"}),
    )]);

    let template = config
        .review_card_template()
        .expect("configured template should parse");

    assert_eq!(template.source(), "{{ name }}: {{ review }}");
}

#[rstest]
fn invalid_template_is_a_configuration_error() {
    let config = build_config_from_layers(&[("cli", json!({"review_template": "{{ name"}))]);

    let result = config.review_card_template();

    assert!(
        matches!(result, Err(StorefrontError::Configuration { .. })),
        "expected configuration error, got {result:?}"
    );
}
