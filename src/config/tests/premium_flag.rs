//! Tests for the `no_premium` opt-out and the derived premium flag.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{build_config_from_layers, load_from_args};
use crate::StorefrontConfig;

#[rstest]
fn sessions_are_premium_by_default() {
    let config = StorefrontConfig::default();

    assert!(!config.no_premium);
    assert!(config.premium(), "the storefront starts as a premium session");
    assert!(config.review_template.is_none());
}

#[rstest]
#[case::file(vec![("file", json!({"no_premium": true}))], false)]
#[case::cli_over_file(
    vec![("file", json!({"no_premium": true})), ("cli", json!({"no_premium": false}))],
    true
)]
#[case::defaults_only(vec![("defaults", json!({"no_premium": false}))], true)]
fn premium_follows_highest_layer(#[case] layers: Vec<(&str, Value)>, #[case] expected: bool) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.premium(), expected);
}

#[rstest]
fn absent_flag_keeps_premium_on_real_load() {
    let config = load_from_args(&[]).expect("config should load");

    assert!(config.premium(), "missing --no-premium should stay premium");
}

#[rstest]
#[case::long("--no-premium")]
#[case::short("-n")]
fn opt_out_flag_disables_premium(#[case] flag: &str) {
    let config = load_from_args(&[flag]).expect("config should load");

    assert!(config.no_premium);
    assert!(!config.premium());
}

#[rstest]
fn review_template_loads_from_cli() {
    let config =
        load_from_args(&["--review-template", "{{ name }}"]).expect("config should load");

    assert_eq!(config.review_template.as_deref(), Some("{{ name }}"));
    assert!(config.premium());
}
