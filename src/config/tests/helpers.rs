//! Shared test helpers for configuration tests.

use std::ffi::OsString;

use ortho_config::{MergeComposer, OrthoConfig};
use serde_json::Value;

use crate::StorefrontConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Composes a [`StorefrontConfig`] from `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> StorefrontConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    StorefrontConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Loads a [`StorefrontConfig`] through the real CLI parser.
///
/// `HOME` and `XDG_CONFIG_HOME` point at an empty directory and the
/// template variable is cleared, so only `cli_args` and the defaults
/// contribute.
pub fn load_from_args(cli_args: &[&str]) -> Result<StorefrontConfig, String> {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
        ("STOREFRONT_REVIEW_TEMPLATE", None),
    ]);

    let mut args: Vec<OsString> = vec![OsString::from("storefront")];
    args.extend(cli_args.iter().map(OsString::from));

    StorefrontConfig::load_from_iter(args).map_err(|error| error.to_string())
}
