// Host-side tests for the argument parser, included directly since the
// crate is a binary.

#![allow(dead_code)]
mod cli {
    include!("../src/cli.rs");
}

use cli::CliOverrides;
use std::path::Path;

#[test]
fn no_arguments_means_no_overrides() {
    let overrides = CliOverrides::parse(["preview-native"]).unwrap();
    assert_eq!(overrides, CliOverrides::default());
    assert!(overrides.preset().is_none());
    assert!(overrides.tick_ms().is_none());
    assert!(overrides.seed().is_none());
}

#[test]
fn all_flags_parse() {
    let overrides = CliOverrides::parse([
        "preview-native",
        "--preset",
        "scene.json",
        "--tick-ms",
        "33",
        "--seed",
        "7",
    ])
    .unwrap();
    assert_eq!(overrides.preset(), Some(Path::new("scene.json")));
    assert_eq!(overrides.tick_ms(), Some(33));
    assert_eq!(overrides.seed(), Some(7));
}

#[test]
fn unknown_flag_is_rejected() {
    let err = CliOverrides::parse(["preview-native", "--frames", "10"]).unwrap_err();
    assert!(err.to_string().contains("Unknown flag"), "{err}");
}

#[test]
fn missing_value_is_rejected() {
    let err = CliOverrides::parse(["preview-native", "--seed"]).unwrap_err();
    assert!(err.to_string().contains("Expected a value"), "{err}");
}

#[test]
fn bare_argument_is_rejected() {
    let err = CliOverrides::parse(["preview-native", "scene.json"]).unwrap_err();
    assert!(err.to_string().contains("Unexpected argument"), "{err}");
}

#[test]
fn zero_tick_interval_is_rejected() {
    let err = CliOverrides::parse(["preview-native", "--tick-ms", "0"]).unwrap_err();
    assert!(err.to_string().contains("at least 1 ms"), "{err}");
}

#[test]
fn malformed_numbers_are_rejected() {
    assert!(CliOverrides::parse(["preview-native", "--tick-ms", "fast"]).is_err());
    assert!(CliOverrides::parse(["preview-native", "--seed", "-1"]).is_err());
}
