//! Shared integration test helpers for fancy-text.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{render_args, engine_with_input};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use clap::Parser;
use fancy_text::TransformEngine;
use fancy_text::app::App;
use fancy_text::cli::{Cli, RuntimeOptions};
use fancy_text::config::Config;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Engine over the default catalog with `text` already set.
pub fn engine_with_input(text: &str) -> TransformEngine {
    let mut engine = TransformEngine::new();
    engine.set_input(text);
    engine
}

/// Parse `args` (without the program name) into runtime options.
pub fn options_from_args(args: &[&str]) -> RuntimeOptions {
    let argv = std::iter::once("fancy-text").chain(args.iter().copied());
    Cli::try_parse_from(argv)
        .expect("arguments should parse")
        .into()
}

/// Run the app with `args` against `config` and return what it printed.
pub fn render_with_config(args: &[&str], config: Config) -> String {
    let options = options_from_args(args);
    let mut app = App::with_config(options, config).expect("app should build");
    let mut out = Vec::new();
    app.run(&mut out).expect("render should succeed");
    String::from_utf8(out).expect("output should be UTF-8")
}

/// Run the app with `args` against the default config.
pub fn render_args(args: &[&str]) -> String {
    render_with_config(args, Config::default())
}

/// Write `yaml` to `config.yaml` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub fn config_file_with(yaml: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, yaml).expect("Failed to write config");
    (path, temp_dir)
}
