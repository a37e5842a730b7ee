//! One-shot application run: load config, build the engine from config and
//! command-line options, transform the input and write the result.

use crate::cli::RuntimeOptions;
use crate::debug;
use crate::engine::{NamedOutput, TransformEngine};
use crate::fancy_text::{MarkId, StyleVariant, TransformVariant};
use anyhow::{Context, Result};
use fancy_text_config::Config;
use serde::Serialize;
use std::io::{self, Read, Write};

/// JSON report written with `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: &'a str,
    pub outputs: &'a [NamedOutput],
    pub font_style: StyleVariant,
    pub marks: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylized: Option<&'a str>,
}

pub struct App {
    options: RuntimeOptions,
    config: Config,
    engine: TransformEngine,
}

impl App {
    /// Load config (from `--config` or the default path) and build the app.
    pub fn new(options: RuntimeOptions) -> Result<Self> {
        let config = match &options.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .context("failed to load config")?;

        debug::apply_config_log_level(config.log_level);
        Self::with_config(options, config)
    }

    /// Build the app from an already loaded config.
    ///
    /// Variant and mark names given on the command line must all resolve;
    /// unlike config entries they are not skipped.
    pub fn with_config(options: RuntimeOptions, config: Config) -> Result<Self> {
        let mut engine = if options.variants.is_empty() {
            TransformEngine::from_config(&config)
        } else {
            let mut variants = Vec::with_capacity(options.variants.len());
            for key in &options.variants {
                let variant = TransformVariant::from_key(key)?;
                if variants.contains(&variant) {
                    log::warn!("Duplicate variant '{}' on command line ignored", key);
                } else {
                    variants.push(variant);
                }
            }
            TransformEngine::with_variants(variants, config.fallback_char)
        };

        let style = options.font_style;
        engine.set_font_style(style.bold, style.italic, style.serif);
        for name in &options.marks {
            let id = MarkId::from_name(name)?;
            engine.set_mark_active(id, true);
        }

        Ok(Self {
            options,
            config,
            engine,
        })
    }

    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    /// Transform the input (argument, or stdin when absent) and write it.
    pub fn run(&mut self, out: &mut impl Write) -> Result<()> {
        let text = match self.options.text.take() {
            Some(text) => text,
            None => read_stdin().context("failed to read stdin")?,
        };
        self.render(&text, out)
    }

    /// Transform `text` and write it in the selected output format.
    pub fn render(&mut self, text: &str, out: &mut impl Write) -> Result<()> {
        self.engine.set_input(text);
        log::info!(
            "Rendering {} variants for {} bytes of input",
            self.engine.special_outputs().len(),
            text.len()
        );

        if self.options.json {
            self.write_json(out)
        } else {
            self.write_text(out)
        }
    }

    fn show_labels(&self) -> bool {
        self.config.show_labels && !self.options.no_labels
    }

    fn include_stylized(&self) -> bool {
        self.options.stylized_only || self.config.include_stylized
    }

    fn write_text(&self, out: &mut impl Write) -> Result<()> {
        let labels = self.show_labels();

        if !self.options.stylized_only {
            for output in self.engine.special_outputs() {
                write_line(out, labels.then_some(output.label), &output.value)?;
            }
        }

        let stylized = self.engine.stylized_output();
        if self.include_stylized() && !stylized.is_empty() {
            write_line(out, labels.then_some("Stylized"), stylized)?;
        }
        Ok(())
    }

    fn write_json(&self, out: &mut impl Write) -> Result<()> {
        let outputs: &[NamedOutput] = if self.options.stylized_only {
            &[]
        } else {
            self.engine.special_outputs()
        };
        let report = Report {
            input: self.engine.input(),
            outputs,
            font_style: self.engine.font_style().variant(),
            marks: self.engine.marks().active_marks().map(|m| m.name).collect(),
            stylized: self
                .include_stylized()
                .then(|| self.engine.stylized_output()),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }
}

fn write_line(out: &mut impl Write, label: Option<&str>, value: &str) -> io::Result<()> {
    match label {
        Some(label) => writeln!(out, "{label}: {value}"),
        None => writeln!(out, "{value}"),
    }
}

/// Read all of stdin, dropping the final line terminator a shell pipe adds.
fn read_stdin() -> io::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    strip_trailing_newline(&mut text);
    Ok(text)
}

fn strip_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_newline() {
        let mut text = String::from("hi\r\n");
        strip_trailing_newline(&mut text);
        assert_eq!(text, "hi");

        let mut text = String::from("a\n\n");
        strip_trailing_newline(&mut text);
        assert_eq!(text, "a\n");

        let mut text = String::from("plain");
        strip_trailing_newline(&mut text);
        assert_eq!(text, "plain");
    }

    #[test]
    fn test_write_line_with_and_without_label() {
        let mut out = Vec::new();
        write_line(&mut out, Some("Circles"), "ⓐ").expect("write to vec");
        write_line(&mut out, None, "ⓑ").expect("write to vec");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Circles: ⓐ\nⓑ\n");
    }
}
