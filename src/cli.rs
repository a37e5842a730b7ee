//! Command-line interface for fancy-text.
//!
//! This module handles CLI argument parsing and the informational
//! subcommands (variant and mark listings, config initialization).

use crate::fancy_text::{FontStyle, MARK_CATALOG, MarkCategory, TransformVariant};
use clap::{Parser, Subcommand};
use fancy_text_config::{Config, LogLevel};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// fancy-text - Render text in stylized Unicode
#[derive(Parser, Debug)]
#[command(name = "fancy-text")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to transform (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Bold stylized output
    #[arg(short, long)]
    pub bold: bool,

    /// Italic stylized output
    #[arg(short, long)]
    pub italic: bool,

    /// Serif instead of sans serif (only with --bold or --italic)
    #[arg(short, long)]
    pub serif: bool,

    /// Combining mark to add to the stylized output (repeatable, see `list-marks`)
    #[arg(short, long = "mark", value_name = "NAME")]
    pub marks: Vec<String>,

    /// Special output to render instead of the configured list (repeatable, see `list-variants`)
    #[arg(long = "variant", value_name = "KEY")]
    pub variants: Vec<String>,

    /// Print only the stylized output
    #[arg(long)]
    pub stylized_only: bool,

    /// Omit variant labels from text output
    #[arg(long)]
    pub no_labels: bool,

    /// Emit a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Debug log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Config file to use instead of ~/.config/fancy-text/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List transform variants
    ListVariants {
        /// Only variants whose name or key contains this text
        query: Option<String>,
    },

    /// List combining marks by category
    ListMarks,

    /// Write a config file with default values
    InitConfig {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Text to transform; `None` reads stdin
    pub text: Option<String>,
    /// Bold / italic / serif toggles
    pub font_style: FontStyle,
    /// Combining mark names to activate
    pub marks: Vec<String>,
    /// Variant keys overriding the config list
    pub variants: Vec<String>,
    pub stylized_only: bool,
    pub no_labels: bool,
    pub json: bool,
    /// Log level from `--log-level`
    pub log_level: Option<LogLevel>,
    /// Config file override
    pub config_path: Option<PathBuf>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            text: cli.text,
            font_style: FontStyle::new(cli.bold, cli.italic, cli.serif),
            marks: cli.marks,
            variants: cli.variants,
            stylized_only: cli.stylized_only,
            no_labels: cli.no_labels,
            json: cli.json,
            log_level: cli.log_level,
            config_path: cli.config,
        }
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    dispatch(Cli::parse())
}

/// Run a subcommand if one was given, otherwise hand back runtime options.
pub fn dispatch(mut cli: Cli) -> CliResult {
    let Some(command) = cli.command.take() else {
        return CliResult::Continue(cli.into());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result: anyhow::Result<()> = match command {
        Commands::ListVariants { query } => {
            list_variants(&mut out, query.as_deref().unwrap_or_default()).map_err(Into::into)
        }
        Commands::ListMarks => list_marks(&mut out).map_err(Into::into),
        Commands::InitConfig { force } => {
            let path = cli.config.unwrap_or_else(Config::config_path);
            init_config(&mut out, &path, force)
        }
    };

    match result {
        Ok(()) => CliResult::Exit(0),
        Err(e) => {
            eprintln!("fancy-text: error: {e:#}");
            CliResult::Exit(1)
        }
    }
}

/// Print every variant, marking the ones in the default catalog with `*`.
pub fn list_variants(out: &mut impl Write, query: &str) -> io::Result<()> {
    let defaults = TransformVariant::default_catalog();
    for variant in TransformVariant::all()
        .iter()
        .filter(|v| v.matches_query(query))
    {
        let marker = if defaults.contains(variant) { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<18} {:<24} {}",
            variant.key(),
            variant.display_name(),
            variant.description()
        )?;
    }
    Ok(())
}

/// Print the mark catalog grouped by category, with a sample on 'a'.
pub fn list_marks(out: &mut impl Write) -> io::Result<()> {
    for (i, category) in MarkCategory::all().iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{category}:")?;
        for mark in MARK_CATALOG.iter().filter(|m| m.category == *category) {
            writeln!(
                out,
                "  a{}  U+{:04X}  {}",
                mark.scalar,
                mark.code_point(),
                mark.name
            )?;
        }
    }
    Ok(())
}

/// Write a default config to `path`, refusing to clobber without `force`.
pub fn init_config(out: &mut impl Write, path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    log::info!("Wrote default config to {:?}", path);
    writeln!(out, "Wrote default config to {}", path.display())?;
    Ok(())
}
