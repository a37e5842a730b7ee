//! Debug logging for fancy-text.
//!
//! Routes every `log::info!()`/`log::debug!()` record to `fancy_text_debug.log`
//! in the system temp directory so diagnostics never mix with the transformed
//! text on stdout. When `RUST_LOG` is set, records are also mirrored to stderr.
//!
//! Level precedence: the `--log-level` flag, then `RUST_LOG`, then the config
//! file's `log_level` (applied later via [`apply_config_log_level`]).
//!
//! The log file is only created once the first record passes the level
//! filter, so the default `off` level never touches the filesystem.

use fancy_text_config::LogLevel;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const LOG_FILE_NAME: &str = "fancy_text_debug.log";

static LOGGER: OnceLock<DebugLogger> = OnceLock::new();

/// Set when the flag or `RUST_LOG` chose the level; config must not override it.
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

struct DebugLogger {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl DebugLogger {
    fn new(mirror_stderr: bool) -> Self {
        Self {
            file: Mutex::new(None),
            mirror_stderr,
        }
    }

    fn open_log_file() -> Option<File> {
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok()?;
        let rule = "=".repeat(80);
        let _ = write!(
            file,
            "\n{rule}\nfancy-text {} debug session started at {} (level={})\n{rule}\n",
            crate::VERSION,
            timestamp(),
            log::max_level()
        );
        Some(file)
    }
}

impl Log for DebugLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            &timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );

        {
            let mut file = self.file.lock();
            if file.is_none() {
                *file = Self::open_log_file();
            }
            // Write failures are dropped; logging must never break output
            if let Some(f) = file.as_mut() {
                let _ = f.write_all(line.as_bytes());
            }
        }

        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(f) = self.file.lock().as_mut() {
            let _ = f.flush();
        }
    }
}

/// Install the log bridge. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_level = rust_log.as_deref().and_then(parse_env_level);

    let level = cli_level.map(LogLevel::to_level_filter).or(env_level);
    LEVEL_PINNED.store(level.is_some(), Ordering::Relaxed);

    let logger = LOGGER.get_or_init(|| DebugLogger::new(rust_log.is_some()));
    // Err means a logger is already installed (tests, repeated init)
    let _ = log::set_logger(logger);
    log::set_max_level(level.unwrap_or(LevelFilter::Off));
}

/// Apply the level from the loaded config unless the flag or `RUST_LOG`
/// already chose one.
pub fn apply_config_log_level(level: LogLevel) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        log::debug!("Config log level {} ignored, level pinned at startup", level);
        return;
    }
    log::set_max_level(level.to_level_filter());
    log::info!("Log level set to {} from config", level);
}

/// Most verbose level named in a `RUST_LOG` value.
///
/// Accepts both bare levels (`debug`) and per-target directives
/// (`fancy_text=trace,warn`); anything unparseable is ignored.
fn parse_env_level(value: &str) -> Option<LevelFilter> {
    value
        .split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next()?.trim();
            level.parse::<LevelFilter>().ok()
        })
        .max()
}

fn format_line(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{timestamp}] [{level:<5}] [{target}] {msg}\n")
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_level_bare() {
        assert_eq!(parse_env_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_env_level("OFF"), Some(LevelFilter::Off));
    }

    #[test]
    fn test_parse_env_level_directives_take_most_verbose() {
        assert_eq!(
            parse_env_level("warn,fancy_text=trace"),
            Some(LevelFilter::Trace)
        );
        assert_eq!(parse_env_level("fancy_text::engine=info"), Some(LevelFilter::Info));
    }

    #[test]
    fn test_parse_env_level_garbage() {
        assert_eq!(parse_env_level(""), None);
        assert_eq!(parse_env_level("loud"), None);
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("1.000001", log::Level::Info, "fancy_text::engine", "hi"),
            "[1.000001] [INFO ] [fancy_text::engine] hi\n"
        );
    }

    #[test]
    fn test_log_path_in_temp_dir() {
        assert!(log_path().starts_with(std::env::temp_dir()));
        assert!(log_path().ends_with(LOG_FILE_NAME));
    }
}
