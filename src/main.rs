use anyhow::Result;
use fancy_text::app::App;
use fancy_text::cli;
use std::io::{self, Write};

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };
    // Initialize logging. Routes all log::info!() etc. to the debug log file.
    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config (applied later).
    fancy_text::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting fancy-text {}", fancy_text::VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = App::new(runtime_options).and_then(|mut app| app.run(&mut out));
    let _ = out.flush();
    log::logger().flush();

    if let Err(e) = result {
        log::error!("{e:#}");
        eprintln!("fancy-text: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
