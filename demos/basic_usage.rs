//! Basic usage of the logging front-end

use term_logger::prelude::*;

fn main() -> term_logger::Result<()> {
    let logger = shared(TerminalLogger::on_stderr());
    set_global_logger(logger.clone());

    term_logger::info!("starting up")?;
    term_logger::warn!("cache directory missing, rebuilding")?;

    // Open this module up to debug output; everything else keeps the
    // default floor.
    logger
        .lock()
        .configure(Some(module_path!()), LogOptions::min_level(LogLevel::DEBUG));
    term_logger::debug!("debug output now visible")?;

    // The same call site logs at most twice, however often it runs.
    for attempt in 1..=5 {
        term_logger::error!(max_repeats = 2, "upstream refused connection (attempt {})", attempt)?;
    }

    Ok(())
}
