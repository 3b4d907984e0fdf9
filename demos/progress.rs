//! In-place progress bar rendering

use std::thread;
use std::time::Duration;
use term_logger::prelude::*;

fn main() -> term_logger::Result<()> {
    set_global_logger(shared(TerminalLogger::on_stderr()));

    for step in 0..=30 {
        term_logger::progress!(step as f64 / 30.0, "downloading index")?;
        thread::sleep(Duration::from_millis(40));
    }

    // An ordinary line terminates the bar.
    term_logger::info!("download complete")?;
    Ok(())
}
