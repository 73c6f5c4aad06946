// src/logger.rs

//! Diagnostic logging for the command-line binaries.
//!
//! Everything goes to stderr; stdout carries the encoded or decrypted
//! payload and must stay clean. Level comes from `SECRETDEC_DEBUG`.

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

fn logging_level() -> LevelFilter {
    match std::env::var("SECRETDEC_DEBUG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("info") => LevelFilter::Info,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Warn, // default if unset or unknown
    }
}

pub fn setup_logger() {
    if let Err(e) = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}]: {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            ));
        })
        .level(logging_level())
        .chain(std::io::stderr())
        .apply()
    {
        eprintln!("logger setup failed: {e}");
    }
}
