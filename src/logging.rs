// src/logging.rs
//
// `log` facade + env_logger backend. Call sites use the short macros below.
// GUI: lines go to `.yt_scout/debug.log`. CLI: lines go to stderr.
// Level comes from YT_SCOUT_LOG (env_logger filter syntax), default "info".

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::config::consts::{LOG_ENV, LOG_FILE, STATE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub enum LogSink {
    File,
    Stderr,
}

/// Install the global logger. Safe to call more than once (later calls are no-ops).
pub fn init(sink: LogSink, default_level: LevelFilter) {
    start();

    let mut builder = Builder::new();
    builder.filter_level(default_level);
    if let Ok(filters) = std::env::var(LOG_ENV) {
        builder.parse_filters(&filters);
    }
    builder.format(|buf, record| {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
    });

    match sink {
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::File => {
            let _ = fs::create_dir_all(STATE_DIR);
            let path = Path::new(STATE_DIR).join(LOG_FILE);
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    builder.target(Target::Pipe(Box::new(file)));
                }
                Err(_) => {
                    builder.target(Target::Stderr);
                }
            }
        }
    }

    let _ = builder.try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
