//! stderr ロガー
//!
//! `log` ファサードの出力先。レベルは `-v` の回数か `CARDSIFT_LOG` で決まる。

use crate::env::{EnvVar, LOG_VAR};
use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "error".red().to_string(),
            Level::Warn => "warn".yellow().to_string(),
            Level::Info => "info".green().to_string(),
            Level::Debug => "debug".blue().to_string(),
            Level::Trace => "trace".dimmed().to_string(),
        };
        eprintln!("[{}] {}", tag, record.args());
    }

    fn flush(&self) {}
}

/// `-v` の回数からレベルを決定
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// ロガーを初期化
///
/// `-v` 指定があればそれを優先し、なければ `CARDSIFT_LOG`、どちらもなければ warn。
pub fn init(verbose: u8) {
    let level = if verbose > 0 {
        level_from_verbosity(verbose)
    } else {
        EnvVar::get(LOG_VAR)
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn)
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
