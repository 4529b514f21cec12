//! Logger installation for the `ailoop` binary.
//!
//! Always logs to the terminal; `--log-file` adds `./ailoop.log`.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILE: &str = "./ailoop.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    Terminal,
    /// Terminal plus `./ailoop.log`.
    Both,
}

impl LogDestination {
    pub fn from_flag(log_file: bool) -> Self {
        if log_file {
            LogDestination::Both
        } else {
            LogDestination::Terminal
        }
    }
}

pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = build_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if destination == LogDestination::Both {
        if let Some(file_logger) = create_file_logger(Path::new(LOG_FILE), level, config) {
            loggers.push(file_logger);
        }
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    log_path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
