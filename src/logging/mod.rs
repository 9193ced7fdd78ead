// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use log::{Level, Log, Record};
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    InitError(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

// Builds the logger without installing it. Logs go to the configured file,
// or to stderr so the form on stdout is left alone.
pub fn builder(config: &Config) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    match &config.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    Ok(builder)
}

pub fn init(config: &Config) -> Result<()> {
    let logger = builder(config)?.build();
    let max_level = logger.filter();

    report_config_warnings(&logger, config);

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}

const CONFIG_TARGET: &str = "rust_passgen::core::config";

// Config is read before any logger exists, so its warnings are replayed here
pub fn report_config_warnings(logger: &dyn Log, config: &Config) {
    for warning in &config.warnings {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", warning))
                .level(Level::Warn)
                .target(CONFIG_TARGET)
                .module_path_static(Some(CONFIG_TARGET))
                .build(),
        );
    }
    logger.flush();
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    Ok(file)
}
