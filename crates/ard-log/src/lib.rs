use std::path::PathBuf;

use chrono::{Datelike, Timelike};
// Re-export logging functions for convenience.
pub use log::*;
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{runtime::ConfigErrors, Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Logs below this level are dropped.
    pub level: LevelFilter,
    /// Folder to write a timestamped log file into. `None` logs to the console only.
    pub log_folder: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("unable to initialize logging to file: {0}")]
    File(#[from] std::io::Error),
    #[error("unable to create logging configuration: {0}")]
    Config(#[from] ConfigErrors),
    #[error("unable to initialize logging: {0}")]
    Init(#[from] SetLoggerError),
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            log_folder: None,
        }
    }
}

/// Initializes logging. Should be called before any other logging functions and only once per
/// process.
pub fn init(settings: &LogSettings) -> Result<(), LogInitError> {
    // Output to console
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();

    let mut config =
        Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = Root::builder().appender("stdout");

    // Output to log file. Name of the file is based on the current time.
    if let Some(folder) = &settings.log_folder {
        let now = chrono::Utc::now();
        let mut path = folder.clone();
        path.push(format!(
            "{} {} {} {} {} {}.txt",
            now.year(),
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second()
        ));

        let log_file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d} - {l} {t} - {m}{n}")))
            .build(path)?;

        config = config.appender(Appender::builder().build("log_file", Box::new(log_file)));
        root = root.appender("log_file");
    }

    let config = config.build(root.build(settings.level))?;
    log4rs::init_config(config)?;

    log_panics::init();

    Ok(())
}
