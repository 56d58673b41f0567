//! File logging.
//!
//! The terminal belongs to the UI, so log records go to a file under the
//! platform data directory.

use std::path::PathBuf;
use std::str::FromStr;

use color_eyre::eyre::{Result, WrapErr, eyre};
use folio_config::Config;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
};

/// Log file name inside the data directory.
const LOG_FILE: &str = "folio.log";

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Parse a level name such as `info` or `debug`.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| eyre!("unknown log level {level:?}"))
}

/// Where the log file goes.
pub fn log_path() -> Option<PathBuf> {
    Config::project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}

/// Install the file logger. Returns the log file path, or `None` when
/// logging is switched off.
pub fn init(config: &Config) -> Result<Option<PathBuf>> {
    let level = parse_level(&config.log_level)?;
    if level == LevelFilter::Off {
        return Ok(None);
    }
    let path = log_path().ok_or_else(|| eyre!("no data directory for the log file"))?;

    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level))
        .wrap_err("invalid logger configuration")?;
    log4rs::init_config(log_config).wrap_err("logger already installed")?;

    Ok(Some(path))
}
