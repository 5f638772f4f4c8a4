use std::io;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not start logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),
}
