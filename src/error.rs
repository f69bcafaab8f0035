//! Error types for the countdown application

use thiserror::Error;

/// Failures at the edges of the app. The countdown itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file exists but could not be read or parsed.
    #[error("failed to load configuration")]
    Config(#[from] confy::ConfyError),

    /// The log directory could not be created.
    #[error("failed to create log directory")]
    LogDir(#[source] std::io::Error),

    /// The terminal program failed to start or exited abnormally.
    #[error("terminal program failed")]
    Program(#[from] bubbletea_rs::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
