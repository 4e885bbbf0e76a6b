// src/error.rs
//
// Errors surfaced while configuring or installing the logger. Emitting a
// message never fails from the caller's point of view.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A global `log` logger was already installed.
    #[error("failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),

    /// `SIMLOG_ROUTING` (or a parsed string) held an unknown routing mode.
    #[error("invalid routing `{0}`, expected one of: auto, terminal, system")]
    InvalidRouting(String),
}

pub type Result<T> = std::result::Result<T, Error>;
