// src/config.rs
//
// Single responsibility: the shared configuration every call reads.

//! Process-wide configuration: where terminal output goes, how routing is
//! decided and whether colors are used.
//!
//! The configuration is shared by every call site. Replace it with
//! [`use_configuration`]; read it with [`configuration`].

use std::env::{self, VarError};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

use crate::error::{Error, Result};

/// Environment variable selecting [`Routing`].
pub const ROUTING_ENV: &str = "SIMLOG_ROUTING";
/// Presence disables terminal colors (<https://no-color.org>).
pub const NO_COLOR_ENV: &str = "NO_COLOR";

static SHARED: Lazy<RwLock<Arc<Configuration>>> =
    Lazy::new(|| RwLock::new(Arc::new(Configuration::default())));

/// Replaces the shared configuration used by every subsequent call.
pub fn use_configuration(configuration: Configuration) {
    *SHARED.write() = Arc::new(configuration);
}

/// The configuration currently in effect.
pub fn configuration() -> Arc<Configuration> {
    SHARED.read().clone()
}

/// A destination for terminal passthrough output.
#[derive(Clone)]
pub enum OutputStream {
    Stdout,
    Stderr,
    Writer(Arc<Mutex<Box<dyn Write + Send>>>),
}

impl OutputStream {
    pub fn stdout() -> Self {
        OutputStream::Stdout
    }

    pub fn stderr() -> Self {
        OutputStream::Stderr
    }

    /// Wraps any writer, e.g. a file or an in-memory buffer.
    pub fn from_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        OutputStream::Writer(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Writes `text` in full and flushes.
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        match self {
            OutputStream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()
            }
            OutputStream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(text.as_bytes())?;
                err.flush()
            }
            OutputStream::Writer(writer) => {
                let mut writer = writer.lock();
                writer.write_all(text.as_bytes())?;
                writer.flush()
            }
        }
    }
}

impl fmt::Debug for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStream::Stdout => f.write_str("Stdout"),
            OutputStream::Stderr => f.write_str("Stderr"),
            OutputStream::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// How the output target is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Routing {
    /// Terminal when no debugger is attached and stdout is a terminal,
    /// otherwise the system log.
    #[default]
    Auto,
    /// Always print to the configured streams.
    Terminal,
    /// Always send to the system log.
    System,
}

impl FromStr for Routing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Routing::Auto),
            "terminal" => Ok(Routing::Terminal),
            "system" => Ok(Routing::System),
            _ => Err(Error::InvalidRouting(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    pub standard_output: OutputStream,
    pub standard_error: OutputStream,
    pub routing: Routing,
    /// Color terminal output by level.
    pub colors: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            standard_output: OutputStream::Stdout,
            standard_error: OutputStream::Stderr,
            routing: Routing::Auto,
            colors: true,
        }
    }
}

impl Configuration {
    /// Defaults adjusted by `SIMLOG_ROUTING` and `NO_COLOR`.
    pub fn from_env() -> Result<Self> {
        let mut configuration = Self::default();
        match env::var(ROUTING_ENV) {
            Ok(value) => configuration.routing = value.parse()?,
            Err(VarError::NotUnicode(value)) => {
                return Err(Error::InvalidRouting(value.to_string_lossy().into_owned()));
            }
            Err(VarError::NotPresent) => {}
        }
        if env::var_os(NO_COLOR_ENV).is_some() {
            configuration.colors = false;
        }
        Ok(configuration)
    }

    #[must_use]
    pub fn with_standard_output(mut self, stream: OutputStream) -> Self {
        self.standard_output = stream;
        self
    }

    #[must_use]
    pub fn with_standard_error(mut self, stream: OutputStream) -> Self {
        self.standard_error = stream;
        self
    }

    #[must_use]
    pub fn with_routing(mut self, routing: Routing) -> Self {
        self.routing = routing;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }
}
