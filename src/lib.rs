// src/lib.rs
//
// Crate root: module layout and public re-exports.

//! Logging facade that routes each message to the terminal or the system log.
//!
//! When no debugger is attached and stdout is a terminal, messages are
//! printed with level colors (errors and faults to stderr). Otherwise they go
//! to the system log for their [`Category`] (os_log on macOS, syslog on other
//! Unix systems) with a `[level] ` prefix.
//!
//! ```
//! use simlog::{Category, Configuration, Routing};
//!
//! let app = Category::new("com.example.app", "startup");
//! simlog::use_configuration(Configuration::default().with_routing(Routing::System));
//! simlog::info!(&app, "version", env!("CARGO_PKG_VERSION"));
//! ```

pub mod category;
pub mod color;
pub mod config;
pub mod detection;
pub mod dispatch;
pub mod error;
pub mod level;
pub mod logger;
mod macros;
pub mod options;
pub mod sink;

pub use category::Category;
pub use color::{TerminalColor, Target};
pub use config::{configuration, use_configuration, Configuration, OutputStream, Routing};
pub use detection::Route;
pub use dispatch::{debug, error, fault, info};
pub use error::{Error, Result};
pub use level::Level;
pub use logger::SimLogger;
pub use options::Options;
