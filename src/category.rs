// src/category.rs
//
// Single responsibility: the named channel a message is logged under.

use std::fmt;

use crate::sink::SystemSink;

/// A named logging channel: the subsystem that owns it and a category within it.
///
/// The system-log handle is created once, here, so categories are meant to be
/// built up front and reused:
///
/// ```
/// use once_cell::sync::Lazy;
/// use simlog::Category;
///
/// static NETWORK: Lazy<Category> = Lazy::new(|| Category::new("com.example.app", "network"));
///
/// simlog::debug!(&NETWORK, "socket opened");
/// ```
#[derive(Debug)]
pub struct Category {
    subsystem: String,
    name: String,
    sink: SystemSink,
}

impl Category {
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        let subsystem = subsystem.into();
        let name = category.into();
        let sink = SystemSink::new(&subsystem, &name);
        Self {
            subsystem,
            name,
            sink,
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn sink(&self) -> &SystemSink {
        &self.sink
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.subsystem, self.name)
    }
}
