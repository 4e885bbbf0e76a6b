// src/options.rs
//
// Single responsibility: turning the items of one call into a string.

use std::fmt::{self, Write as _};

/// How the items of a single call are glued together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    separator: String,
    terminator: String,
}

impl Default for Options {
    fn default() -> Self {
        Self::new(" ", "\n")
    }
}

impl Options {
    pub fn new(separator: impl Into<String>, terminator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            terminator: terminator.into(),
        }
    }

    /// Custom separator, default terminator.
    pub fn separator(separator: impl Into<String>) -> Self {
        Self::new(separator, "\n")
    }

    /// Custom terminator, default separator.
    pub fn terminator(terminator: impl Into<String>) -> Self {
        Self::new(" ", terminator)
    }

    pub fn separator_str(&self) -> &str {
        &self.separator
    }

    pub fn terminator_str(&self) -> &str {
        &self.terminator
    }

    /// Renders every item with `Display` and joins them with the separator.
    pub fn join(&self, items: &[&dyn fmt::Display]) -> String {
        let mut out = String::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{item}");
        }
        out
    }
}
