// src/level.rs
//
// Severity levels and what each one looks like on a terminal or in the system log.

use std::fmt;

use crate::color::TerminalColor;

/// Severity attached to every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Error,
    /// Unrecoverable; `fault` calls abort after logging.
    Fault,
}

impl Level {
    pub const fn color(self) -> Option<TerminalColor> {
        match self {
            Level::Info => Some(TerminalColor::Green),
            Level::Error => Some(TerminalColor::Red),
            Level::Fault => Some(TerminalColor::Magenta),
            Level::Debug => None,
        }
    }

    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Level::Info => Some("[info] "),
            Level::Error => Some("[error] "),
            Level::Fault => Some("[fault] "),
            Level::Debug => None,
        }
    }

    /// Error and fault go to the standard-error stream on a terminal.
    pub const fn is_stderr(self) -> bool {
        matches!(self, Level::Error | Level::Fault)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Error => "error",
            Level::Fault => "fault",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn | log::Level::Error => Level::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(log::Level::Trace, Level::Debug)]
    #[case(log::Level::Debug, Level::Debug)]
    #[case(log::Level::Info, Level::Info)]
    #[case(log::Level::Warn, Level::Error)]
    #[case(log::Level::Error, Level::Error)]
    fn test_from_log_level(#[case] from: log::Level, #[case] expected: Level) {
        assert_eq!(Level::from(from), expected);
    }

    #[test]
    fn test_stream_selection() {
        assert!(!Level::Debug.is_stderr());
        assert!(!Level::Info.is_stderr());
        assert!(Level::Error.is_stderr());
        assert!(Level::Fault.is_stderr());
    }

    #[test]
    fn test_debug_is_undecorated() {
        assert_eq!(Level::Debug.color(), None);
        assert_eq!(Level::Debug.prefix(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Fault.to_string(), "fault");
        assert_eq!(format!("{}", Level::Info), "info");
    }
}
