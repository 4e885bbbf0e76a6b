// src/color.rs
//
// ANSI colors for terminal passthrough and the wrapping applied to a message
// before it leaves the process.

use crate::level::Level;

/// Foreground colors understood by ANSI terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

impl TerminalColor {
    /// Escape sequence that switches the terminal to this color.
    pub const fn escape(self) -> &'static str {
        match self {
            TerminalColor::Black => "\u{1b}[0;30m",
            TerminalColor::Red => "\u{1b}[0;31m",
            TerminalColor::Green => "\u{1b}[0;32m",
            TerminalColor::Yellow => "\u{1b}[0;33m",
            TerminalColor::Blue => "\u{1b}[0;34m",
            TerminalColor::Magenta => "\u{1b}[0;35m",
            TerminalColor::Cyan => "\u{1b}[0;36m",
            TerminalColor::White => "\u{1b}[0;37m",
            TerminalColor::Default => "\u{1b}[0;0m",
        }
    }
}

/// Where a wrapped message is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Printed straight to a terminal; colored by level.
    Terminal(Level),
    /// Handed to the system log, which IDE consoles also display; prefixed by level.
    Console(Level),
}

/// Decorates `message` for `target`. Levels without a color or prefix pass
/// through untouched, as does everything when `colors` is off on a terminal.
pub fn wrap(message: &str, target: Target, colors: bool) -> String {
    match target {
        Target::Terminal(level) => match level.color() {
            Some(color) if colors => format!(
                "{}{}{}",
                color.escape(),
                message,
                TerminalColor::Default.escape()
            ),
            _ => message.to_owned(),
        },
        Target::Console(level) => match level.prefix() {
            Some(prefix) => format!("{prefix}{message}"),
            None => message.to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Level::Info, "\u{1b}[0;32mready\u{1b}[0;0m")]
    #[case(Level::Error, "\u{1b}[0;31mready\u{1b}[0;0m")]
    #[case(Level::Fault, "\u{1b}[0;35mready\u{1b}[0;0m")]
    #[case(Level::Debug, "ready")]
    fn test_wrap_terminal(#[case] level: Level, #[case] expected: &str) {
        assert_eq!(wrap("ready", Target::Terminal(level), true), expected);
    }

    #[rstest]
    #[case(Level::Info, "[info] ready")]
    #[case(Level::Error, "[error] ready")]
    #[case(Level::Fault, "[fault] ready")]
    #[case(Level::Debug, "ready")]
    fn test_wrap_console(#[case] level: Level, #[case] expected: &str) {
        assert_eq!(wrap("ready", Target::Console(level), true), expected);
    }

    #[test]
    fn test_wrap_terminal_without_colors() {
        assert_eq!(wrap("ready", Target::Terminal(Level::Error), false), "ready");
    }

    #[test]
    fn test_console_prefix_ignores_color_switch() {
        assert_eq!(
            wrap("ready", Target::Console(Level::Info), false),
            "[info] ready"
        );
    }

    #[test]
    fn test_reset_sequence() {
        assert_eq!(TerminalColor::Default.escape(), "\x1b[0;0m");
        assert_eq!(TerminalColor::Cyan.escape(), "\x1b[0;36m");
    }
}
