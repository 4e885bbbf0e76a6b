// src/dispatch.rs
//
// The formatting and routing routine behind every log call.

use std::fmt::Display;

use crate::category::Category;
use crate::color::{wrap, Target};
use crate::config::{configuration, Configuration};
use crate::detection::Route;
use crate::level::Level;
use crate::options::Options;

pub fn info(category: &Category, items: &[&dyn Display], options: &Options) {
    process(Level::Info, category, &options.join(items), options);
}

pub fn debug(category: &Category, items: &[&dyn Display], options: &Options) {
    process(Level::Debug, category, &options.join(items), options);
}

pub fn error(category: &Category, items: &[&dyn Display], options: &Options) {
    process(Level::Error, category, &options.join(items), options);
}

/// Logs at fault level with the call site prepended, then aborts the process.
pub fn fault(
    category: &Category,
    items: &[&dyn Display],
    options: &Options,
    file: &str,
    line: u32,
) -> ! {
    let message = fault_message(file, line, &options.join(items));
    process(Level::Fault, category, &message, options);
    std::process::abort()
}

pub fn fault_message(file: &str, line: u32, message: &str) -> String {
    format!("[{file}:{line}] {message}")
}

/// Routes one formatted message using the shared configuration.
pub fn process(level: Level, category: &Category, message: &str, options: &Options) {
    let configuration = configuration();
    match Route::detect(configuration.routing) {
        Route::Terminal => print(&configuration, level, message, options),
        Route::System => category
            .sink()
            .send(level, &console_line(level, message, options)),
    }
}

fn print(configuration: &Configuration, level: Level, message: &str, options: &Options) {
    let line = terminal_line(level, message, options, configuration.colors);
    let stream = if level.is_stderr() {
        &configuration.standard_error
    } else {
        &configuration.standard_output
    };
    // A closed or full stream must not take the caller down.
    let _ = stream.write_str(&line);
}

/// Exact text written to a terminal stream, trailing newline included.
///
/// A terminator of `"\n"` is dropped so the line is not doubled; any other
/// terminator is kept in front of the newline.
pub fn terminal_line(level: Level, message: &str, options: &Options, colors: bool) -> String {
    let terminator = match options.terminator_str() {
        "\n" => "",
        other => other,
    };
    format!(
        "{}{}\n",
        wrap(message, Target::Terminal(level), colors),
        terminator
    )
}

/// Exact text handed to the system log.
pub fn console_line(level: Level, message: &str, options: &Options) -> String {
    format!(
        "{}{}",
        wrap(message, Target::Console(level), true),
        options.terminator_str()
    )
}
