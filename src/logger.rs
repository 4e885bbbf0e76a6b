// src/logger.rs
//
// Single responsibility: exposing simlog as a backend for the `log` crate.
// Each record's target becomes a category under one subsystem.

use std::collections::HashMap;
use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::RwLock;

use crate::category::Category;
use crate::dispatch::process;
use crate::error::Result;
use crate::level::Level;
use crate::options::Options;

/// `log` facade backend.
///
/// ```no_run
/// use log::LevelFilter;
/// use simlog::SimLogger;
///
/// SimLogger::new("com.example.app")
///     .level_filter(LevelFilter::Debug)
///     .init()
///     .expect("logger already installed");
/// ```
pub struct SimLogger {
    subsystem: String,
    level_filter: LevelFilter,
    category_filters: HashMap<String, LevelFilter>,
    categories: RwLock<HashMap<String, Arc<Category>>>,
}

impl SimLogger {
    pub fn new(subsystem: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            level_filter: LevelFilter::Trace,
            category_filters: HashMap::new(),
            categories: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn level_filter(mut self, filter: LevelFilter) -> Self {
        self.level_filter = filter;
        self
    }

    /// Overrides the filter for records whose target is `category`.
    #[must_use]
    pub fn category_level_filter(mut self, category: impl Into<String>, filter: LevelFilter) -> Self {
        self.category_filters.insert(category.into(), filter);
        self
    }

    /// Installs this logger globally and raises `log`'s max level to match.
    pub fn init(self) -> Result<()> {
        let max_level = self
            .category_filters
            .values()
            .copied()
            .fold(self.level_filter, std::cmp::max);
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }

    fn filter_for(&self, target: &str) -> LevelFilter {
        self.category_filters
            .get(target)
            .copied()
            .unwrap_or(self.level_filter)
    }

    fn category(&self, target: &str) -> Arc<Category> {
        if let Some(category) = self.categories.read().get(target) {
            return Arc::clone(category);
        }
        let mut categories = self.categories.write();
        Arc::clone(
            categories
                .entry(target.to_owned())
                .or_insert_with(|| Arc::new(Category::new(self.subsystem.as_str(), target))),
        )
    }
}

impl Log for SimLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let category = self.category(record.target());
        let message = record.args().to_string();
        process(
            Level::from(record.level()),
            &category,
            &message,
            &Options::default(),
        );
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(level: log::Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_level_filter() {
        let logger = SimLogger::new("com.example.app").level_filter(LevelFilter::Info);

        assert!(logger.enabled(&metadata(log::Level::Error, "net")));
        assert!(logger.enabled(&metadata(log::Level::Info, "net")));
        assert!(!logger.enabled(&metadata(log::Level::Debug, "net")));
    }

    #[test]
    fn test_category_level_filter() {
        let logger = SimLogger::new("com.example.app")
            .level_filter(LevelFilter::Warn)
            .category_level_filter("db", LevelFilter::Trace);

        assert!(logger.enabled(&metadata(log::Level::Trace, "db")));
        assert!(!logger.enabled(&metadata(log::Level::Info, "net")));
    }

    #[test]
    fn test_categories_are_cached_per_target() {
        let logger = SimLogger::new("com.example.app");
        let first = logger.category("net");
        let again = logger.category("net");
        let other = logger.category("db");

        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(first.subsystem(), "com.example.app");
        assert_eq!(other.name(), "db");
    }

    #[test]
    fn test_default_filter_allows_everything() {
        let logger = SimLogger::new("com.example.app");
        assert!(logger.enabled(&metadata(log::Level::Trace, "any")));
    }
}
