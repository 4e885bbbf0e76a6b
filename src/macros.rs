// src/macros.rs
//
// Single responsibility: variadic call sites over the dispatch functions.

//! Call-site macros taking a category, optional `options = ...`, and any
//! number of `Display` items.
//!
//! ```
//! use simlog::{Category, Options};
//!
//! let db = Category::new("com.example.app", "db");
//! let rows = 3;
//! simlog::info!(&db, "loaded", rows, "rows");
//! simlog::debug!(&db, options = Options::separator(", "), "a", "b", "c");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __simlog_emit {
    ($func:ident, $category:expr $(,)?) => {
        $crate::$func($category, &[], &$crate::Options::default())
    };
    ($func:ident, $category:expr, options = $options:expr $(, $item:expr)* $(,)?) => {
        $crate::$func(
            $category,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            &$options,
        )
    };
    ($func:ident, $category:expr $(, $item:expr)+ $(,)?) => {
        $crate::$func(
            $category,
            &[$(&$item as &dyn ::std::fmt::Display),+],
            &$crate::Options::default(),
        )
    };
}

/// Logs the items at info level under a category.
#[macro_export]
macro_rules! info { ($($t:tt)+) => { $crate::__simlog_emit!(info, $($t)+) } }

/// Logs the items at debug level under a category.
#[macro_export]
macro_rules! debug { ($($t:tt)+) => { $crate::__simlog_emit!(debug, $($t)+) } }

/// Logs the items at error level under a category.
#[macro_export]
macro_rules! error { ($($t:tt)+) => { $crate::__simlog_emit!(error, $($t)+) } }

/// Logs at fault level with `file!()`/`line!()` prepended, then aborts.
#[macro_export]
macro_rules! fault {
    ($category:expr $(,)?) => {
        $crate::fault($category, &[], &$crate::Options::default(), file!(), line!())
    };
    ($category:expr, options = $options:expr $(, $item:expr)* $(,)?) => {
        $crate::fault(
            $category,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            &$options,
            file!(),
            line!(),
        )
    };
    ($category:expr $(, $item:expr)+ $(,)?) => {
        $crate::fault(
            $category,
            &[$(&$item as &dyn ::std::fmt::Display),+],
            &$crate::Options::default(),
            file!(),
            line!(),
        )
    };
}
