//! Logging macros
//!
//! Thin sugar over [`Logger::log_at`](crate::Logger::log_at). Each macro checks
//! the level before building `format_args!`, and records the enclosing
//! function, file and line as the call site.
//!
//! # Examples
//!
//! ```
//! use rust_gated_logger::prelude::*;
//! use rust_gated_logger::{debug, info};
//!
//! let logger = Logger::new("NET");
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! debug!(logger, "only built when DEBUG is enabled: {:?}", vec![1, 2, 3]);
//! ```

/// Path of the enclosing function, e.g. `my_crate::server::run`.
///
/// Closures are transparent: a call inside one reports the function that
/// defines it.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let mut name = name.strip_suffix("::__here").unwrap_or(name);
        while let ::std::option::Option::Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }};
}

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_gated_logger::prelude::*;
/// # let logger = Logger::new("APP");
/// use rust_gated_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::LogLevel = $level;
        if logger.is_enabled_for(level) {
            logger.log_at(
                level,
                $crate::CallSite::new(
                    ::std::option::Option::Some($crate::__function_name!()),
                    ::std::file!(),
                    ::std::line!(),
                ),
                ::std::format_args!($($arg)+),
            );
        }
    }};
}

#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Verbose, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
