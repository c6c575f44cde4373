//! Call-site capturing wrappers around [`Logger`](crate::Logger).
//!
//! Every macro takes the logger first, then `format!`-style arguments:
//!
//! ```ignore
//! dku_logger::info!(logger, "hooked {} functions", count);
//! dku_logger::error!(logger, "form {:08X} is not an actor", form_id);
//! ```
//!
//! With the `disable-logging` feature they only borrow the logger.
//!
//! `fatal!` evaluates to `()` in both builds so callers type-check the same
//! way whether or not logging is compiled in. When logging is on it still
//! never returns.

use std::fmt;

use crate::{Logger, SourceLocation};

/// `fatal!` expansion target. Declared as returning `()` so the macro has
/// the same type as its `disable-logging` counterpart.
#[doc(hidden)]
pub fn fatal_unit(logger: &Logger, location: SourceLocation, args: fmt::Arguments<'_>) {
    logger.fatal_at(location, args)
}

#[cfg(not(feature = "disable-logging"))]
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::log_at(
            &$logger,
            $crate::Level::Debug,
            $crate::here!(),
            ::std::format_args!($($arg)+),
        )
    };
}

#[cfg(not(feature = "disable-logging"))]
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::log_at(
            &$logger,
            $crate::Level::Info,
            $crate::here!(),
            ::std::format_args!($($arg)+),
        )
    };
}

#[cfg(not(feature = "disable-logging"))]
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::log_at(
            &$logger,
            $crate::Level::Warn,
            $crate::here!(),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Logs at critical severity and asks the user whether to exit the process.
#[cfg(not(feature = "disable-logging"))]
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::error_at(&$logger, $crate::here!(), ::std::format_args!($($arg)+))
    };
}

/// Logs at critical severity, tells the user, and terminates the process.
#[cfg(not(feature = "disable-logging"))]
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__fatal(&$logger, $crate::here!(), ::std::format_args!($($arg)+))
    };
}

#[cfg(feature = "disable-logging")]
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {{
        let _ = &$logger;
    }};
}

#[cfg(feature = "disable-logging")]
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {{
        let _ = &$logger;
    }};
}

#[cfg(feature = "disable-logging")]
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {{
        let _ = &$logger;
    }};
}

#[cfg(feature = "disable-logging")]
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {{
        let _ = &$logger;
    }};
}

#[cfg(feature = "disable-logging")]
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {{
        let _ = &$logger;
    }};
}
