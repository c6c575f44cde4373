//! File logging and error escalation for script-extender plugins.
//!
//! A plugin builds one [`Logger`] when it is loaded and passes it around.
//! The logger writes `<name>.log` into the host's script-extender log folder
//! (for example `Documents/My Games/Skyrim Special Edition/SKSE`) and turns
//! `error!`/`fatal!` calls into a dialog for the user.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use dku_logger::{Config, Host, Logger, NativePlatform};
//!
//! fn plugin_load() -> anyhow::Result<()> {
//!     let cfg = Config::new("MyPlugin", "1.0.0").host(Host::skyrim(false));
//!     let log = Logger::init(cfg, Arc::new(NativePlatform))?;
//!
//!     dku_logger::info!(log, "hooks installed");
//!     dku_logger::debug!(log, "only visible with debug enabled");
//!     Ok(())
//! }
//! ```
//!
//! # Escalation
//!
//! *   **`error!`**:
//!     Writes a `critical` record, then shows a Yes/No box asking whether to
//!     exit. Answering "No" returns to the caller; anything else terminates the
//!     process with [`FAIL_EXIT_CODE`].
//!
//! *   **`fatal!`**:
//!     Writes a `critical` record, shows an OK box and always terminates.
//!
//! The prompt and the termination go through the [`Platform`] trait;
//! [`NativePlatform`] uses message boxes and `TerminateProcess` on Windows
//! and the controlling terminal and `_exit` on Unix.
//!
//! # Cargo features
//!
//! *   **`f4se`** / **`skse`**: default [`Host`] for [`Config::new`].
//! *   **`disable-logging`**: every macro compiles to nothing, no file is
//!     created and no dialog is shown.
//!
//! # Record format
//!
//! Debug builds write `[<µs since previous>][<level>](<file>:<line>) <message>`,
//! release builds `[<MM/DD/YY HH:MM:SS>][<level>](<file>:<line>) <message>`.
//! See [`Pattern`].

pub mod config;
pub mod encoder;
pub mod host;
pub mod location;
pub mod logger;
mod macros;
pub mod platform;
pub mod report;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use encoder::{CRITICAL_TARGET, Pattern};
pub use host::Host;
pub use location::SourceLocation;
pub use log::{Level, LevelFilter};
pub use logger::Logger;
#[doc(hidden)]
pub use macros::fatal_unit as __fatal;
pub use platform::{Decision, NativePlatform, Platform, PromptKind};
pub use report::{ErrorReport, FAIL_EXIT_CODE, Severity, Transition};

pub const VERSION_MAJOR: u32 = 1;
pub const VERSION_MINOR: u32 = 2;
pub const VERSION_REVISION: u32 = 3;

/// `major * 10000 + minor * 100 + revision`
pub const VERSION: u32 = VERSION_MAJOR * 10000 + VERSION_MINOR * 100 + VERSION_REVISION;
