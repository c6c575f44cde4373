use std::path::PathBuf;

use log::LevelFilter;

use crate::encoder::Pattern;
use crate::host::Host;

/// Minimum severity used when none is configured: debug in debug builds,
/// info otherwise.
pub const fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Everything [`Logger::build`](crate::Logger::build) needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    /// Plugin name; the log file is `<name>.log`.
    pub name: String,
    /// Plugin version, announced in the first record.
    pub version: String,
    pub host: Host,
    pub level: LevelFilter,
    pub pattern: Pattern,
    /// Replaces the documents folder and host subpath entirely.
    pub directory: Option<PathBuf>,
    /// Dialog title; the plugin name when unset.
    pub title: Option<String>,
    /// Also write every record to stdout.
    pub mirror_to_console: bool,
}

impl Config {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            host: Host::default(),
            level: default_level(),
            pattern: Pattern::default(),
            directory: None,
            title: None,
            mirror_to_console: false,
        }
    }

    pub fn host(mut self, host: Host) -> Self {
        self.host = host;
        self
    }

    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn mirror_to_console(mut self, enable: bool) -> Self {
        self.mirror_to_console = enable;
        self
    }

    pub fn file_name(&self) -> String {
        format!("{}.log", self.name)
    }

    pub fn dialog_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}
