use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::Context;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::Config;
use crate::encoder::{CRITICAL_TARGET, RecordEncoder};
use crate::location::SourceLocation;
use crate::platform::Platform;
use crate::report::{ErrorReport, FAIL_EXIT_CODE, Severity};

/// False when the crate is built with `disable-logging`: nothing is written,
/// no file is created and errors are not escalated.
pub const ENABLED: bool = !cfg!(feature = "disable-logging");

const FALLBACK_TARGET: &str = "dku_logger";

/// Handle to a plugin's log file.
///
/// Cheap to clone; every clone writes to the same file and shares one
/// minimum level. Pass it to whatever needs to log. [`Logger::install`]
/// additionally routes the `log` crate's macros from any other crate into it.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    sink: Option<log4rs::Logger>,
    level: AtomicUsize,
    installed: AtomicBool,
    path: PathBuf,
    title: String,
    platform: Arc<dyn Platform>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.inner.path)
            .field("title", &self.inner.title)
            .field("level", &self.level())
            .field("installed", &self.inner.installed.load(Ordering::Relaxed))
            .finish()
    }
}

impl Logger {
    /// Builds the logger and installs it as the process-wide `log` backend.
    pub fn init(config: Config, platform: Arc<dyn Platform>) -> anyhow::Result<Self> {
        let logger = Self::build(config, platform)?;
        logger.install()?;
        Ok(logger)
    }

    /// Creates (truncating) `<dir>/<name>.log` and writes the init record.
    ///
    /// `<dir>` is the explicit [`Config::directory`] if set, otherwise the
    /// documents folder plus the host's script-extender subpath, or the working
    /// directory for a standalone host.
    pub fn build(config: Config, platform: Arc<dyn Platform>) -> anyhow::Result<Self> {
        let (sink, path) = if ENABLED {
            let path = resolve_directory(&config, platform.as_ref())?.join(config.file_name());
            (Some(setup_sink(&path, &config)?), path)
        } else {
            (None, PathBuf::from(config.file_name()))
        };

        let logger = Self {
            inner: Arc::new(Inner {
                sink,
                level: AtomicUsize::new(config.level as usize),
                installed: AtomicBool::new(false),
                path,
                title: config.dialog_title().to_string(),
                platform,
            }),
        };

        // Written regardless of the configured level.
        logger.emit(
            Level::Info,
            FALLBACK_TARGET,
            crate::here!(),
            format_args!("Logger init - {} {}", config.host.display_name(), config.version),
        );

        Ok(logger)
    }

    /// Makes this logger the `log` crate's global backend. Only the first
    /// install in a process succeeds.
    pub fn install(&self) -> anyhow::Result<()> {
        log::set_boxed_logger(Box::new(self.clone()))
            .context("a process-wide logger is already installed")?;
        log::set_max_level(self.level());
        self.inner.installed.store(true, Ordering::Release);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    pub fn level(&self) -> LevelFilter {
        level_from_usize(self.inner.level.load(Ordering::Acquire))
    }

    /// Applies to the next record; nothing already written is affected.
    pub fn set_level(&self, level: LevelFilter) {
        self.inner.level.store(level as usize, Ordering::Release);
        if self.inner.installed.load(Ordering::Acquire) {
            log::set_max_level(level);
        }
    }

    pub fn enable_debug(&self, enable: bool) {
        self.set_level(if enable {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
    }

    pub fn log_at(&self, level: Level, location: SourceLocation, args: fmt::Arguments<'_>) {
        if level <= self.level() {
            let target = if location.module.is_empty() {
                FALLBACK_TARGET
            } else {
                location.module
            };
            self.emit(level, target, location, args);
        }
    }

    /// Logs at critical severity, then asks the user whether to exit.
    ///
    /// Returns only if the user answers "No"; any other outcome terminates
    /// the process with [`FAIL_EXIT_CODE`].
    pub fn error_at(&self, location: SourceLocation, args: fmt::Arguments<'_>) {
        if !ENABLED {
            return;
        }
        self.report(Severity::Error, location, args);
    }

    /// Logs at critical severity, tells the user the process is exiting, and
    /// terminates it with [`FAIL_EXIT_CODE`].
    pub fn fatal_at(&self, location: SourceLocation, args: fmt::Arguments<'_>) -> ! {
        if ENABLED {
            self.report(Severity::Fatal, location, args);
        }
        self.inner.platform.terminate_process(FAIL_EXIT_CODE)
    }

    fn report(&self, severity: Severity, location: SourceLocation, args: fmt::Arguments<'_>) {
        if Level::Error <= self.level() {
            self.emit(Level::Error, CRITICAL_TARGET, location, args);
        }
        Log::flush(self);

        let report = ErrorReport::new(severity, location, args.to_string());
        report.escalate(self.inner.platform.as_ref(), &self.inner.title);
    }

    fn emit(&self, level: Level, target: &str, location: SourceLocation, args: fmt::Arguments<'_>) {
        let Some(sink) = &self.inner.sink else {
            return;
        };

        let module = (!location.module.is_empty()).then_some(location.module);
        sink.log(
            &Record::builder()
                .level(level)
                .target(target)
                .file_static(Some(location.file))
                .line(Some(location.line))
                .module_path_static(module)
                .args(args)
                .build(),
        );
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.inner.sink.is_some() && metadata.level() <= self.level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(sink) = &self.inner.sink {
            sink.log(record);
        }
    }

    fn flush(&self) {
        if let Some(sink) = &self.inner.sink {
            sink.flush();
        }
    }
}

fn level_from_usize(v: usize) -> LevelFilter {
    match v {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn resolve_directory(config: &Config, platform: &dyn Platform) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &config.directory {
        return Ok(dir.clone());
    }

    if config.host.uses_documents() {
        let docs = platform
            .resolve_log_directory()
            .with_context(|| format!("failed to resolve the {} log directory", config.host))?;
        Ok(docs.join(config.host.subpath()))
    } else {
        std::env::current_dir().context("failed to read the working directory")
    }
}

fn setup_sink(path: &Path, config: &Config) -> anyhow::Result<log4rs::Logger> {
    use log4rs::append::console::ConsoleAppender;
    use log4rs::append::file::FileAppender;
    use log4rs::config::{Appender, Config as SinkConfig, Root};

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let logfile = FileAppender::builder()
        .append(false)
        .encoder(Box::new(RecordEncoder::new(config.pattern)))
        .build(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let mut config_builder = SinkConfig::builder();
    let mut root_builder = Root::builder();

    config_builder =
        config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
    root_builder = root_builder.appender("logfile");

    if config.mirror_to_console {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(RecordEncoder::new(config.pattern)))
            .build();
        config_builder =
            config_builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root_builder = root_builder.appender("stdout");
    }

    // Filtering happens in `Logger`, so the sink itself accepts everything.
    let sink_config = config_builder
        .build(root_builder.build(LevelFilter::Trace))
        .context("invalid log4rs configuration")?;
    Ok(log4rs::Logger::new(sink_config))
}
