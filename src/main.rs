use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use dku_logger::{Config, Host, Logger, NativePlatform};

#[derive(Parser, Debug)]
#[command(author, version, about = "Writes a plugin log the way a loaded plugin would")]
struct Args {
    /// Plugin name; the log file is <NAME>.log
    #[arg(long, default_value = "DKUtilDemo")]
    name: String,

    /// Plugin version announced in the first record
    #[arg(long = "plugin-version", default_value = env!("CARGO_PKG_VERSION"))]
    plugin_version: String,

    /// Host application: standalone, fallout4, skyrim-se or skyrim-vr
    #[arg(long, default_value = "standalone")]
    host: Host,

    /// Write the log here instead of the host's documents folder
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Set the logging level (e.g., "error", "warn", "info", "debug", "trace")
    #[arg(long, short, value_name = "LEVEL")]
    logging: Option<log::LevelFilter>,

    /// Mirror every record to the console
    #[arg(long, default_value_t = false)]
    tail: bool,

    /// Finish with an error or fatal report
    #[arg(long, value_enum, default_value_t = Raise::None)]
    raise: Raise,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Raise {
    None,
    Error,
    Fatal,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = Config::new(&args.name, &args.plugin_version)
        .host(args.host)
        .mirror_to_console(args.tail);
    if let Some(level) = args.logging {
        cfg = cfg.level(level);
    }
    if let Some(dir) = &args.log_dir {
        cfg = cfg.directory(dir);
    }

    let logger = Logger::init(cfg, Arc::new(NativePlatform))?;
    println!("Logging to {}", logger.path().display());

    dku_logger::debug!(logger, "PID {}", std::process::id());
    dku_logger::info!(logger, "running as {}", args.host);
    // Installed loggers also receive records from the `log` facade.
    log::info!("level is {}", logger.level());

    match args.raise {
        Raise::None => {}
        Raise::Error => {
            dku_logger::error!(logger, "demo error raised from the command line");
            dku_logger::warn!(logger, "error dismissed, still running");
        }
        Raise::Fatal => dku_logger::fatal!(logger, "demo fatal raised from the command line"),
    }

    dku_logger::info!(logger, "done");
    Ok(())
}
