use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::Local;
use log::{Level, Record};
use log4rs::encode::{Encode, Write};

use crate::location::short_file;

/// Target carried by the record an `error!`/`fatal!` writes before prompting.
/// The encoder prints those records as `critical` instead of `error`.
pub const CRITICAL_TARGET: &str = "dku_logger::critical";

/// Line layout of the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `[<µs since previous record>][<level>](<file>:<line>) <message>`
    Verbose,
    /// `[<MM/DD/YY HH:MM:SS>][<level>](<file>:<line>) <message>`
    Calendar,
}

impl Pattern {
    /// Verbose in debug builds, calendar in release builds.
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Pattern::Verbose
        } else {
            Pattern::Calendar
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::for_build()
    }
}

/// Severity label the way the plugin logs have always spelled them.
pub fn level_name(record: &Record<'_>) -> &'static str {
    match record.level() {
        Level::Error if record.target() == CRITICAL_TARGET => "critical",
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

#[derive(Debug)]
pub struct RecordEncoder {
    pattern: Pattern,
    origin: Instant,
    last_us: AtomicU64,
}

impl RecordEncoder {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            origin: Instant::now(),
            last_us: AtomicU64::new(0),
        }
    }

    fn elapsed_since_previous(&self) -> u64 {
        let now = self.origin.elapsed().as_micros() as u64;
        let prev = self.last_us.swap(now, Ordering::Relaxed);
        now.saturating_sub(prev)
    }
}

impl Encode for RecordEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record<'_>) -> anyhow::Result<()> {
        match self.pattern {
            Pattern::Verbose => write!(w, "[{}]", self.elapsed_since_previous())?,
            Pattern::Calendar => write!(w, "[{}]", Local::now().format("%m/%d/%y %H:%M:%S"))?,
        }

        writeln!(
            w,
            "[{}]({}:{}) {}",
            level_name(record),
            record.file().map(short_file).unwrap_or_default(),
            record.line().unwrap_or_default(),
            record.args()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log4rs::encode::writer::simple::SimpleWriter;

    fn encode(encoder: &RecordEncoder, level: Level, target: &str, msg: &str) -> String {
        let mut out = SimpleWriter(Vec::new());
        encoder
            .encode(
                &mut out,
                &Record::builder()
                    .level(level)
                    .target(target)
                    .file(Some("src\\plugin\\hooks.rs"))
                    .line(Some(42))
                    .args(format_args!("{msg}"))
                    .build(),
            )
            .unwrap();
        String::from_utf8(out.0).unwrap()
    }

    #[test]
    fn verbose_line_layout() {
        let encoder = RecordEncoder::new(Pattern::Verbose);
        let line = encode(&encoder, Level::Info, "plugin", "hooks installed");

        let (stamp, rest) = line.split_once(']').unwrap();
        assert!(stamp.strip_prefix('[').unwrap().parse::<u64>().is_ok());
        assert_eq!(rest, "[info](hooks.rs:42) hooks installed\n");
    }

    #[test]
    fn calendar_line_layout() {
        let encoder = RecordEncoder::new(Pattern::Calendar);
        let line = encode(&encoder, Level::Warn, "plugin", "slow frame");

        // [MM/DD/YY HH:MM:SS]
        let stamp = &line[1..18];
        assert_eq!(&line[0..1], "[");
        assert_eq!(&line[18..19], "]");
        assert_eq!(stamp.as_bytes()[2], b'/');
        assert_eq!(stamp.as_bytes()[5], b'/');
        assert_eq!(stamp.as_bytes()[8], b' ');
        assert_eq!(stamp.as_bytes()[11], b':');
        assert!(line.ends_with("[warning](hooks.rs:42) slow frame\n"));
    }

    #[test]
    fn escalation_records_read_critical() {
        let encoder = RecordEncoder::new(Pattern::Verbose);
        assert!(encode(&encoder, Level::Error, CRITICAL_TARGET, "boom").contains("[critical]"));
        assert!(encode(&encoder, Level::Error, "other_crate", "boom").contains("[error]"));
    }

    #[test]
    fn build_default_matches_profile() {
        let expected = if cfg!(debug_assertions) {
            Pattern::Verbose
        } else {
            Pattern::Calendar
        };
        assert_eq!(Pattern::default(), expected);
    }
}
