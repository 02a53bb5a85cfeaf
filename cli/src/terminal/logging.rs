//! Console and log file output for every `tracing` event.
//!
//! Both sinks see the same events: the console gets a coloured marker per
//! level, the log file gets `<timestamp> - <LEVEL> - <message>` lines.

use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::*;
use macshift_common::config::Config;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, fmt};

/// Owns the subscriber for as long as it is alive.
///
/// The subscriber is installed as the default for the current thread only,
/// and uninstalled again on drop.
pub struct Logger {
    _guard: DefaultGuard,
}

impl Logger {
    pub fn init(cfg: &Config) -> anyhow::Result<Self> {
        let level = if cfg.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };

        // RUST_LOG, when set, takes precedence over the --verbose default.
        let filter = || {
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy()
        };

        let file_appender = open_log_file(&cfg.log_file)?;

        let console_layer = fmt::layer()
            .event_format(MacshiftFormatter::console())
            .with_writer(std::io::stdout)
            .with_filter(filter());

        let file_layer = fmt::layer()
            .event_format(MacshiftFormatter::file())
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(filter());

        let subscriber = tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer);

        Ok(Self {
            _guard: tracing::subscriber::set_default(subscriber),
        })
    }
}

/// Appends to `path`, creating it and its parent directory if needed.
fn open_log_file(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sink {
    Console,
    File,
}

pub struct MacshiftFormatter {
    sink: Sink,
}

impl MacshiftFormatter {
    fn console() -> Self {
        Self {
            sink: Sink::Console,
        }
    }

    fn file() -> Self {
        Self { sink: Sink::File }
    }
}

impl<S, N> FormatEvent<S, N> for MacshiftFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();

        let mut timestamp = String::new();
        SystemTime.format_time(&mut Writer::new(&mut timestamp))?;

        match self.sink {
            Sink::File => {
                write!(writer, "{} - {} - ", timestamp, level)?;
            }
            Sink::Console => {
                let (symbol, color_func) = level_marker(level);
                write!(
                    writer,
                    "{} {} ",
                    timestamp.bright_black(),
                    color_func(symbol.into())
                )?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_marker(level: Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
    match level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    }
}
