//! Logging utilities for `everest-cli`. This defines a simple logger with a
//! style which should be used across the tool to log and print messages.

use std::{fmt, io::Write};

use ::log::{
    kv::{self, Key, Value, VisitSource},
    Level, LevelFilter, Log, Metadata, Record,
};
use once_cell::sync::OnceCell;
use parking_lot::{const_rwlock, RwLock};
use serde_json::{Map, Value as JsonValue};

use crate::{
    highlight::{highlight, Colour, Modifier},
    stream::OutputStream,
    stream_writeln,
};

/// The [MessagingFormat] specifies how the [ToolLogger] renders records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessagingFormat {
    /// Every record is emitted as a single JSON object on its own line.
    Json,

    /// Records are emitted as `<level>: <message>` with a highlighted level.
    #[default]
    Normal,
}

impl fmt::Display for MessagingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessagingFormat::Json => write!(f, "json"),
            MessagingFormat::Normal => write!(f, "normal"),
        }
    }
}

/// The logger that is used by the tool for `log!` statements.
///
/// The streams are written at most once, unset streams fall back to the
/// process streams. The level and format can be changed at any time and
/// default to [LevelFilter::Info] and [MessagingFormat::Normal].
#[derive(Debug)]
pub struct ToolLogger {
    /// The output stream that the logger will write to.
    pub output_stream: OnceCell<OutputStream>,

    /// The error stream that the logger will write to.
    pub error_stream: OnceCell<OutputStream>,

    /// The format to use when logging information.
    messaging_format: RwLock<MessagingFormat>,

    /// The most verbose level that this logger emits.
    level: RwLock<LevelFilter>,
}

impl ToolLogger {
    /// Create a new logger.
    pub const fn new() -> Self {
        Self {
            output_stream: OnceCell::new(),
            error_stream: OnceCell::new(),
            messaging_format: const_rwlock(MessagingFormat::Normal),
            level: const_rwlock(LevelFilter::Info),
        }
    }

    /// Set the [ToolLogger] messaging format.
    pub fn set_messaging_format(&self, format: MessagingFormat) {
        *self.messaging_format.write() = format;
    }

    /// Set the most verbose level the [ToolLogger] emits.
    pub fn set_level(&self, level: LevelFilter) {
        *self.level.write() = level;
    }

    pub fn messaging_format(&self) -> MessagingFormat {
        *self.messaging_format.read()
    }

    pub fn level(&self) -> LevelFilter {
        *self.level.read()
    }

    fn stream_for(&self, level: Level) -> OutputStream {
        if level == Level::Error {
            self.error_stream.get().cloned().unwrap_or_else(OutputStream::stderr)
        } else {
            self.output_stream.get().cloned().unwrap_or_else(OutputStream::stdout)
        }
    }

    fn log_default(&self, out: &mut dyn Write, record: &Record) {
        let level_prefix = match record.level() {
            Level::Error => highlight(Colour::Red | Modifier::Bold, "error"),
            Level::Warn => highlight(Colour::Yellow | Modifier::Bold, "warn"),
            Level::Info => highlight(Colour::Blue | Modifier::Bold, "info"),
            Level::Debug => highlight(Colour::Blue | Modifier::Bold, "debug"),
            Level::Trace => highlight(Colour::Magenta | Modifier::Bold, "trace"),
        };

        stream_writeln!(
            out,
            "{level_prefix}: {message}",
            level_prefix = level_prefix,
            message = record.args()
        );
    }

    fn log_json(&self, out: &mut dyn Write, record: &Record) {
        let mut object = Map::new();
        object.insert("level".into(), record.level().as_str().to_lowercase().into());
        object.insert("target".into(), record.target().into());
        object.insert("message".into(), record.args().to_string().into());

        // Fields can't override the fixed keys above.
        let mut fields = FieldCollector::default();
        let _ = record.key_values().visit(&mut fields);
        for (key, value) in fields.0 {
            object.entry(key).or_insert(value);
        }

        match serde_json::to_string(&JsonValue::Object(object)) {
            Ok(line) => stream_writeln!(out, "{line}"),
            Err(err) => stream_writeln!(out, "failed to serialise log record: {err}"),
        }
    }
}

impl Default for ToolLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for ToolLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut out = self.stream_for(record.level());

        match self.messaging_format() {
            MessagingFormat::Normal => self.log_default(&mut out, record),
            MessagingFormat::Json => self.log_json(&mut out, record),
        }
    }

    fn flush(&self) {
        let _ = self.stream_for(Level::Info).flush();
        let _ = self.stream_for(Level::Error).flush();
    }
}

/// Collects the structured key-values attached to a [Record].
#[derive(Default)]
struct FieldCollector(Vec<(String, JsonValue)>);

impl<'kvs> VisitSource<'kvs> for FieldCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.0.push((key.as_str().to_owned(), JsonValue::String(value.to_string())));
        Ok(())
    }
}
