//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent entries in a circular
//! buffer and forwards every entry to a sink (the browser console in the
//! app). The buffer can be dumped for bug reports.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// One formatted log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} [{}] {}",
            self.time.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Receives every entry as it is recorded
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, entry: &LogEntry);
}

impl<F> LogSink for F
where
    F: Fn(&LogEntry) + Send + Sync + 'static,
{
    fn write(&self, entry: &LogEntry) {
        self(entry)
    }
}

/// Bounded, shared entry buffer. Oldest entries are dropped first.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// One line per entry
    pub fn dump(&self) -> String {
        self.lock().iter().fold(String::new(), |mut out, entry| {
            let _ = writeln!(out, "{}", entry);
            out
        })
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.join(" ")
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

/// Layer feeding a `LogBuffer` and an optional sink
pub struct RollingLayer {
    buffer: LogBuffer,
    sink: Option<Box<dyn LogSink>>,
    max_level: Level,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            sink: None,
            max_level: Level::INFO,
        }
    }

    pub fn with_sink(mut self, sink: impl LogSink) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Most verbose level recorded
    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() > self.max_level {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            time: Utc::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        };
        if let Some(sink) = &self.sink {
            sink.write(&entry);
        }
        self.buffer.push(entry);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerError(pub String);

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logger init failed: {}", self.0)
    }
}

impl std::error::Error for LoggerError {}

/// Install the rolling layer as the global subscriber
pub fn init_logger(capacity: usize, max_level: Level, sink: impl LogSink) -> Result<LogBuffer, LoggerError> {
    let buffer = LogBuffer::new(capacity);
    let layer = RollingLayer::new(buffer.clone())
        .with_sink(sink)
        .with_max_level(max_level);
    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| LoggerError(e.to_string()))?;
    Ok(buffer)
}
