//! Logging Setup
//!
//! Routes `tracing` events into the rolling buffer and the browser console.

use rolling_logger::{init_logger, LogBuffer, LogEntry, LogSink};
use tracing::Level;

/// Console sink, `console.error` / `console.warn` / `console.log` by level
struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry) {
        let line = format!("[{}] {}", entry.target, entry.message);
        if entry.level == Level::ERROR {
            web_sys::console::error_1(&line.into());
        } else if entry.level == Level::WARN {
            web_sys::console::warn_1(&line.into());
        } else {
            web_sys::console::log_1(&line.into());
        }
    }
}

/// Install the global subscriber. Returns the buffer of recent entries.
pub fn init(capacity: usize) -> Option<LogBuffer> {
    match init_logger(capacity, Level::DEBUG, ConsoleSink) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::error_1(&format!("[LOG] {}", e).into());
            None
        }
    }
}
