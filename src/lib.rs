// ══════════════════════════════════════════════════════════════════════════════
//                                  TICKLOG
//                  Leveled console logging with a stopwatch
// ══════════════════════════════════════════════════════════════════════════════
//
// A small logger for scripts and services that want readable leveled lines
// without a logging framework. Every line carries a local timestamp and a
// three-letter severity code; lines below the minimum level are dropped.
//
//   2024-05-01 12:00:00.250 WRN (0.250s) [db] slow query
//   └── timestamp ───────┘ └┬┘ └─ timer ┘ └ctx┘ └ message
//                         code
//
// Context labels nest like a stack, and the stopwatch can prefix every line
// with the seconds elapsed since it was last armed.
//
// ══════════════════════════════════════════════════════════════════════════════

//! Leveled console logger with nested context prefixes and an elapsed-time
//! stopwatch.
//!
//! ```
//! use ticklog::{LoggerInstance, MemorySink, Severity};
//! use serde_json::json;
//!
//! let mut log = LoggerInstance::with_sink(MemorySink::new());
//! log.debug("dropped: below INFO")
//! 	.info_with("request", json!({ "path": "/health" }))
//! 	.timer("warming up")
//! 	.elapsed("warm");
//! assert_eq!(log.sink().len(), 3);
//! ```

pub mod constants;
pub mod level;
pub mod clock;
pub mod payload;
pub mod sink;
pub mod logger;
pub mod global;

pub use clock::{Clock, ManualClock, SystemClock};
pub use level::{ParseSeverityError, Severity};
pub use logger::LoggerInstance;
pub use payload::Payload;
pub use sink::{ConsoleSink, MemorySink, Record, Sink, WriterSink};
