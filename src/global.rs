// ══════════════════════════════════════════════════════════════════════════════
// GLOBAL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The process-wide logger for code that does not want to thread an instance
// through its call sites. It is created on first use, lives until the process
// exits, and only changes through its own methods. Every thread sees the same
// instance.

use std::sync::{Mutex, OnceLock, PoisonError};
use crate::logger::LoggerInstance;

static LOGGER: OnceLock<Mutex<LoggerInstance>> = OnceLock::new();

/// Runs `f` against the shared console logger.
///
/// ```
/// use ticklog::{global, Severity};
///
/// global::with_logger(|log| {
/// 	log.level(Severity::Debug).debug("visible now");
/// });
/// assert_eq!(global::with_logger(|log| log.min_level()), Severity::Debug);
/// ```
///
/// A panic inside `f` does not disable the logger for later callers. Calling
/// `with_logger` again from inside `f` deadlocks.
pub fn with_logger<R>(f: impl FnOnce(&mut LoggerInstance) -> R) -> R {
	let cell = LOGGER.get_or_init(|| Mutex::new(LoggerInstance::new()));
	let mut guard = cell.lock().unwrap_or_else(PoisonError::into_inner);
	f(&mut guard)
}
