// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The stateful logger: minimum level, context stack and stopwatch. Every
// emitting call goes through one routine that filters by level, builds the
// prefix (timestamp, code, elapsed time, context) and hands a Record to the sink.
// Calls never fail and return the instance so they can be chained.

use chrono::{DateTime, Local};
use crate::clock::{format_timestamp, seconds_between, Clock, SystemClock};
use crate::constants::TIMER_OFF;
use crate::level::Severity;
use crate::payload::Payload;
use crate::sink::{ConsoleSink, Record, Sink};

/// Leveled logger with nested context prefixes and an elapsed-time stopwatch.
///
/// ```
/// use ticklog::{LoggerInstance, MemorySink, Severity};
///
/// let mut log = LoggerInstance::with_sink(MemorySink::new());
/// log.level(Severity::Debug)
/// 	.context("[boot]")
/// 	.debug("loading settings")
/// 	.context(None)
/// 	.info("ready");
/// assert!(log.sink().lines()[1].ends_with("DBG [boot] loading settings"));
/// ```
#[derive(Debug)]
pub struct LoggerInstance<S: Sink = ConsoleSink, C: Clock = SystemClock> {
	min_level: Severity,
	last_timestamp: Option<DateTime<Local>>,
	elapsed_seconds: f64,
	timer_enabled: bool,
	context_stack: Vec<String>,
	sink: S,
	clock: C,
}

impl LoggerInstance {
	/// Colored console output on the system clock, level INFO.
	pub fn new() -> Self {
		Self::with_parts(ConsoleSink::new(), SystemClock)
	}
}

impl Default for LoggerInstance {
	fn default() -> Self {
		Self::new()
	}
}

impl<S: Sink> LoggerInstance<S> {
	pub fn with_sink(sink: S) -> Self {
		Self::with_parts(sink, SystemClock)
	}
}

impl<S: Sink, C: Clock> LoggerInstance<S, C> {
	pub fn with_parts(sink: S, clock: C) -> Self {
		Self {
			min_level: Severity::default(),
			last_timestamp: None,
			elapsed_seconds: 0.0,
			timer_enabled: false,
			context_stack: Vec::new(),
			sink,
			clock,
		}
	}

	// ──────────────────────────────────────────────────────────────────────────
	// Configuration
	// ──────────────────────────────────────────────────────────────────────────

	/// Sets the minimum level and announces it at INFO.
	///
	/// `None`, the current level and `Severity::Timer` are ignored. The
	/// announcement goes through the new level's filter, so switching to WARN
	/// or above prints nothing.
	pub fn level(&mut self, target: impl Into<Option<Severity>>) -> &mut Self {
		let Some(target) = target.into() else { return self };
		if target == self.min_level || !target.is_filterable() {
			return self;
		}
		self.min_level = target;
		let announcement = format!("Logger level set to '{}'", target.code());
		self.emit(Severity::Info, &announcement, None);
		self
	}

	/// Pushes `label` onto the context stack, or pops it when `None`.
	pub fn context<'a>(&mut self, label: impl Into<Option<&'a str>>) -> &mut Self {
		match label.into() {
			Some(label) => self.context_stack.push(label.to_string()),
			None => {
				self.context_stack.pop();
			}
		}
		self
	}

	// ──────────────────────────────────────────────────────────────────────────
	// Leveled output
	// ──────────────────────────────────────────────────────────────────────────

	pub fn debug(&mut self, message: &str) -> &mut Self {
		self.log(Severity::Debug, message)
	}

	pub fn info(&mut self, message: &str) -> &mut Self {
		self.log(Severity::Info, message)
	}

	pub fn warn(&mut self, message: &str) -> &mut Self {
		self.log(Severity::Warn, message)
	}

	pub fn error(&mut self, message: &str) -> &mut Self {
		self.log(Severity::Error, message)
	}

	pub fn fatal(&mut self, message: &str) -> &mut Self {
		self.log(Severity::Fatal, message)
	}

	pub fn debug_with(&mut self, message: &str, payload: impl Into<Payload>) -> &mut Self {
		self.log_with(Severity::Debug, message, payload)
	}

	pub fn info_with(&mut self, message: &str, payload: impl Into<Payload>) -> &mut Self {
		self.log_with(Severity::Info, message, payload)
	}

	pub fn warn_with(&mut self, message: &str, payload: impl Into<Payload>) -> &mut Self {
		self.log_with(Severity::Warn, message, payload)
	}

	pub fn error_with(&mut self, message: &str, payload: impl Into<Payload>) -> &mut Self {
		self.log_with(Severity::Error, message, payload)
	}

	pub fn fatal_with(&mut self, message: &str, payload: impl Into<Payload>) -> &mut Self {
		self.log_with(Severity::Fatal, message, payload)
	}

	/// Logs at a severity chosen at runtime.
	pub fn log(&mut self, severity: Severity, message: &str) -> &mut Self {
		self.emit(severity, message, None);
		self
	}

	pub fn log_with(&mut self, severity: Severity, message: &str, payload: impl Into<Payload>) -> &mut Self {
		self.emit(severity, message, Some(payload.into()));
		self
	}

	// ──────────────────────────────────────────────────────────────────────────
	// Stopwatch
	// ──────────────────────────────────────────────────────────────────────────

	/// Re-arms the stopwatch and turns the elapsed prefix on, or off when the
	/// message is "off" in any case. Prints the message only when turning on.
	pub fn timer<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
		self.arm(message.into(), None)
	}

	pub fn timer_with<'a>(&mut self, message: impl Into<Option<&'a str>>, payload: impl Into<Payload>) -> &mut Self {
		self.arm(message.into(), Some(payload.into()))
	}

	/// Prints the time since the last `timer()` call. Does not re-arm. Reports
	/// zero while the timer is off.
	pub fn elapsed(&mut self, message: &str) -> &mut Self {
		self.measure(message, None)
	}

	pub fn elapsed_with(&mut self, message: &str, payload: impl Into<Payload>) -> &mut Self {
		self.measure(message, Some(payload.into()))
	}

	fn arm(&mut self, message: Option<&str>, payload: Option<Payload>) -> &mut Self {
		let now = self.clock.now();
		self.last_timestamp = Some(now);
		self.elapsed_seconds = 0.0;
		self.timer_enabled = !message.is_some_and(|m| m.eq_ignore_ascii_case(TIMER_OFF));
		if let (true, Some(message)) = (self.timer_enabled, message) {
			self.emit_at(now, Severity::Timer, message, payload);
		}
		self
	}

	fn measure(&mut self, message: &str, payload: Option<Payload>) -> &mut Self {
		let now = self.clock.now();
		let since = *self.last_timestamp.get_or_insert(now);
		// a disarmed stopwatch reads zero
		self.elapsed_seconds = if self.timer_enabled { seconds_between(&since, &now) } else { 0.0 };
		self.emit_at(now, Severity::Timer, message, payload);
		self
	}

	// ──────────────────────────────────────────────────────────────────────────
	// State
	// ──────────────────────────────────────────────────────────────────────────

	pub fn min_level(&self) -> Severity {
		self.min_level
	}

	pub fn is_enabled(&self, severity: Severity) -> bool {
		severity >= self.min_level
	}

	/// Seconds measured by the last `elapsed()` call (0 after `timer()`).
	pub fn elapsed_seconds(&self) -> f64 {
		self.elapsed_seconds
	}

	pub fn timer_enabled(&self) -> bool {
		self.timer_enabled
	}

	pub fn last_timestamp(&self) -> Option<DateTime<Local>> {
		self.last_timestamp
	}

	/// Top of the context stack, or "".
	pub fn current_prefix(&self) -> &str {
		self.context_stack.last().map(String::as_str).unwrap_or("")
	}

	pub fn context_depth(&self) -> usize {
		self.context_stack.len()
	}

	pub fn sink(&self) -> &S {
		&self.sink
	}

	pub fn sink_mut(&mut self) -> &mut S {
		&mut self.sink
	}

	pub fn clock(&self) -> &C {
		&self.clock
	}

	// ──────────────────────────────────────────────────────────────────────────
	// Formatting
	// ──────────────────────────────────────────────────────────────────────────

	fn emit(&mut self, severity: Severity, message: &str, payload: Option<Payload>) {
		if severity < self.min_level {
			return;
		}
		let now = self.clock.now();
		self.emit_at(now, severity, message, payload);
	}

	fn emit_at(&mut self, now: DateTime<Local>, severity: Severity, message: &str, payload: Option<Payload>) {
		let mut body = String::with_capacity(message.len() + 32);
		if self.timer_enabled {
			let secs = match self.last_timestamp {
				Some(since) => seconds_between(&since, &now),
				None => 0.0,
			};
			body.push_str(&format!("({:.3}s) ", secs));
		}
		let prefix = self.current_prefix();
		if !prefix.is_empty() {
			body.push_str(prefix);
			body.push(' ');
		}
		body.push_str(message);

		self.sink.emit(Record {
			timestamp: format_timestamp(&now),
			severity,
			message: body,
			payload,
		});
	}
}
