// ══════════════════════════════════════════════════════════════════════════════
// CLOCK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Time source for the logger. Both the line timestamp and the stopwatch read the
// same local wall clock, so a settable clock can stand in for it when the timer
// arithmetic needs to be checked without sleeping.

use std::cell::Cell;
use chrono::{DateTime, Local, TimeDelta};
use crate::constants::TIMESTAMP_FORMAT;

/// Supplies the current local date-time.
pub trait Clock {
	fn now(&self) -> DateTime<Local>;
}

/// Reads the process's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> DateTime<Local> {
		Local::now()
	}
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
	current: Cell<DateTime<Local>>,
}

impl ManualClock {
	pub fn new(start: DateTime<Local>) -> Self {
		Self { current: Cell::new(start) }
	}

	pub fn advance(&self, delta: TimeDelta) {
		self.current.set(self.current.get() + delta);
	}

	pub fn advance_millis(&self, millis: i64) {
		self.advance(TimeDelta::milliseconds(millis));
	}

	pub fn set(&self, at: DateTime<Local>) {
		self.current.set(at);
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new(Local::now())
	}
}

impl Clock for ManualClock {
	fn now(&self) -> DateTime<Local> {
		self.current.get()
	}
}

impl<C: Clock + ?Sized> Clock for &C {
	fn now(&self) -> DateTime<Local> {
		(**self).now()
	}
}

/// Formats as `YYYY-MM-DD HH:MM:SS.mmm`.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
	at.format(TIMESTAMP_FORMAT).to_string()
}

/// Fractional seconds from `since` to `until`, clamped at zero.
pub fn seconds_between(since: &DateTime<Local>, until: &DateTime<Local>) -> f64 {
	let delta = until.signed_duration_since(*since);
	let micros = delta.num_microseconds().unwrap_or(i64::MAX);
	(micros.max(0) as f64) / 1_000_000.0
}
