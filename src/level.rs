// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Severity scale used for filtering and for the code printed on every line.
// TIMER sits above FATAL so stopwatch lines always pass the filter, but it can
// never become the configured minimum.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use crate::constants::{SEVERITY_CODES, UNKNOWN_CODE};

/// Ordered log severities.
///
/// Raw numbers only become a `Severity` through `TryFrom<u8>`, which rejects
/// anything outside 1..=6, so every record a sink receives has a known code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
	Debug = 1,
	#[default]
	Info = 2,
	Warn = 3,
	Error = 4,
	Fatal = 5,
	/// Stopwatch lines. Displays over every level.
	Timer = 6,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSeverityError {
	#[error("unknown severity '{0}' (expected debug, info, warn, error, fatal or timer)")]
	UnknownName(String),
	#[error("severity value {0} is out of range (1..=6)")]
	OutOfRange(u8),
}

impl Severity {
	/// The five severities `level()` accepts, lowest first.
	pub const FILTERABLE: [Severity; 5] = [
		Severity::Debug,
		Severity::Info,
		Severity::Warn,
		Severity::Error,
		Severity::Fatal,
	];

	pub fn code(self) -> &'static str {
		Self::code_of(self as u8)
	}

	fn code_of(value: u8) -> &'static str {
		SEVERITY_CODES.get(value as usize).copied().unwrap_or(UNKNOWN_CODE)
	}

	/// Whether this severity may be used as a minimum level.
	pub fn is_filterable(self) -> bool {
		self != Severity::Timer
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl TryFrom<u8> for Severity {
	type Error = ParseSeverityError;

	fn try_from(value: u8) -> Result<Self, ParseSeverityError> {
		match value {
			1 => Ok(Severity::Debug),
			2 => Ok(Severity::Info),
			3 => Ok(Severity::Warn),
			4 => Ok(Severity::Error),
			5 => Ok(Severity::Fatal),
			6 => Ok(Severity::Timer),
			other => Err(ParseSeverityError::OutOfRange(other)),
		}
	}
}

/// Accepts full names, three-letter codes or the numeric value.
impl FromStr for Severity {
	type Err = ParseSeverityError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim();
		if let Ok(n) = name.parse::<u8>() {
			return Severity::try_from(n);
		}
		match name.to_ascii_lowercase().as_str() {
			"debug" | "dbg" => Ok(Severity::Debug),
			"info" | "inf" => Ok(Severity::Info),
			"warn" | "warning" | "wrn" => Ok(Severity::Warn),
			"error" | "err" => Ok(Severity::Error),
			"fatal" | "ftl" => Ok(Severity::Fatal),
			"timer" | "dts" => Ok(Severity::Timer),
			_ => Err(ParseSeverityError::UnknownName(s.to_string())),
		}
	}
}
