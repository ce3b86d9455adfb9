// ══════════════════════════════════════════════════════════════════════════════
// PAYLOAD MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The optional second argument of every logging call. The logger never looks
// inside it; sinks decide how to render it next to the line.

use std::error::Error;
use std::fmt;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
	/// Free text, printed as-is.
	Text(String),
	/// Structured data, pretty-printed by console sinks.
	Value(Value),
	/// An error message and the messages of its sources, outermost first.
	Error { message: String, causes: Vec<String> },
}

impl Payload {
	/// Captures an error and its `source()` chain.
	pub fn error(err: &(dyn Error + 'static)) -> Self {
		let mut causes = Vec::new();
		let mut source = err.source();
		while let Some(cause) = source {
			causes.push(cause.to_string());
			source = cause.source();
		}
		Payload::Error { message: err.to_string(), causes }
	}
}

impl From<&str> for Payload {
	fn from(text: &str) -> Self {
		Payload::Text(text.to_string())
	}
}

impl From<String> for Payload {
	fn from(text: String) -> Self {
		Payload::Text(text)
	}
}

impl From<Value> for Payload {
	fn from(value: Value) -> Self {
		Payload::Value(value)
	}
}

impl fmt::Display for Payload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Payload::Text(text) => f.write_str(text),
			Payload::Value(value) => {
				let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
				f.write_str(&pretty)
			}
			Payload::Error { message, causes } => {
				f.write_str(message)?;
				for cause in causes {
					write!(f, "\ncaused by: {}", cause)?;
				}
				Ok(())
			}
		}
	}
}
