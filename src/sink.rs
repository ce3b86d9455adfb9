// ══════════════════════════════════════════════════════════════════════════════
// SINK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Output side of the logger. The logger hands every line that passed the filter
// to a Sink as a Record; the sink owns rendering. ConsoleSink prints colored lines
// to stdout, WriterSink writes plain lines to any io::Write, and MemorySink keeps
// records around for inspection.

use std::io::Write;
use colored::*;
use crate::constants::PAYLOAD_INDENT;
use crate::level::Severity;
use crate::payload::Payload;

/// One composed log line plus its optional payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
	/// Local time, already formatted.
	pub timestamp: String,
	pub severity: Severity,
	/// Message with the elapsed and context prefixes applied.
	pub message: String,
	pub payload: Option<Payload>,
}

impl Record {
	/// `<timestamp> <code> <message>`, without the payload.
	pub fn line(&self) -> String {
		format!("{} {} {}", self.timestamp, self.severity.code(), self.message)
	}

	/// The line followed by the rendered payload, if any.
	pub fn render_plain(&self) -> String {
		match &self.payload {
			Some(payload) => format!("{}{}", self.line(), payload_suffix(payload)),
			None => self.line(),
		}
	}
}

/// Single-line payloads go after the message, others on indented lines below.
fn payload_suffix(payload: &Payload) -> String {
	let text = payload.to_string();
	if !text.contains('\n') {
		return format!(" {}", text);
	}
	let mut out = String::new();
	for line in text.lines() {
		out.push('\n');
		out.push_str(PAYLOAD_INDENT);
		out.push_str(line);
	}
	out
}

/// Receives every record that passed the level filter.
pub trait Sink {
	fn emit(&mut self, record: Record);
}

impl<S: Sink + ?Sized> Sink for Box<S> {
	fn emit(&mut self, record: Record) {
		(**self).emit(record);
	}
}

/// Prints to stdout, coloring the timestamp and severity code.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
	colors: bool,
}

impl ConsoleSink {
	pub fn new() -> Self {
		Self { colors: true }
	}

	/// Same layout, no ANSI escapes.
	pub fn plain() -> Self {
		Self { colors: false }
	}

	fn paint_code(severity: Severity) -> ColoredString {
		let code = severity.code();
		match severity {
			Severity::Debug => code.cyan().bold(),
			Severity::Info => code.blue().bold(),
			Severity::Warn => code.yellow().bold(),
			Severity::Error => code.red().bold(),
			Severity::Fatal => code.bright_red().bold(),
			Severity::Timer => code.magenta().bold(),
		}
	}
}

impl Default for ConsoleSink {
	fn default() -> Self {
		Self::new()
	}
}

impl Sink for ConsoleSink {
	fn emit(&mut self, record: Record) {
		if !self.colors {
			println!("{}", record.render_plain());
			return;
		}
		let suffix = record.payload.as_ref().map(payload_suffix).unwrap_or_default();
		println!(
			"{} {} {}{}",
			record.timestamp.dimmed(),
			Self::paint_code(record.severity),
			record.message,
			suffix
		);
	}
}

/// Writes plain lines to any writer. Write failures are dropped.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
	writer: W,
}

impl<W: Write> WriterSink<W> {
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	pub fn into_inner(self) -> W {
		self.writer
	}
}

impl<W: Write> Sink for WriterSink<W> {
	fn emit(&mut self, record: Record) {
		let _ = writeln!(self.writer, "{}", record.render_plain());
		let _ = self.writer.flush();
	}
}

/// Collects records in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
	records: Vec<Record>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	/// Plain lines, payloads excluded.
	pub fn lines(&self) -> Vec<String> {
		self.records.iter().map(Record::line).collect()
	}

	pub fn last(&self) -> Option<&Record> {
		self.records.last()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn clear(&mut self) {
		self.records.clear();
	}
}

impl Sink for MemorySink {
	fn emit(&mut self, record: Record) {
		self.records.push(record);
	}
}
