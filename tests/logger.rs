//! Logger behaviour through the public API: settings, leveled output, timing,
//! chaining and contexts.

use std::thread;
use std::time::Duration;

use chrono::{Local, TimeZone};
use serde_json::json;
use ticklog::{LoggerInstance, ManualClock, MemorySink, Payload, Severity};

// ============================================================================
// Test Utilities
// ============================================================================

type TestLogger = LoggerInstance<MemorySink, ManualClock>;

fn manual_logger() -> TestLogger {
	let start = Local.with_ymd_and_hms(2025, 11, 30, 23, 59, 59).single().unwrap();
	LoggerInstance::with_parts(MemorySink::new(), ManualClock::new(start))
}

fn messages(log: &TestLogger) -> Vec<String> {
	log.sink().records().iter().map(|r| r.message.clone()).collect()
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn default_level_is_info() {
	let mut log = manual_logger();
	log.debug("This debug message must NOT be visible");
	assert_eq!(log.min_level(), Severity::Info);
	assert!(log.sink().is_empty());
}

#[test]
fn change_level_to_debug() {
	let mut log = manual_logger();
	log.level(Severity::Debug).debug("x");
	assert_eq!(log.min_level(), Severity::Debug);
	let last = log.sink().lines().pop().unwrap();
	assert!(last.contains("DBG"));
	assert!(last.ends_with(" x"));
}

#[test]
fn level_announcement_is_hidden_when_stricter_than_info() {
	let mut log = manual_logger();
	log.level(Severity::Error);
	assert!(log.sink().is_empty());
	log.level(Severity::Debug);
	assert_eq!(messages(&log), ["Logger level set to 'DBG'"]);
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn exactly_one_line_per_visible_call() {
	for min in Severity::FILTERABLE {
		let mut log = manual_logger();
		log.level(min);
		log.sink_mut().clear();

		log.debug("d").info("i").warn("w").error("e").fatal("f");
		let expected = Severity::FILTERABLE.iter().filter(|s| **s >= min).count();
		assert_eq!(log.sink().len(), expected, "min level {:?}", min);
		assert!(log.sink().records().iter().all(|r| r.severity >= min));
	}
}

#[test]
fn lines_carry_local_timestamp_and_code() {
	let mut log = manual_logger();
	log.clock().advance_millis(7);
	log.warn("careful");
	assert_eq!(log.sink().lines(), ["2025-11-30 23:59:59.007 WRN careful"]);
}

#[test]
fn structured_payload_rides_alongside() {
	let mut log = manual_logger();
	log.debug_with("hidden", json!({ "x": 1 }))
		.info_with("obj=", json!({ "name": "example-object", "props": [] }));
	let record = log.sink().last().unwrap();
	assert_eq!(log.sink().len(), 1);
	assert_eq!(record.message, "obj=");
	assert_eq!(record.payload, Some(Payload::Value(json!({ "name": "example-object", "props": [] }))));
}

#[test]
fn error_payload_keeps_the_message() {
	let mut log = manual_logger();
	let err = std::io::Error::other("A really ugly error");
	log.fatal_with("FATAL message with error object=", Payload::error(&err));
	let rendered = log.sink().last().unwrap().render_plain();
	assert!(rendered.ends_with("FTL FATAL message with error object= A really ugly error"));
}

// ============================================================================
// Timing
// ============================================================================

#[test]
fn elapsed_right_after_timer_is_near_zero() {
	let mut log = LoggerInstance::with_sink(MemorySink::new());
	log.timer("Timer to zero").elapsed("No time elapsed");
	assert!(log.elapsed_seconds() < 0.01);
}

#[test]
fn elapsed_after_a_real_delay() {
	let mut log = LoggerInstance::with_sink(MemorySink::new());
	log.timer("Timer to zero");
	thread::sleep(Duration::from_millis(1000));
	log.elapsed("Delayed for 1000ms");
	assert!(log.elapsed_seconds() >= 1.0);
}

#[test]
fn elapsed_reads_zero_after_a_real_delay_with_timer_off() {
	let mut log = LoggerInstance::with_sink(MemorySink::new());
	log.timer("Enabled").timer("off");
	thread::sleep(Duration::from_millis(300));
	log.elapsed("Delayed for 300ms");
	assert!(log.elapsed_seconds() <= 0.0);
}

#[test]
fn timer_lines_show_even_at_fatal() {
	let mut log = manual_logger();
	log.level(Severity::Fatal).timer("armed").error("hidden").elapsed("measured");
	let severities: Vec<Severity> = log.sink().records().iter().map(|r| r.severity).collect();
	assert_eq!(severities, [Severity::Timer, Severity::Timer]);
}

#[test]
fn timer_on_then_off() {
	let mut log = manual_logger();
	log.timer("Enabled").info("Timer was enabled");
	log.clock().advance_millis(1000);
	log.elapsed("Delayed for 1000ms");
	assert!(log.elapsed_seconds() >= 1.0);

	log.timer("Off").info("Timer was disabled");
	log.clock().advance_millis(1000);
	log.elapsed("Delayed for 1000ms");
	assert_eq!(log.elapsed_seconds(), 0.0);

	assert_eq!(
		messages(&log),
		[
			"(0.000s) Enabled",
			"(0.000s) Timer was enabled",
			"(1.000s) Delayed for 1000ms",
			"Timer was disabled",
			"Delayed for 1000ms",
		]
	);
}

// ============================================================================
// Chaining
// ============================================================================

#[test]
fn chained_calls_return_the_same_instance() {
	let mut log = manual_logger();
	let start: *const TestLogger = &log;
	let end: *const TestLogger = log
		.level(Severity::Info)
		.context("[logger test chaining]")
		.timer("Timer reset")
		.info("Some INFO message here")
		.debug_with("Some debug obj", json!({ "delayed": null }))
		.warn("Be careful with long delays !!!")
		.info("End of the chain !")
		.elapsed("Took some time");
	assert!(std::ptr::eq(start, end));
	assert_eq!(log.sink().len(), 5);
}

// ============================================================================
// Context
// ============================================================================

#[test]
fn context_push_and_pop() {
	let mut log = manual_logger();
	log.context("[A]").info("msg").context(None).info("msg2");
	assert_eq!(messages(&log), ["[A] msg", "msg2"]);
}

#[test]
fn nested_contexts_unwind_in_order() {
	let mut log = manual_logger();
	let labels = ["[one]", "[two]", "[three]"];
	for label in labels {
		log.context(label);
	}
	for expected in ["[two]", "[one]", ""] {
		log.context(None);
		assert_eq!(log.current_prefix(), expected);
	}
	log.context(None).context(None);
	assert_eq!(log.current_prefix(), "");
	assert_eq!(log.context_depth(), 0);
}

#[test]
fn context_and_timer_compose() {
	let mut log = manual_logger();
	log.level(Severity::Debug);
	log.sink_mut().clear();
	log.context("[context 1]").timer("Timer reset");
	log.clock().advance_millis(1000);
	log.context("[context 2]").debug("delayed").context(None).elapsed("done");
	assert_eq!(
		messages(&log),
		["(0.000s) [context 1] Timer reset", "(1.000s) [context 2] delayed", "(1.000s) [context 1] done"]
	);
}
