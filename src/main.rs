// ══════════════════════════════════════════════════════════════════════════════
// TICKLOG CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Command-line front end for the logger.
// - pipe: stamps every stdin line with time, severity and context
// - demo: prints one of everything the logger can do

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::json;
use ticklog::{ConsoleSink, LoggerInstance, Payload, Severity};

/// Timestamped, leveled console logging
#[derive(Parser)]
#[command(name = "ticklog")]
#[command(version)]
#[command(about = "Leveled console logging with a stopwatch", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Args)]
struct Output {
	/// Minimum level to display (debug, info, warn, error, fatal)
	#[arg(short, long, default_value = "info")]
	level: Severity,

	/// Disable colors
	#[arg(long)]
	plain: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Log every line read from stdin
	Pipe {
		#[command(flatten)]
		output: Output,

		/// Severity given to each input line
		#[arg(short, long, default_value = "info")]
		severity: Severity,

		/// Context label; repeat to nest
		#[arg(short, long)]
		context: Vec<String>,

		/// Prefix lines with the time since start and report the total at the end
		#[arg(short, long)]
		timer: bool,
	},

	/// Show every logger feature
	Demo {
		#[command(flatten)]
		output: Output,
	},
}

fn console(output: &Output) -> LoggerInstance {
	let sink = if output.plain { ConsoleSink::plain() } else { ConsoleSink::new() };
	LoggerInstance::with_sink(sink)
}

fn configure(log: &mut LoggerInstance, output: &Output) -> Result<(), String> {
	if !output.level.is_filterable() {
		return Err(format!("'{}' cannot be used as a minimum level", output.level));
	}
	log.level(output.level);
	Ok(())
}

fn pipe(log: &mut LoggerInstance, severity: Severity, contexts: &[String], timer: bool) -> Result<(), String> {
	for label in contexts {
		log.context(label.as_str());
	}
	if timer {
		log.timer(None);
	}

	let mut count = 0usize;
	for line in io::stdin().lock().lines() {
		let line = line.map_err(|e| format!("Failed to read stdin: {}", e))?;
		log.log(severity, &line);
		count += 1;
	}

	if timer {
		log.elapsed(&format!("{} line(s)", count));
	}
	Ok(())
}

fn demo(log: &mut LoggerInstance) -> Result<(), String> {
	log.debug("Shown only with --level debug")
		.info("Plain INFO line")
		.info_with("INFO with an object", json!({ "name": "example-object", "props": [] }))
		.warn("Careful now");

	let err = io::Error::new(io::ErrorKind::NotFound, "settings.toml not found");
	log.error_with("ERROR with an error payload", Payload::error(&err));

	log.context("[demo]")
		.timer("Timer armed")
		.info("Lines now carry the elapsed time");
	thread::sleep(Duration::from_millis(250));
	log.context("[demo nested]")
		.warn("Nested context")
		.context(None)
		.elapsed("Slept 250ms");

	log.timer("off")
		.context(None)
		.fatal("Timer off, context cleared");
	Ok(())
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	let output = match &cli.command {
		Commands::Pipe { output, .. } | Commands::Demo { output } => output,
	};
	let mut log = console(output);

	let result = configure(&mut log, output).and_then(|()| match &cli.command {
		Commands::Pipe { severity, context, timer, .. } => pipe(&mut log, *severity, context, *timer),
		Commands::Demo { .. } => demo(&mut log),
	});

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			// FATAL passes every minimum level
			log.fatal(&e);
			ExitCode::FAILURE
		}
	}
}
