use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use log::Level;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use mutt_index_tidy::alternates::KnownAlternates;
use mutt_index_tidy::format::{LineRewriter, Variant};

const PROG: &str = env!("CARGO_BIN_NAME");

#[derive(Parser)]
#[command(name = "mutt-index-tidy")]
#[command(
	author,
	version,
	about = "mutt index_format filter that blanks redundant sender dates and list names"
)]
struct Cli {
	/// The formatted index line produced by mutt
	#[arg(value_name = "LINE", allow_hyphen_values = true)]
	line: OsString,

	/// Only expect the sender/local date pair (no [LIST:] tag)
	#[arg(long)]
	dates_only: bool,

	/// List name to blank out; repeat to give several (replaces the built-in set)
	#[arg(long = "alternate", value_name = "NAME")]
	alternates: Vec<String>,

	/// Print informational messages on stderr
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("{PROG} (error): {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	// Usage errors exit with 1 rather than clap's default of 2.
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			e.print().context("Failed to print usage")?;
			return Ok(match e.kind() {
				ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
				_ => ExitCode::FAILURE,
			});
		}
	};

	init_logging(cli.verbose);

	// mutt hands over whatever bytes the message carried; those that are
	// not UTF-8 are echoed untouched.
	let Some(line) = cli.line.to_str() else {
		log::warn!("input line is not valid UTF-8; passing through unchanged");
		write_line(cli.line.as_encoded_bytes()).context("Failed to write to stdout")?;
		return Ok(ExitCode::SUCCESS);
	};

	let alternates = if cli.alternates.is_empty() {
		KnownAlternates::builtin()
	} else {
		KnownAlternates::new(cli.alternates).context("Invalid --alternate value")?
	};
	log::debug!(
		"alternate list names: {:?}",
		alternates.names().collect::<Vec<_>>()
	);

	let variant = if cli.dates_only {
		Variant::DatesOnly
	} else {
		Variant::WithListName
	};

	let rewriter =
		LineRewriter::new(variant, alternates).context("Failed to build index line rewriter")?;
	log::debug!("expecting {:?} index lines", rewriter.variant());

	let rewrite = rewriter
		.rewrite(line)
		.context("Failed to rewrite index line")?;
	write_line(rewrite.as_str().as_bytes()).context("Failed to write to stdout")?;

	Ok(ExitCode::SUCCESS)
}

fn write_line(line: &[u8]) -> io::Result<()> {
	let mut stdout = io::stdout().lock();
	stdout.write_all(line)?;
	stdout.write_all(b"\n")?;
	stdout.flush()
}

/// Diagnostics go to stderr as `<prog> (<level>): <message>`.
fn init_logging(verbose: bool) {
	let default_level = if verbose { "info" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
		.target(env_logger::Target::Stderr)
		.format(|buf, record| {
			writeln!(
				buf,
				"{PROG} ({}): {}",
				level_label(record.level()),
				record.args()
			)
		})
		.init();
}

fn level_label(level: Level) -> &'static str {
	match level {
		Level::Error => "error",
		Level::Warn => "warning",
		Level::Info => "info",
		Level::Debug => "debug",
		Level::Trace => "trace",
	}
}
