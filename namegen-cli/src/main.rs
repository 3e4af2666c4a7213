use std::io::{BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use log::debug;

use namegen_core::generation::composer::{Composer, FirstNamePool, GenerationOptions, NameParts};
use namegen_core::generation::corpus::Corpus;
use namegen_core::generation::formatter::FormatMode;
use namegen_core::io::{FILE_FIRST_FEMALE, FILE_FIRST_MALE, FILE_SURNAMES, find_data_dir};

// -V prints the version and the author line, as the installed tool does
const VERSION_WITH_AUTHOR: &str =
	concat!(env!("CARGO_PKG_VERSION"), "\n", env!("CARGO_PKG_AUTHORS"));

const EXAMPLES: &str = "Examples:
  namegen              Generate one random name, either male or female
  namegen -f -n10      Print ten female names
  namegen -umS -n 100  Print 100 male first names, all in upper-case";

/// Command-line arguments, mirroring the historical getopt surface:
/// short flags only, clustering allowed, last flag of a conflicting
/// pair wins.
#[derive(Parser, Debug)]
#[command(name = "namegen")]
#[command(version = VERSION_WITH_AUTHOR, about = "Generate pseudo-random names from bundled name lists.")]
#[command(after_help = EXAMPLES)]
struct Args {
	/// Print NUM names
	#[arg(short = 'n', value_name = "NUM", default_value_t = 1, value_parser = parse_count)]
	number: u64,

	/// Print names in all upper-case
	#[arg(short = 'u', overrides_with = "lower")]
	upper: bool,

	/// Print names in all lower-case
	#[arg(short = 'l', overrides_with = "upper")]
	lower: bool,

	/// Retrieve only male first names
	#[arg(short = 'm', overrides_with = "female")]
	male: bool,

	/// Retrieve only female first names
	#[arg(short = 'f', overrides_with = "male")]
	female: bool,

	/// Retrieve only surnames
	#[arg(short = 's', overrides_with = "no_surnames")]
	surnames_only: bool,

	/// Do not print surnames
	#[arg(short = 'S', overrides_with = "surnames_only")]
	no_surnames: bool,
}

/// `atoi`-style count parsing: the leading digit run is the count, so
/// `12abc` means 12 and fully non-numeric input means zero names.
fn parse_count(value: &str) -> Result<u64, String> {
	let digits: String = value
		.chars()
		.take_while(|c| c.is_ascii_digit())
		.collect();
	Ok(digits.parse().unwrap_or(0))
}

impl Args {
	fn options(&self) -> GenerationOptions {
		let mode = if self.upper {
			FormatMode::Upper
		} else if self.lower {
			FormatMode::Lower
		} else {
			FormatMode::Capitalized
		};

		let pool = if self.male {
			FirstNamePool::Male
		} else if self.female {
			FirstNamePool::Female
		} else {
			FirstNamePool::Any
		};

		let parts = if self.surnames_only {
			NameParts::SurnameOnly
		} else if self.no_surnames {
			NameParts::FirstOnly
		} else {
			NameParts::Full
		};

		GenerationOptions { pool, parts, mode }
	}
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
	let data_dir = find_data_dir()?;
	debug!("using data directory {}", data_dir.display());

	let mut composer = Composer::new(
		Corpus::open(data_dir.join(FILE_FIRST_MALE))?,
		Corpus::open(data_dir.join(FILE_FIRST_FEMALE))?,
		Corpus::open(data_dir.join(FILE_SURNAMES))?,
		args.options(),
	);

	let stdout = std::io::stdout().lock();
	let mut out = BufWriter::new(stdout);
	for _ in 0..args.number {
		writeln!(out, "{}", composer.compose()?)?;
	}
	out.flush()?;

	Ok(())
}

fn main() -> ExitCode {
	env_logger::init();

	// Help and version exit 0; any argument error exits 1 with usage on stderr
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
			print!("{e}");
			return ExitCode::SUCCESS;
		}
		Err(e) => {
			eprint!("{e}");
			return ExitCode::from(1);
		}
	};

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("ERROR: {e}");
			ExitCode::from(1)
		}
	}
}
