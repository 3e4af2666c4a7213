use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while locating, reading or sampling name corpora.
///
/// Every variant is fatal for the whole invocation: the data source is a
/// set of local static files, so nothing is retried.
#[derive(Debug, Error)]
pub enum NameGenError {
	/// None of the candidate data directories is readable.
	#[error("cannot open data directory for reading (checked {tried})")]
	DataDirNotFound { tried: String },

	/// A corpus file could not be opened, or an I/O error occurred mid-scan.
	#[error("cannot read file {}: {source}", path.display())]
	CorpusUnreadable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A required corpus contains no newline-terminated entries.
	#[error("corpus {} has no entries", path.display())]
	EmptyCorpus { path: PathBuf },

	/// The counted entries disagree with the actual corpus content.
	#[error("entry {target} is out of range for corpus {} ({entries} entries counted)", path.display())]
	SelectionOutOfRange {
		path: PathBuf,
		target: usize,
		entries: usize,
	},
}
