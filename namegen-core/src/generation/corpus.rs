use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::NameGenError;

/// A line-delimited name corpus.
///
/// A `Corpus` owns a buffered read handle over a flat text file holding
/// one name per line, plus the entry count cached at open time.
///
/// # Responsibilities
/// - Count newline-terminated entries with a single buffered scan
/// - Select one entry uniformly at random, in O(n) time and O(1) memory
/// - Report failures with the offending path attached
///
/// # Invariants
/// - `entries` is the number of newline terminators counted at open time
/// - Every selection rewinds the handle before scanning, so the cursor
///   position between calls is irrelevant
#[derive(Debug)]
pub struct Corpus {
	path: PathBuf,
	reader: BufReader<File>,
	entries: usize,
}

fn unreadable(path: &Path, source: std::io::Error) -> NameGenError {
	NameGenError::CorpusUnreadable { path: path.to_path_buf(), source }
}

impl Corpus {
	/// Opens a corpus file and counts its entries.
	///
	/// # Errors
	/// Returns `CorpusUnreadable` if the file cannot be opened or an I/O
	/// error occurs while counting.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, NameGenError> {
		let path = path.as_ref().to_path_buf();
		let file = File::open(&path).map_err(|source| unreadable(&path, source))?;

		let mut corpus = Self {
			reader: BufReader::new(file),
			entries: 0,
			path,
		};
		corpus.entries = corpus.count_entries()?;
		Ok(corpus)
	}

	/// Returns the number of newline-terminated entries counted at open time.
	pub fn len(&self) -> usize {
		self.entries
	}

	/// Returns `true` if the corpus has no newline-terminated entries.
	pub fn is_empty(&self) -> bool {
		self.entries == 0
	}

	/// Returns the path this corpus was opened from.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Counts the newline terminators in the file.
	///
	/// Scans the whole file once through the buffered reader without
	/// materializing it. Leaves the cursor at end-of-file; selections
	/// rewind before scanning.
	fn count_entries(&mut self) -> Result<usize, NameGenError> {
		let Self { reader, path, .. } = self;
		reader
			.seek(SeekFrom::Start(0))
			.map_err(|source| unreadable(path, source))?;

		let mut entries = 0;
		loop {
			let (len, newlines) = {
				let buf = reader.fill_buf().map_err(|source| unreadable(path, source))?;
				if buf.is_empty() {
					break;
				}
				(buf.len(), buf.iter().filter(|b| **b == b'\n').count())
			};
			entries += newlines;
			reader.consume(len);
		}

		Ok(entries)
	}

	/// Selects one entry uniformly at random.
	///
	/// Draws a target index in `[0, len)` from the process-wide generator
	/// and delegates to [`Corpus::entry_at`]. Each call is an independent
	/// draw with replacement; the same entry may be returned repeatedly.
	///
	/// # Errors
	/// - `EmptyCorpus` if the corpus has no entries (never a modulo-by-zero)
	/// - Any error from [`Corpus::entry_at`]
	pub fn pick(&mut self) -> Result<String, NameGenError> {
		if self.entries == 0 {
			return Err(NameGenError::EmptyCorpus { path: self.path.clone() });
		}

		let target = rand::rng().random_range(0..self.entries);
		self.entry_at(target)
	}

	/// Returns the entry at `target`, with surrounding whitespace trimmed.
	///
	/// Rewinds the handle, then consumes exactly `target` newline
	/// terminators through the buffered reader before reading one record
	/// up to the next terminator or end-of-file. The final record is
	/// returned even when the file lacks a trailing terminator.
	///
	/// # Errors
	/// Returns `SelectionOutOfRange` if end-of-file is reached before the
	/// target record, meaning the cached count and the actual content
	/// disagree. Not retried: the file is static, a retry cannot help.
	pub fn entry_at(&mut self, target: usize) -> Result<String, NameGenError> {
		let Self { reader, path, entries } = self;
		let entries = *entries;

		reader
			.seek(SeekFrom::Start(0))
			.map_err(|source| unreadable(path, source))?;

		// Skip `target` record terminators without materializing the file
		let mut remaining = target;
		while remaining > 0 {
			let consumed = {
				let buf = reader.fill_buf().map_err(|source| unreadable(path, source))?;
				if buf.is_empty() {
					return Err(NameGenError::SelectionOutOfRange {
						path: path.clone(),
						target,
						entries,
					});
				}

				let mut consumed = buf.len();
				for (index, byte) in buf.iter().enumerate() {
					if *byte == b'\n' {
						remaining -= 1;
						if remaining == 0 {
							consumed = index + 1;
							break;
						}
					}
				}
				consumed
			};
			reader.consume(consumed);
		}

		let mut record = String::new();
		let read = reader
			.read_line(&mut record)
			.map_err(|source| unreadable(path, source))?;
		if read == 0 {
			return Err(NameGenError::SelectionOutOfRange {
				path: path.clone(),
				target,
				entries,
			});
		}

		Ok(record.trim().to_owned())
	}
}
