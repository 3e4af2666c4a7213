use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::NameGenError;

/// Male first-name corpus file name inside the data directory.
pub const FILE_FIRST_MALE: &str = "firstnames_male.txt";

/// Female first-name corpus file name inside the data directory.
pub const FILE_FIRST_FEMALE: &str = "firstnames_female.txt";

/// Surname corpus file name inside the data directory.
pub const FILE_SURNAMES: &str = "surnames.txt";

/// Environment variable overriding the data directory lookup.
pub const DATA_DIR_ENV: &str = "NAMEGEN_DATA";

/// Candidate data directories, probed in order.
const DATA_DIRS: [&str; 3] = [
	"/usr/share/namegen/data",
	"/usr/local/share/namegen/data",
	"/opt/namegen/data",
];

/// Resolves the directory holding the three corpus files.
///
/// Probes `$NAMEGEN_DATA` first, then a short ordered list of standard
/// locations. The first readable directory wins.
///
/// # Errors
/// Returns `DataDirNotFound` naming the probed candidates if none of
/// them is a readable directory.
pub fn find_data_dir() -> Result<PathBuf, NameGenError> {
	if let Ok(dir) = env::var(DATA_DIR_ENV) {
		let path = PathBuf::from(&dir);
		if path.is_dir() {
			return Ok(path);
		}
		debug!("{DATA_DIR_ENV}={dir} is not a readable directory, falling back");
	}

	for dir in DATA_DIRS {
		let path = Path::new(dir);
		if path.is_dir() {
			return Ok(path.to_path_buf());
		}
	}

	Err(NameGenError::DataDirNotFound {
		tried: DATA_DIRS.join(", "),
	})
}
