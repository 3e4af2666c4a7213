use rand::Rng;

use crate::error::NameGenError;

use super::corpus::Corpus;
use super::formatter::{FormatMode, format_name};

/// Which first-name pool to draw from.
///
/// `Any` flips a fair coin for every generated name, so a single run
/// mixes male and female first names 50/50 per name, not per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirstNamePool {
	Male,
	Female,
	#[default]
	Any,
}

/// Which parts a composed name carries.
///
/// At least one part is always present; an empty composed name is not
/// representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameParts {
	/// First name only, surname suppressed.
	FirstOnly,
	/// Surname only, first name suppressed.
	SurnameOnly,
	/// First name and surname, joined by a single space.
	#[default]
	Full,
}

/// Immutable per-invocation generation options.
///
/// Built once from parsed arguments and passed into the composer; no
/// mutable global state is involved.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerationOptions {
	pub pool: FirstNamePool,
	pub parts: NameParts,
	pub mode: FormatMode,
}

/// High-level composer producing formatted names from the three corpora.
///
/// # Responsibilities
/// - Choose the first-name pool per name (fair coin when `Any`)
/// - Select one entry per requested part and apply the format mode
/// - Join the parts present with a single space
///
/// # Notes
/// - Draws are independent, with replacement, no cross-name memory
/// - Any corpus failure aborts the run; no default name is substituted
#[derive(Debug)]
pub struct Composer {
	first_male: Corpus,
	first_female: Corpus,
	surnames: Corpus,
	options: GenerationOptions,
}

impl Composer {
	/// Creates a composer over the three opened corpora.
	///
	/// All three handles are taken even when the options only exercise a
	/// subset, so a missing corpus file fails the invocation up front.
	pub fn new(
		first_male: Corpus,
		first_female: Corpus,
		surnames: Corpus,
		options: GenerationOptions,
	) -> Self {
		Self { first_male, first_female, surnames, options }
	}

	/// Composes one name according to the options.
	///
	/// Line terminators are left to the output sink; the returned string
	/// never carries trailing whitespace.
	///
	/// # Errors
	/// Propagates any selection failure from a required corpus.
	pub fn compose(&mut self) -> Result<String, NameGenError> {
		let mut name = String::new();

		if self.options.parts != NameParts::SurnameOnly {
			let pool = match self.options.pool {
				FirstNamePool::Male => &mut self.first_male,
				FirstNamePool::Female => &mut self.first_female,
				FirstNamePool::Any => {
					if rand::rng().random_bool(0.5) {
						&mut self.first_male
					} else {
						&mut self.first_female
					}
				}
			};
			name.push_str(&format_name(&pool.pick()?, self.options.mode));
		}

		if self.options.parts != NameParts::FirstOnly {
			let surname = format_name(&self.surnames.pick()?, self.options.mode);
			if !name.is_empty() {
				name.push(' ');
			}
			name.push_str(&surname);
		}

		Ok(name)
	}

	/// Generates exactly `count` composed names.
	///
	/// `count == 0` yields an empty vector, not an error.
	pub fn generate(&mut self, count: usize) -> Result<Vec<String>, NameGenError> {
		(0..count).map(|_| self.compose()).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	struct Fixture {
		// Corpus handles stay valid as long as the backing files live
		_files: Vec<NamedTempFile>,
		composer: Composer,
	}

	fn fixture(male: &[&str], female: &[&str], surnames: &[&str], options: GenerationOptions) -> Fixture {
		let mut files = Vec::new();
		let mut corpora = Vec::new();
		for lines in [male, female, surnames] {
			let mut file = NamedTempFile::new().unwrap();
			for line in lines {
				writeln!(file, "{line}").unwrap();
			}
			file.flush().unwrap();
			corpora.push(Corpus::open(file.path()).unwrap());
			files.push(file);
		}

		let surnames = corpora.pop().unwrap();
		let female = corpora.pop().unwrap();
		let male = corpora.pop().unwrap();
		Fixture {
			_files: files,
			composer: Composer::new(male, female, surnames, options),
		}
	}

	#[test]
	fn male_only_first_names_without_surnames() {
		let options = GenerationOptions {
			pool: FirstNamePool::Male,
			parts: NameParts::FirstOnly,
			..GenerationOptions::default()
		};
		let mut fx = fixture(&["john", "paul"], &["mary"], &["smith", "jones"], options);

		let names = fx.composer.generate(2).unwrap();
		assert_eq!(names.len(), 2);
		for name in names {
			assert!(name == "John" || name == "Paul", "unexpected name: {name}");
		}
	}

	#[test]
	fn uppercase_surnames_preserve_apostrophes() {
		let options = GenerationOptions {
			parts: NameParts::SurnameOnly,
			mode: FormatMode::Upper,
			..GenerationOptions::default()
		};
		let mut fx = fixture(&["john"], &["mary"], &["o'brien"], options);

		assert_eq!(fx.composer.compose().unwrap(), "O'BRIEN");
	}

	#[test]
	fn full_names_are_one_space_separated_pair() {
		let mut fx = fixture(
			&["JOHN"],
			&["mArY"],
			&["sMiTh"],
			GenerationOptions::default(),
		);

		for _ in 0..20 {
			let name = fx.composer.compose().unwrap();
			assert!(name == "John Smith" || name == "Mary Smith", "unexpected name: {name}");
		}
	}

	#[test]
	fn zero_count_yields_no_names() {
		let mut fx = fixture(&["john"], &["mary"], &["smith"], GenerationOptions::default());
		assert!(fx.composer.generate(0).unwrap().is_empty());
	}

	#[test]
	fn generate_produces_exactly_count_names() {
		let mut fx = fixture(&["john"], &["mary"], &["smith"], GenerationOptions::default());
		for count in [1, 2, 17] {
			assert_eq!(fx.composer.generate(count).unwrap().len(), count);
		}
	}

	#[test]
	fn any_pool_draws_from_both_corpora() {
		let options = GenerationOptions {
			parts: NameParts::FirstOnly,
			..GenerationOptions::default()
		};
		let mut fx = fixture(&["john"], &["mary"], &["smith"], options);

		let names = fx.composer.generate(200).unwrap();
		assert!(names.iter().any(|n| n == "John"));
		assert!(names.iter().any(|n| n == "Mary"));
	}

	#[test]
	fn empty_required_corpus_aborts_the_run() {
		let options = GenerationOptions {
			parts: NameParts::SurnameOnly,
			..GenerationOptions::default()
		};
		let mut fx = fixture(&["john"], &["mary"], &[], options);

		let err = fx.composer.compose().unwrap_err();
		assert!(matches!(err, NameGenError::EmptyCorpus { .. }));
	}

	#[test]
	fn unused_empty_corpus_does_not_fail_first_only_runs() {
		let options = GenerationOptions {
			pool: FirstNamePool::Female,
			parts: NameParts::FirstOnly,
			..GenerationOptions::default()
		};
		let mut fx = fixture(&[], &["mary"], &[], options);

		assert_eq!(fx.composer.compose().unwrap(), "Mary");
	}
}
