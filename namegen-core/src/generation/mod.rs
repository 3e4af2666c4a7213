//! Top-level module for the name generation system.
//!
//! This module provides the full selection and composition pipeline:
//! - Line-delimited corpora with uniform random selection (`Corpus`)
//! - Pure case formatting (`FormatMode`, `format_name`)
//! - High-level name composition (`Composer`)

/// Line-delimited name corpus.
///
/// Counts entries with a buffered scan and selects single entries
/// uniformly at random without loading the file into memory.
pub mod corpus;

/// Case formatting for selected entries.
///
/// Pure functions only, no locale state.
pub mod formatter;

/// High-level composition of first names and surnames.
///
/// Owns the three corpora and the immutable generation options,
/// and produces composed names one at a time.
pub mod composer;
