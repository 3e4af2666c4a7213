//! Pseudo-random name generation library.
//!
//! This crate provides the core of the `namegen` command-line tool:
//! - Line-delimited name corpora with cached entry counts
//! - Uniform random entry selection without loading a corpus into memory
//! - Case formatting (lower, upper, capitalized)
//! - Composition of first names and surnames into printable names
//!
//! Only the high-level API is exposed publicly. The binary crate drives
//! everything through [`generation::composer::Composer`].

/// Error types shared across the crate.
pub mod error;

/// Core corpus access, formatting and composition logic.
pub mod generation;

/// I/O utilities (data directory lookup, corpus file names).
pub mod io;
