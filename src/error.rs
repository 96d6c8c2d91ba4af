use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a [`Error`], for callers that only care about
/// which family of failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The parameter file does not exist.
	NotFound,
	/// The section selector is malformed or names a section that is absent.
	Validation,
	/// The INI text, a list value or an interpolation could not be parsed.
	Parse,
	/// The file exists but could not be read.
	Io,
}

/// Errors returned while reading a parameter file.
#[derive(Debug, Error)]
pub enum Error {
	/// The parameter file path does not reference an existing file.
	#[error("could not find parameter file: {}", path.display())]
	NotFound { path: PathBuf },

	/// Reading the parameter file failed after it was found.
	#[error("failed to read parameter file {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A requested section is not present in the parameter file.
	#[error("'{name}' is not a section in the parameter file")]
	UnknownSection { name: String },

	/// A dynamically built selector was neither a string nor a list of strings.
	#[error("sections must be a string or a list of strings, found {found}")]
	InvalidSelector { found: String },

	/// The INI tokenizer rejected the file.
	#[error("malformed parameter file: {source}")]
	Ini {
		#[from]
		source: ini::ParseError,
	},

	/// A parameter was declared before any section header.
	#[error("parameter '{key}' appears before any section header")]
	MissingSectionHeader { key: String },

	/// A section header occurs more than once.
	#[error("section '{name}' is declared more than once")]
	DuplicateSection { name: String },

	/// A key occurs more than once inside one section.
	#[error("parameter '{key}' is declared more than once in section '{section}'")]
	DuplicateKey { section: String, key: String },

	/// A bracketed value could not be decoded as a JSON array.
	#[error("parameter '{key}' in section '{section}' is not a valid list: {source}")]
	InvalidList {
		section: String,
		key: String,
		#[source]
		source: serde_json::Error,
	},

	/// A `%(name)s` reference could not be expanded.
	#[error("cannot interpolate parameter '{key}' in section '{section}': {reason}")]
	Interpolation {
		section: String,
		key: String,
		reason: String,
	},
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::NotFound { .. } => ErrorKind::NotFound,
			Self::Io { .. } => ErrorKind::Io,
			Self::UnknownSection { .. } | Self::InvalidSelector { .. } => ErrorKind::Validation,
			Self::Ini { .. }
			| Self::MissingSectionHeader { .. }
			| Self::DuplicateSection { .. }
			| Self::DuplicateKey { .. }
			| Self::InvalidList { .. }
			| Self::Interpolation { .. } => ErrorKind::Parse,
		}
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
