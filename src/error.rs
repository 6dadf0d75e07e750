use std::{
	io, //
	path::PathBuf,
};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a run. Everything else the parser runs into is logged and skipped.
#[derive(Error, Debug)]
pub enum Error {
	/// The project description or toolchain file could not be read, or the Makefile could not be
	/// written.
	#[error("Error accessing \"{}\": {source}", path.display())]
	FileAccess {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Error reading toolchain file \"{}\": {source}", path.display())]
	Toolchain {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid toolchain file \"{}\": {reason}", path.display())]
	InvalidToolchain { path: PathBuf, reason: String },
}

impl Error {
	pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Error::FileAccess { path: path.into(), source }
	}
}
