use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainFile {
	compiler: Option<String>,
	runner: Option<String>,
	flags: Option<String>,
	classpath: Option<String>,
	source_ext: Option<String>,
	artifact_ext: Option<String>,
}

/// Commands and file suffixes written into the generated Makefile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toolchain {
	pub compiler: String,
	pub runner: String,
	pub flags: String,
	pub classpath: String,
	/// Suffix of source files, including the leading dot.
	pub source_ext: String,
	/// Suffix of compiled artifacts, including the leading dot.
	pub artifact_ext: String,
}

impl Default for Toolchain {
	fn default() -> Self {
		Toolchain {
			compiler: "javac".to_owned(),
			runner: "java".to_owned(),
			flags: String::new(),
			classpath: "src".to_owned(),
			source_ext: ".java".to_owned(),
			artifact_ext: ".class".to_owned(),
		}
	}
}

impl Toolchain {
	/// Maps a source path to the artifact it compiles to. Paths without the source suffix are
	/// passed through unchanged.
	pub fn artifact_for(&self, source: &str) -> String {
		if self.source_ext.is_empty() {
			return source.to_owned();
		}
		match source.strip_suffix(self.source_ext.as_str()) {
			Some(stem) => stem.to_owned() + &self.artifact_ext,
			None => source.to_owned(),
		}
	}
}

impl From<ToolchainFile> for Toolchain {
	fn from(file: ToolchainFile) -> Self {
		let defaults = Toolchain::default();
		Toolchain {
			compiler: file.compiler.unwrap_or(defaults.compiler),
			runner: file.runner.unwrap_or(defaults.runner),
			flags: file.flags.unwrap_or(defaults.flags),
			classpath: file.classpath.unwrap_or(defaults.classpath),
			source_ext: file.source_ext.unwrap_or(defaults.source_ext),
			artifact_ext: file.artifact_ext.unwrap_or(defaults.artifact_ext),
		}
	}
}

pub fn parse_toolchain(toolchain_toml: &str, toolchain_path: &Path) -> Result<Toolchain> {
	let toolchain_file = match toml::from_str::<ToolchainFile>(toolchain_toml) {
		Ok(x) => x,
		Err(e) => return Err(Error::Toolchain { path: toolchain_path.to_owned(), source: e }),
	};
	let toolchain = Toolchain::from(toolchain_file);

	// Sanity checks
	for (key, ext) in [("source_ext", &toolchain.source_ext), ("artifact_ext", &toolchain.artifact_ext)] {
		if ext.is_empty() {
			return Err(Error::InvalidToolchain {
				path: toolchain_path.to_owned(),
				reason: format!("{} must not be empty", key),
			});
		}
	}
	if !toolchain.source_ext.starts_with('.') {
		log::warn!("source_ext \"{}\" has no leading '.'", toolchain.source_ext);
	}
	if !toolchain.artifact_ext.starts_with('.') {
		log::warn!("artifact_ext \"{}\" has no leading '.'", toolchain.artifact_ext);
	}
	log::debug!("toolchain: {:?}", toolchain);

	Ok(toolchain)
}

pub fn read_toolchain(toolchain_path: &Path) -> Result<Toolchain> {
	let toolchain_toml = match fs::read_to_string(toolchain_path) {
		Ok(x) => x,
		Err(e) => return Err(Error::file_access(toolchain_path, e)),
	};
	parse_toolchain(&toolchain_toml, toolchain_path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn artifact_suffix() {
		let toolchain = Toolchain::default();
		assert_eq!(toolchain.artifact_for("app/Main.java"), "app/Main.class");
		assert_eq!(toolchain.artifact_for("com.javax/A.java"), "com.javax/A.class");
		assert_eq!(toolchain.artifact_for("README.md"), "README.md");
	}

	#[test]
	fn partial_file_keeps_defaults() {
		let toolchain = parse_toolchain("compiler = \"ecj\"\nflags = \"-g\"\n", Path::new("t.toml")).unwrap();
		assert_eq!(toolchain.compiler, "ecj");
		assert_eq!(toolchain.flags, "-g");
		assert_eq!(toolchain.runner, "java");
		assert_eq!(toolchain.source_ext, ".java");
	}

	#[test]
	fn empty_file_is_default() {
		assert_eq!(parse_toolchain("", Path::new("t.toml")).unwrap(), Toolchain::default());
	}

	#[test]
	fn empty_suffix_rejected() {
		let err = parse_toolchain("source_ext = \"\"", Path::new("t.toml")).unwrap_err();
		assert!(matches!(err, Error::InvalidToolchain { .. }));
		assert!(err.to_string().contains("source_ext must not be empty"));
		let err = parse_toolchain("artifact_ext = \"\"", Path::new("t.toml")).unwrap_err();
		assert!(err.to_string().contains("artifact_ext must not be empty"));

		let toolchain = Toolchain { source_ext: String::new(), ..Toolchain::default() };
		assert_eq!(toolchain.artifact_for("Main.java"), "Main.java");
	}

	#[test]
	fn bad_file() {
		let err = parse_toolchain("compilr = \"ecj\"", Path::new("t.toml")).unwrap_err();
		assert!(matches!(err, Error::Toolchain { .. }));
		assert!(parse_toolchain("compiler = 3", Path::new("t.toml")).is_err());
	}
}
