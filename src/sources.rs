use glob::MatchOptions;

/// Expands a source pattern into the paths it matches.
pub trait SourceResolver {
	/// Returns matches in a stable order. An empty result is not an error.
	fn resolve(&self, pattern: &str) -> Vec<String>;
}

/// Resolves patterns against the file system, relative to the current directory. Wildcards don't
/// match a leading `.`, so hidden files are only found when the pattern names the dot itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsGlob;

impl SourceResolver for FsGlob {
	fn resolve(&self, pattern: &str) -> Vec<String> {
		let options = MatchOptions { require_literal_leading_dot: true, ..MatchOptions::new() };
		let paths = match glob::glob_with(pattern, options) {
			Ok(x) => x,
			Err(e) => {
				log::warn!("Invalid pattern '{}': {}", pattern, e);
				return Vec::new();
			}
		};
		let mut files = Vec::new();
		for entry in paths {
			match entry {
				Ok(path) => files.push(path.to_string_lossy().into_owned()),
				Err(e) => log::warn!("Could not read \"{}\" while matching '{}': {}", e.path().display(), pattern, e.error()),
			}
		}
		files
	}
}

/// Resolves every pattern in order and concatenates the results. Patterns that match nothing are
/// reported and contribute nothing.
pub(crate) fn expand_sources(resolver: &dyn SourceResolver, patterns: &[&str]) -> Vec<String> {
	let mut sources = Vec::new();
	for pattern in patterns {
		let files = resolver.resolve(pattern);
		if files.is_empty() {
			log::warn!("No files found matching pattern '{}'", pattern);
		}
		sources.extend(files);
	}
	sources
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn fs_glob_matches_files() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("B.java"), "").unwrap();
		fs::write(dir.path().join("A.java"), "").unwrap();
		fs::write(dir.path().join("notes.txt"), "").unwrap();

		let pattern = dir.path().join("*.java");
		let found = FsGlob.resolve(&pattern.to_string_lossy());
		assert_eq!(
			found,
			[
				dir.path().join("A.java").to_string_lossy().into_owned(),
				dir.path().join("B.java").to_string_lossy().into_owned(),
			]
		);
	}

	#[test]
	fn fs_glob_skips_hidden_files() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(".Hidden.java"), "").unwrap();
		fs::write(dir.path().join("A.java"), "").unwrap();

		let found = FsGlob.resolve(&dir.path().join("*.java").to_string_lossy());
		assert_eq!(found, [dir.path().join("A.java").to_string_lossy().into_owned()]);

		let found = FsGlob.resolve(&dir.path().join(".*.java").to_string_lossy());
		assert_eq!(found, [dir.path().join(".Hidden.java").to_string_lossy().into_owned()]);
	}

	#[test]
	fn fs_glob_no_match() {
		let dir = tempfile::tempdir().unwrap();
		let pattern = dir.path().join("missing/*.java");
		assert!(FsGlob.resolve(&pattern.to_string_lossy()).is_empty());
	}

	#[test]
	fn fs_glob_invalid_pattern() {
		assert!(FsGlob.resolve("src/[").is_empty());
	}
}
