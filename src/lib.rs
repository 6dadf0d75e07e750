mod error;
pub mod generator;
pub mod parser;
pub mod project;
pub mod sources;
pub mod target;
pub mod target_map;
pub mod toolchain;

use std::path::Path;

pub use error::{Error, Result};
use project::Project;
use sources::FsGlob;

pub const JMAKE_LISTS: &str = "JMakeLists.txt";
pub const MAKEFILE: &str = "Makefile";

/// Parses the project description at `path`, expanding source patterns relative to the current
/// directory.
pub fn parse_project(path: &Path) -> Result<Project> {
	parser::parse_file(path, &FsGlob)
}
