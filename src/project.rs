use crate::target_map::TargetMap;

pub const UNNAMED_PROJECT: &str = "UnnamedProject";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Project {
	pub name: Option<String>,
	pub language: Vec<String>,
	pub targets: TargetMap,
}

impl Project {
	pub fn new() -> Self {
		Project::default()
	}

	/// The declared name, or `UnnamedProject` when it was never set or is blank.
	pub fn display_name(&self) -> &str {
		match &self.name {
			Some(name) if !name.is_empty() => name.as_str(),
			_ => UNNAMED_PROJECT,
		}
	}

	/// Names of executable targets in declaration order.
	pub fn executables(&self) -> Vec<&str> {
		self.targets
			.iter()
			.filter(|(_, target)| target.is_executable())
			.map(|(name, _)| name)
			.collect()
	}
}
