use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
	Library,
	Executable,
}

impl fmt::Display for TargetKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TargetKind::Library => write!(f, "Library"),
			TargetKind::Executable => write!(f, "Executable"),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
	pub kind: TargetKind,
	/// Resolved source paths, in the order their patterns were given.
	pub sources: Vec<String>,
	/// Names of linked targets. Never deduplicated; names that don't resolve are ignored later.
	pub dependencies: Vec<String>,
}

impl fmt::Display for Target {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			r#"{}{{
   sources: [{}],
   dependencies: [{}],
}}"#,
			self.kind,
			self.sources.join(", "),
			self.dependencies.join(", "),
		)
	}
}

impl Target {
	pub fn new(kind: TargetKind, sources: Vec<String>) -> Self {
		Target { kind, sources, dependencies: Vec::new() }
	}

	pub fn is_executable(&self) -> bool {
		self.kind == TargetKind::Executable
	}
}
