use std::{fs, path::Path};

use super::prerequisites;
use crate::{
	error::{Error, Result},
	project::Project,
	toolchain::Toolchain,
};

const COMPILER_VAR: &str = "JAVAC";
const RUNNER_VAR: &str = "JAVA";
const FLAGS_VAR: &str = "JFLAGS";

struct MakeVariable {
	name: &'static str,
	value: String,
}

impl MakeVariable {
	fn as_string(&self) -> String {
		format!("{}={}\n", self.name, self.value)
	}
}

#[derive(Default)]
struct MakeRule {
	target: String,
	prerequisites: Vec<String>,
	recipe: Vec<String>,
	/// Write the space after `:` even when there are no prerequisites.
	open_list: bool,
}

impl MakeRule {
	fn as_string(&self) -> String {
		let mut ret = self.target.clone() + ":";
		if self.open_list || !self.prerequisites.is_empty() {
			ret += " ";
			ret += &self.prerequisites.join(" ");
		}
		ret += "\n";
		for line in &self.recipe {
			ret += "\t";
			ret += line;
			ret += "\n";
		}
		ret
	}
}

fn variables(toolchain: &Toolchain) -> Vec<MakeVariable> {
	vec![
		MakeVariable { name: COMPILER_VAR, value: toolchain.compiler.clone() },
		MakeVariable { name: RUNNER_VAR, value: toolchain.runner.clone() },
		MakeVariable { name: FLAGS_VAR, value: toolchain.flags.clone() },
	]
}

fn compile_pattern(toolchain: &Toolchain) -> MakeRule {
	let mut command = vec![format!("$({})", COMPILER_VAR)];
	if !toolchain.classpath.is_empty() {
		command.extend(vec!["-cp".to_owned(), toolchain.classpath.clone()]);
	}
	command.extend(vec![format!("$({})", FLAGS_VAR), "$<".to_owned()]);
	MakeRule {
		target: format!("%{}", toolchain.artifact_ext),
		prerequisites: vec![format!("%{}", toolchain.source_ext)],
		recipe: vec![command.join(" ")],
		..Default::default()
	}
}

fn clean(toolchain: &Toolchain) -> MakeRule {
	let ext = &toolchain.artifact_ext;
	MakeRule { target: "clean".to_owned(), recipe: vec![format!("rm -f **/*{} *{}", ext, ext)], ..Default::default() }
}

pub struct Makefile {}

impl Makefile {
	/// Renders the Makefile for `project`. Rendering never fails and is deterministic for a given
	/// project and toolchain.
	pub fn generate(project: &Project, toolchain: &Toolchain) -> String {
		let mut ret = format!("# Auto-generated Makefile for {}\n", project.display_name());
		for var in variables(toolchain) {
			ret += &var.as_string();
		}

		let mut rules = Vec::with_capacity(project.targets.len() + 3);
		rules.push(MakeRule {
			target: "all".to_owned(),
			prerequisites: project.executables().into_iter().map(String::from).collect(),
			..Default::default()
		});
		for (name, target) in &project.targets {
			rules.push(MakeRule {
				target: name.to_owned(),
				// Compilation happens in the pattern rule, so target rules have no recipe.
				prerequisites: prerequisites(project, target, toolchain),
				open_list: true,
				..Default::default()
			});
		}
		rules.push(compile_pattern(toolchain));
		rules.push(clean(toolchain));

		for rule in rules {
			ret += "\n";
			ret += &rule.as_string();
		}
		ret
	}

	/// Renders the Makefile and writes it to `output_path`, replacing any existing file.
	pub fn write(project: &Project, toolchain: &Toolchain, output_path: &Path) -> Result<()> {
		let contents = Makefile::generate(project, toolchain);
		if let Err(e) = fs::write(output_path, contents) {
			return Err(Error::file_access(output_path, e));
		}
		log::info!("Wrote {}", output_path.display());
		Ok(())
	}
}
