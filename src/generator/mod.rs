mod makefile;

pub use makefile::Makefile;

use crate::{
	project::Project, //
	target::Target,
	toolchain::Toolchain,
};

/// Artifacts compiled from the target's own sources, in source order.
pub(crate) fn own_artifacts(target: &Target, toolchain: &Toolchain) -> Vec<String> {
	target.sources.iter().map(|src| toolchain.artifact_for(src)).collect()
}

/// Own artifacts of every declared dependency, in link order. Only direct dependencies are
/// followed and nothing is deduplicated. Names that aren't declared targets are skipped.
pub(crate) fn linked_artifacts(project: &Project, target: &Target, toolchain: &Toolchain) -> Vec<String> {
	let mut artifacts = Vec::new();
	for dep in &target.dependencies {
		match project.targets.get(dep) {
			Some(dep_target) => artifacts.extend(own_artifacts(dep_target, toolchain)),
			None => log::debug!("Dependency \"{}\" is not a declared target, skipping", dep),
		}
	}
	artifacts
}

/// Everything `target` needs before it is up to date: its own artifacts followed by those of its
/// direct dependencies.
pub fn prerequisites(project: &Project, target: &Target, toolchain: &Toolchain) -> Vec<String> {
	let mut all_deps = own_artifacts(target, toolchain);
	all_deps.extend(linked_artifacts(project, target, toolchain));
	all_deps
}
