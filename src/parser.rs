use std::{
	fs, //
	path::Path,
};

use crate::{
	error::{Error, Result},
	project::Project,
	sources::{expand_sources, SourceResolver},
	target::{Target, TargetKind},
};

const PROJECT: &str = "project(";
const LANGUAGE: &str = "language(";
const ADD_LIBRARY: &str = "add_library(";
const ADD_EXECUTABLE: &str = "add_executable(";
const TARGET_LINK_LIBRARIES: &str = "target_link_libraries(";
const PRIVATE: &str = "PRIVATE";

/// One classified line of a project description.
#[derive(Debug, PartialEq, Eq)]
pub enum Directive<'a> {
	Project(&'a str),
	Language(Vec<&'a str>),
	AddLibrary { name: &'a str, patterns: Vec<&'a str> },
	AddExecutable { name: &'a str, patterns: Vec<&'a str> },
	LinkLibraries { target: &'a str, dependencies: Vec<&'a str> },
	/// A known directive whose arguments don't fit its grammar. Holds the directive prefix.
	Malformed(&'a str),
	Unrecognized,
}

impl<'a> Directive<'a> {
	/// Classifies an already trimmed line.
	pub fn parse(line: &'a str) -> Directive<'a> {
		if let Some(rest) = line.strip_prefix(PROJECT) {
			match argument_span(rest) {
				Some(arg) => Directive::Project(arg.trim()),
				None => Directive::Malformed(PROJECT),
			}
		} else if let Some(rest) = line.strip_prefix(LANGUAGE) {
			match argument_span(rest) {
				Some(args) => Directive::Language(args.split_whitespace().collect()),
				None => Directive::Malformed(LANGUAGE),
			}
		} else if let Some(rest) = line.strip_prefix(ADD_LIBRARY) {
			match name_and_list(rest) {
				Some((name, patterns)) => Directive::AddLibrary { name, patterns },
				None => Directive::Malformed(ADD_LIBRARY),
			}
		} else if let Some(rest) = line.strip_prefix(ADD_EXECUTABLE) {
			match name_and_list(rest) {
				Some((name, patterns)) => Directive::AddExecutable { name, patterns },
				None => Directive::Malformed(ADD_EXECUTABLE),
			}
		} else if let Some(rest) = line.strip_prefix(TARGET_LINK_LIBRARIES) {
			match target_and_deps(rest) {
				Some((target, dependencies)) => Directive::LinkLibraries { target, dependencies },
				None => Directive::Malformed(TARGET_LINK_LIBRARIES),
			}
		} else {
			Directive::Unrecognized
		}
	}
}

fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Text between the opening parenthesis and the last `)` on the line. Must not be empty.
fn argument_span(after_paren: &str) -> Option<&str> {
	let close = after_paren.rfind(')')?;
	let inner = &after_paren[..close];
	if inner.is_empty() {
		None
	} else {
		Some(inner)
	}
}

/// Splits a leading run of word characters off `s`.
fn leading_word(s: &str) -> Option<(&str, &str)> {
	let end = s.find(|c: char| !is_word_char(c)).unwrap_or(s.len());
	if end == 0 {
		return None;
	}
	Some(s.split_at(end))
}

/// Accepts `s` if it is whitespace followed by at least one more character.
fn spaced_tail(s: &str) -> Option<&str> {
	let mut chars = s.chars();
	match (chars.next(), chars.next()) {
		(Some(first), Some(_)) if first.is_whitespace() => Some(s),
		_ => None,
	}
}

/// `<name> <item> [<item> ...]`
fn name_and_list(after_paren: &str) -> Option<(&str, Vec<&str>)> {
	let inner = argument_span(after_paren)?;
	let (name, rest) = leading_word(inner)?;
	let list = spaced_tail(rest)?;
	Some((name, list.split_whitespace().collect()))
}

/// `<name> PRIVATE <dep> [<dep> ...]`
fn target_and_deps(after_paren: &str) -> Option<(&str, Vec<&str>)> {
	let inner = argument_span(after_paren)?;
	let (target, rest) = leading_word(inner)?;
	let keyword = rest.trim_start();
	if keyword.len() == rest.len() {
		return None;
	}
	let deps = spaced_tail(keyword.strip_prefix(PRIVATE)?)?;
	Some((target, deps.split_whitespace().collect()))
}

/// Builds a `Project` from description text in a single forward pass.
pub struct Parser<'r> {
	resolver: &'r dyn SourceResolver,
	project: Project,
}

impl<'r> Parser<'r> {
	pub fn new(resolver: &'r dyn SourceResolver) -> Self {
		Parser { resolver, project: Project::new() }
	}

	pub fn feed_line(&mut self, line: &str) {
		let line = line.trim();
		log::trace!("Line content: '{}'", line);
		let directive = Directive::parse(line);
		match &directive {
			Directive::Unrecognized => {}
			Directive::Malformed(prefix) => log::debug!("Skipping malformed {}...) directive: {}", prefix, line),
			_ => log::debug!("Parsed directive: {:?}", directive),
		}
		self.apply(directive);
	}

	fn apply(&mut self, directive: Directive) {
		match directive {
			Directive::Project(name) => self.project.name = Some(name.to_owned()),
			Directive::Language(words) => self.project.language = words.into_iter().map(String::from).collect(),
			Directive::AddLibrary { name, patterns } => self.add_target(TargetKind::Library, name, &patterns),
			Directive::AddExecutable { name, patterns } => self.add_target(TargetKind::Executable, name, &patterns),
			Directive::LinkLibraries { target, dependencies } => match self.project.targets.get_mut(target) {
				Some(x) => x.dependencies.extend(dependencies.into_iter().map(String::from)),
				None => log::debug!("Ignoring links for undeclared target \"{}\"", target),
			},
			Directive::Malformed(_) | Directive::Unrecognized => {}
		}
	}

	fn add_target(&mut self, kind: TargetKind, name: &str, patterns: &[&str]) {
		let sources = expand_sources(self.resolver, patterns);
		let target = Target::new(kind, sources);
		if self.project.targets.insert(name.to_owned(), target).is_some() {
			log::debug!("Target \"{}\" redeclared, previous definition replaced", name);
		}
	}

	pub fn finish(self) -> Project {
		let project = self.project;
		log::info!("Project: {}", project.name.as_deref().unwrap_or("None"));
		log::info!("Language: [{}]", project.language.join(", "));
		for (name, target) in &project.targets {
			log::info!("Target {}: {}", name, target);
		}
		project
	}
}

/// Parses description text. Malformed and unknown lines are skipped; this never fails.
pub fn parse_str(text: &str, resolver: &dyn SourceResolver) -> Project {
	let mut parser = Parser::new(resolver);
	for line in text.lines() {
		parser.feed_line(line);
	}
	parser.finish()
}

/// Reads and parses the description at `path`.
pub fn parse_file(path: &Path, resolver: &dyn SourceResolver) -> Result<Project> {
	log::debug!("Opening file: {}", path.display());
	let text = match fs::read_to_string(path) {
		Ok(x) => x,
		Err(e) => return Err(Error::file_access(path, e)),
	};
	log::debug!("Number of lines read: {}", text.lines().count());
	Ok(parse_str(&text, resolver))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn argument_span_uses_last_paren() {
		assert_eq!(argument_span("Demo)"), Some("Demo"));
		assert_eq!(argument_span("a (b))"), Some("a (b)"));
		assert_eq!(argument_span("Demo) # trailing"), Some("Demo"));
		assert_eq!(argument_span(")"), None);
		assert_eq!(argument_span("Demo"), None);
	}

	#[test]
	fn project_and_language() {
		assert_eq!(Directive::parse("project( My Demo )"), Directive::Project("My Demo"));
		assert_eq!(Directive::parse("language(Java 17)"), Directive::Language(vec!["Java", "17"]));
		assert_eq!(Directive::parse("project()"), Directive::Malformed(PROJECT));
		assert_eq!(Directive::parse("language("), Directive::Malformed(LANGUAGE));
	}

	#[test]
	fn add_target_grammar() {
		assert_eq!(
			Directive::parse("add_library(util src/*.java lib/A.java)"),
			Directive::AddLibrary { name: "util", patterns: vec!["src/*.java", "lib/A.java"] }
		);
		assert_eq!(
			Directive::parse("add_executable(app\tMain.java)"),
			Directive::AddExecutable { name: "app", patterns: vec!["Main.java"] }
		);
		assert_eq!(Directive::parse("add_library(util)"), Directive::Malformed(ADD_LIBRARY));
		assert_eq!(Directive::parse("add_library(util )"), Directive::Malformed(ADD_LIBRARY));
		assert_eq!(Directive::parse("add_library(my-lib a.java)"), Directive::Malformed(ADD_LIBRARY));
		assert_eq!(Directive::parse("add_executable( app a.java)"), Directive::Malformed(ADD_EXECUTABLE));
		// Two trailing spaces still satisfy the grammar and yield no patterns.
		assert_eq!(Directive::parse("add_library(util  )"), Directive::AddLibrary { name: "util", patterns: vec![] });
	}

	#[test]
	fn link_grammar() {
		assert_eq!(
			Directive::parse("target_link_libraries(app PRIVATE util core)"),
			Directive::LinkLibraries { target: "app", dependencies: vec!["util", "core"] }
		);
		assert_eq!(Directive::parse("target_link_libraries(app util)"), Directive::Malformed(TARGET_LINK_LIBRARIES));
		assert_eq!(Directive::parse("target_link_libraries(app PUBLIC util)"), Directive::Malformed(TARGET_LINK_LIBRARIES));
		assert_eq!(Directive::parse("target_link_libraries(app PRIVATEutil)"), Directive::Malformed(TARGET_LINK_LIBRARIES));
		assert_eq!(Directive::parse("target_link_libraries(appPRIVATE util)"), Directive::Malformed(TARGET_LINK_LIBRARIES));
		assert_eq!(Directive::parse("target_link_libraries(app PRIVATE)"), Directive::Malformed(TARGET_LINK_LIBRARIES));
	}

	#[test]
	fn unrecognized() {
		assert_eq!(Directive::parse(""), Directive::Unrecognized);
		assert_eq!(Directive::parse("# project(Demo)"), Directive::Unrecognized);
		assert_eq!(Directive::parse("project (Demo)"), Directive::Unrecognized);
		assert_eq!(Directive::parse("set(FOO bar)"), Directive::Unrecognized);
	}
}
