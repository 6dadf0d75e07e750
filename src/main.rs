use std::{
	path::PathBuf, //
	process::ExitCode,
};

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};

use jmake::{
	generator::Makefile, //
	toolchain::{read_toolchain, Toolchain},
	JMAKE_LISTS,
	MAKEFILE,
};

const FILE: &str = "file";
const OUTPUT: &str = "output";
const TOOLCHAIN: &str = "toolchain";

fn cli() -> Command {
	Command::new("jmake")
		.about("Generate a Makefile from a JMakeLists project description")
		.arg(Arg::new(FILE).value_name("FILE").help(format!("Project description to read [default: {}]", JMAKE_LISTS)))
		.arg(
			Arg::new(OUTPUT)
				.short('o')
				.long(OUTPUT)
				.value_name("<path-to-makefile>")
				.help(format!("Where to write the generated Makefile [default: {}]", MAKEFILE)),
		)
		.arg(
			Arg::new(TOOLCHAIN)
				.short('t')
				.long(TOOLCHAIN)
				.value_name("<path-to-toolchain>")
				.help("TOML file overriding the compiler, flags and file suffixes"),
		)
}

/// Input, output and optional toolchain paths, with the defaults filled in.
fn selected_paths(matches: &ArgMatches) -> (PathBuf, PathBuf, Option<PathBuf>) {
	let path_arg = |id: &str| matches.get_one::<String>(id).map(PathBuf::from);
	let input = path_arg(FILE).unwrap_or_else(|| PathBuf::from(JMAKE_LISTS));
	let output = path_arg(OUTPUT).unwrap_or_else(|| PathBuf::from(MAKEFILE));
	(input, output, path_arg(TOOLCHAIN))
}

fn run(input: PathBuf, output: PathBuf, toolchain_path: Option<PathBuf>) -> Result<(), anyhow::Error> {
	let toolchain = match toolchain_path {
		Some(path) => read_toolchain(&path)?,
		None => Toolchain::default(),
	};
	let project = jmake::parse_project(&input).with_context(|| "Could not parse project description")?;
	Makefile::write(&project, &toolchain, &output).with_context(|| "Could not generate Makefile")?;
	Ok(())
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().filter_or("JMAKE_LOG", "warn"))
		.format_timestamp(None)
		.init();

	let (input, output, toolchain_path) = selected_paths(&cli().get_matches());

	println!("     input: {}", input.display());
	println!("    output: {}", output.display());
	if let Some(path) = &toolchain_path {
		println!(" toolchain: {}", path.display());
	}

	match run(input, output, toolchain_path) {
		Ok(()) => {
			println!("Makefile generated successfully!");
			ExitCode::SUCCESS
		}
		Err(e) => {
			println!("Error: {:#}", e);
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_fill_missing_paths() {
		let matches = cli().try_get_matches_from(["jmake"]).unwrap();
		assert_eq!(selected_paths(&matches), (PathBuf::from(JMAKE_LISTS), PathBuf::from(MAKEFILE), None));
	}

	#[test]
	fn explicit_paths() {
		let matches = cli().try_get_matches_from(["jmake", "proj.txt", "-o", "out.mk", "--toolchain", "kt.toml"]).unwrap();
		assert_eq!(
			selected_paths(&matches),
			(PathBuf::from("proj.txt"), PathBuf::from("out.mk"), Some(PathBuf::from("kt.toml")))
		);
	}
}
