use clap::Parser;
use dictconfig::{Interpolation, SectionSelector};

use super::{RawConfig, RawSelector};
use crate::cli::{CliArgs, OutputFormat};

fn cli(args: &[&str]) -> CliArgs {
	let mut argv = vec!["dictconfig"];
	argv.extend_from_slice(args);
	argv.push("run.ini");
	CliArgs::parse_from(argv)
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"-s",
		"Grid",
		"--defaults-section",
		"common",
		"-i",
		"basic",
		"-o",
		"json",
		"-k",
	]);

	let mut config = RawConfig::default();
	config.read.sections = Some(RawSelector::One("Other".into()));
	config.output.format = Some("plain".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(
		config.read.sections,
		Some(RawSelector::Many(vec!["Grid".into()]))
	);
	assert_eq!(config.read.defaults_section.as_deref(), Some("common"));
	assert_eq!(config.read.interpolation.as_deref(), Some("basic"));
	assert_eq!(config.output.format.as_deref(), Some("json"));
	assert_eq!(config.output.kinds, Some(true));
}

#[test]
fn resolve_fills_defaults() {
	let resolved = RawConfig::default().resolve(&cli(&[])).unwrap();

	assert_eq!(resolved.selector, SectionSelector::All);
	assert_eq!(resolved.options.defaults_section.as_deref(), Some("DEFAULT"));
	assert_eq!(resolved.options.interpolation, Interpolation::None);
	assert_eq!(resolved.format, OutputFormat::Plain);
	assert!(!resolved.show_kinds);
	assert!(resolved.path.ends_with("run.ini"));
}

#[test]
fn single_cli_section_is_a_named_selector() {
	let cli = cli(&["-s", "Grid"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.selector, SectionSelector::Named("Grid".into()));
}

#[test]
fn several_cli_sections_form_a_list() {
	let cli = cli(&["-s", "A", "-s", "B"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.selector, SectionSelector::from(["A", "B"]));
}

#[test]
fn no_defaults_disables_inheritance() {
	let cli = cli(&["--no-defaults"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.options.defaults_section, None);
}

#[test]
fn unknown_modes_are_rejected() {
	let mut config = RawConfig::default();
	config.output.format = Some("yaml".into());
	assert!(config.resolve(&cli(&[])).is_err());

	let mut config = RawConfig::default();
	config.read.interpolation = Some("extended".into());
	assert!(config.resolve(&cli(&[])).is_err());
}

#[test]
fn config_values_are_case_insensitive() {
	let mut config = RawConfig::default();
	config.output.format = Some(" JSON ".into());
	config.read.interpolation = Some("Basic".into());
	let resolved = config.resolve(&cli(&[])).unwrap();
	assert_eq!(resolved.format, OutputFormat::Json);
	assert_eq!(resolved.options.interpolation, Interpolation::Basic);
}
