use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use dictconfig::{DEFAULT_SECTION, Interpolation, ReadOptions, SectionSelector};
use serde::Deserialize;

use super::resolved::ResolvedConfig;
use crate::cli::{CliArgs, OutputFormat};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) read: ReadSection,
	pub(super) output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ReadSection {
	pub(super) sections: Option<RawSelector>,
	pub(super) defaults_section: Option<String>,
	pub(super) interpolation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
	pub(super) format: Option<String>,
	pub(super) kinds: Option<bool>,
}

/// A selector as written in a config file: one name or a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(super) enum RawSelector {
	One(String),
	Many(Vec<String>),
}

impl RawSelector {
	fn into_selector(self) -> SectionSelector {
		match self {
			RawSelector::One(name) => SectionSelector::from(name),
			// Environment lists always arrive as arrays, so a single entry is
			// read the same way a lone `--section` flag is.
			RawSelector::Many(names) => SectionSelector::from_names(names),
		}
	}
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if !cli.sections.is_empty() {
			self.read.sections = Some(RawSelector::Many(cli.sections.clone()));
		}
		if let Some(name) = cli.defaults_section.clone() {
			self.read.defaults_section = Some(name);
		}
		if cli.no_defaults {
			self.read.defaults_section = Some(String::new());
		}
		if let Some(mode) = cli.interpolation {
			self.read.interpolation = Some(mode.as_str().to_string());
		}
		if let Some(format) = cli.output {
			self.output.format = Some(format.as_str().to_string());
		}
		if cli.kinds {
			self.output.kinds = Some(true);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let selector = self
			.read
			.sections
			.map(RawSelector::into_selector)
			.unwrap_or_default();

		let defaults_section = match self.read.defaults_section {
			Some(name) if name.trim().is_empty() => None,
			Some(name) => Some(name.trim().to_string()),
			None => Some(DEFAULT_SECTION.to_string()),
		};

		let interpolation = match self.read.interpolation {
			Some(mode) => parse_interpolation(&mode)?,
			None => Interpolation::default(),
		};

		let format = match self.output.format {
			Some(format) => parse_format(&format)?,
			None => OutputFormat::Plain,
		};

		Ok(ResolvedConfig {
			path: resolve_path(&cli.path),
			selector,
			options: ReadOptions {
				defaults_section,
				interpolation,
			},
			format,
			show_kinds: self.output.kinds.unwrap_or(false),
		})
	}
}

fn resolve_path(path: &Path) -> PathBuf {
	std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn parse_interpolation(value: &str) -> Result<Interpolation> {
	match value.trim().to_ascii_lowercase().as_str() {
		"none" => Ok(Interpolation::None),
		"basic" => Ok(Interpolation::Basic),
		other => bail!("unknown interpolation mode '{other}'"),
	}
}

fn parse_format(value: &str) -> Result<OutputFormat> {
	match value.trim().to_ascii_lowercase().as_str() {
		"plain" => Ok(OutputFormat::Plain),
		"json" => Ok(OutputFormat::Json),
		other => bail!("unknown output format '{other}'"),
	}
}

#[cfg(test)]
mod tests;
