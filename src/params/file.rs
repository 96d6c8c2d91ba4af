//! Parameter files as ordered sections of raw string values.
//!
//! Tokenizing is delegated to `rust-ini`; this module only adds the structural
//! rules a parameter file must follow (every key inside a section, no repeated
//! sections or keys) and splits out the defaults section.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;
use ini::{Ini, ParseOption};
use tracing::trace;

use crate::error::{Error, Result};

/// Conventional name of the section whose entries every other section inherits.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A named group of raw parameters, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	name: String,
	entries: IndexMap<String, String>,
}

impl Section {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(key, value)| (key.as_str(), value.as_str()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// A parsed parameter file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamFile {
	sections: Vec<Section>,
	defaults: IndexMap<String, String>,
}

impl ParamFile {
	/// Read and parse the file at `path`.
	///
	/// A missing path is reported as [`Error::NotFound`] before anything is
	/// read. The file handle is released before parsing starts.
	pub fn load(path: &Path, defaults_section: Option<&str>) -> Result<Self> {
		if !path.exists() {
			return Err(Error::NotFound {
				path: path.to_path_buf(),
			});
		}

		let text = fs::read_to_string(path).map_err(|source| Error::Io {
			path: path.to_path_buf(),
			source,
		})?;
		trace!(path = %path.display(), bytes = text.len(), "read parameter file");

		Self::parse(&text, defaults_section)
	}

	/// Parse INI text. When `defaults_section` is set, the section with that
	/// name is removed from the section list and kept as inherited defaults.
	pub fn parse(text: &str, defaults_section: Option<&str>) -> Result<Self> {
		let options = ParseOption {
			enabled_quote: false,
			enabled_escape: false,
			enabled_indented_mutiline_value: true,
			..ParseOption::default()
		};
		let ini = Ini::load_from_str_opt(text, options)?;

		let mut file = ParamFile::default();
		let mut seen_defaults = false;
		for (name, properties) in ini.iter() {
			let Some(name) = name else {
				if let Some((key, _)) = properties.iter().next() {
					return Err(Error::MissingSectionHeader {
						key: key.to_string(),
					});
				}
				continue;
			};

			let is_defaults = defaults_section == Some(name);
			if file.sections.iter().any(|section| section.name == name)
				|| (is_defaults && seen_defaults)
			{
				return Err(Error::DuplicateSection {
					name: name.to_string(),
				});
			}

			let mut entries = IndexMap::new();
			for (key, value) in properties.iter() {
				match entries.entry(key.to_string()) {
					Entry::Occupied(_) => {
						return Err(Error::DuplicateKey {
							section: name.to_string(),
							key: key.to_string(),
						});
					}
					Entry::Vacant(slot) => {
						slot.insert(strip_continuation_comments(value));
					}
				}
			}

			if is_defaults {
				seen_defaults = true;
				file.defaults = entries;
			} else {
				file.sections.push(Section {
					name: name.to_string(),
					entries,
				});
			}
		}

		trace!(
			sections = file.sections.len(),
			defaults = file.defaults.len(),
			"parsed parameter file"
		);
		Ok(file)
	}

	/// Names of the selectable sections, in file order.
	pub fn section_names(&self) -> Vec<&str> {
		self.sections.iter().map(Section::name).collect()
	}

	pub fn section(&self, name: &str) -> Option<&Section> {
		self.sections.iter().find(|section| section.name == name)
	}

	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	pub fn defaults(&self) -> &IndexMap<String, String> {
		&self.defaults
	}

	/// Look up `key` in `section`, falling back to the defaults.
	pub fn lookup<'a>(&'a self, section: &'a Section, key: &str) -> Option<&'a str> {
		section
			.get(key)
			.or_else(|| self.defaults.get(key).map(String::as_str))
	}

	/// The effective entries of `section`: its own keys in order, followed by
	/// inherited defaults it does not override.
	pub fn effective_entries<'a>(
		&'a self,
		section: &'a Section,
	) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
		let inherited = self
			.defaults
			.iter()
			.filter(|(key, _)| !section.entries.contains_key(key.as_str()))
			.map(|(key, value)| (key.as_str(), value.as_str()));
		section.iter().chain(inherited)
	}
}

/// Drop continuation lines that are comments. The first line is the value
/// proper and is kept even if it starts with a comment marker.
fn strip_continuation_comments(value: &str) -> String {
	let mut lines = value.split('\n');
	let mut kept = lines.next().unwrap_or_default().to_string();
	for line in lines {
		let trimmed = line.trim_start();
		if trimmed.starts_with(';') || trimmed.starts_with('#') {
			continue;
		}
		kept.push('\n');
		kept.push_str(line);
	}
	kept
}
