use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use super::file::{DEFAULT_SECTION, ParamFile};
use super::interpolate::Interpolation;
use super::selector::{SectionSelector, resolve};
use super::value::{ParamValue, infer};
use crate::error::{Error, Result};

/// Flat mapping from parameter name to typed value, in first-insertion order.
pub type Params = IndexMap<String, ParamValue>;

/// Options that change how a parameter file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
	/// Section whose entries are inherited by every other section. `None`
	/// treats every section as ordinary.
	pub defaults_section: Option<String>,
	pub interpolation: Interpolation,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self {
			defaults_section: Some(DEFAULT_SECTION.to_string()),
			interpolation: Interpolation::None,
		}
	}
}

/// Reads parameter files into [`Params`].
///
/// A reader holds no parser state between calls; every read parses the file
/// afresh.
#[derive(Debug, Clone, Default)]
pub struct ParamReader {
	options: ReadOptions,
}

impl ParamReader {
	pub fn new(options: ReadOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &ReadOptions {
		&self.options
	}

	pub fn read_path(&self, path: &Path, selector: &SectionSelector) -> Result<Params> {
		let file = ParamFile::load(path, self.options.defaults_section.as_deref())?;
		self.collect(&file, selector)
	}

	pub fn read_str(&self, text: &str, selector: &SectionSelector) -> Result<Params> {
		let file = ParamFile::parse(text, self.options.defaults_section.as_deref())?;
		self.collect(&file, selector)
	}

	/// Flatten the selected sections of an already parsed file.
	///
	/// Later sections overwrite keys written by earlier ones. Nothing is
	/// returned unless every selected value converts.
	pub fn collect(&self, file: &ParamFile, selector: &SectionSelector) -> Result<Params> {
		let resolved = resolve(selector, &file.section_names())?;
		debug!(selector = %selector, sections = ?resolved, "resolved sections");

		let mut params = Params::new();
		for name in &resolved {
			let Some(section) = file.section(name) else {
				return Err(Error::UnknownSection { name: name.clone() });
			};

			for (key, raw) in file.effective_entries(section) {
				let expanded = self.options.interpolation.apply(file, section, key, raw)?;
				let value = infer(&expanded).map_err(|source| Error::InvalidList {
					section: name.clone(),
					key: key.to_string(),
					source,
				})?;
				debug!(section = %name, key, kind = %value.kind(), "converted parameter");
				params.insert(key.to_string(), value);
			}
		}

		Ok(params)
	}
}

/// Read every section of the parameter file at `path`.
///
/// ```no_run
/// use dictconfig::{SectionSelector, read_params};
///
/// let params = read_params("run.ini", "Section2")?;
/// let all = read_params("run.ini", SectionSelector::All)?;
/// # Ok::<(), dictconfig::Error>(())
/// ```
pub fn read_params<P, S>(path: P, selector: S) -> Result<Params>
where
	P: AsRef<Path>,
	S: Into<SectionSelector>,
{
	read_params_with(path, selector, &ReadOptions::default())
}

pub fn read_params_with<P, S>(path: P, selector: S, options: &ReadOptions) -> Result<Params>
where
	P: AsRef<Path>,
	S: Into<SectionSelector>,
{
	ParamReader::new(options.clone()).read_path(path.as_ref(), &selector.into())
}

/// Same as [`read_params_with`] but for INI text already in memory.
pub fn read_params_str<S>(text: &str, selector: S, options: &ReadOptions) -> Result<Params>
where
	S: Into<SectionSelector>,
{
	ParamReader::new(options.clone()).read_str(text, &selector.into())
}
