//! `%(name)s` expansion of raw values.

use super::file::{ParamFile, Section};
use crate::error::{Error, Result};

/// Maximum nesting of references before expansion gives up.
pub const MAX_DEPTH: usize = 10;

/// How raw values are expanded before type inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
	/// Values are used exactly as written.
	#[default]
	None,
	/// `%(name)s` is replaced with the value of `name` from the same section
	/// or the defaults, and `%%` becomes `%`.
	Basic,
}

impl Interpolation {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Basic => "basic",
		}
	}

	pub(crate) fn apply(
		self,
		file: &ParamFile,
		section: &Section,
		key: &str,
		raw: &str,
	) -> Result<String> {
		match self {
			Self::None => Ok(raw.to_string()),
			Self::Basic => {
				let mut out = String::with_capacity(raw.len());
				expand(file, section, key, raw, 1, &mut out)?;
				Ok(out)
			}
		}
	}
}

fn expand(
	file: &ParamFile,
	section: &Section,
	key: &str,
	raw: &str,
	depth: usize,
	out: &mut String,
) -> Result<()> {
	let fail = |reason: String| Error::Interpolation {
		section: section.name().to_string(),
		key: key.to_string(),
		reason,
	};

	if depth > MAX_DEPTH {
		return Err(fail(format!(
			"references nested deeper than {MAX_DEPTH} levels"
		)));
	}

	let mut rest = raw;
	while let Some(at) = rest.find('%') {
		out.push_str(&rest[..at]);
		rest = &rest[at..];

		if let Some(tail) = rest.strip_prefix("%%") {
			out.push('%');
			rest = tail;
		} else if let Some(tail) = rest.strip_prefix("%(") {
			let Some(close) = tail.find(")s") else {
				return Err(fail(format!("bad interpolation syntax in '{rest}'")));
			};
			let name = &tail[..close];
			let Some(value) = file.lookup(section, name) else {
				return Err(fail(format!("unknown reference '{name}'")));
			};
			expand(file, section, key, value, depth + 1, out)?;
			rest = &tail[close + 2..];
		} else {
			return Err(fail(format!(
				"'%' must be followed by '%' or '(' in '{rest}'"
			)));
		}
	}
	out.push_str(rest);
	Ok(())
}
