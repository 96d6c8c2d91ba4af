//! Section selection.
//!
//! A [`SectionSelector`] names which sections of a parameter file should be
//! flattened into the output mapping. [`resolve`] checks the selection against
//! the sections a file actually declares.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{Error, Result};

/// Text form of [`SectionSelector::All`].
pub const ALL_SECTIONS: &str = "All";

/// Which sections of a parameter file to read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectionSelector {
	/// Every section, in file order.
	#[default]
	All,
	/// A single section.
	Named(String),
	/// An explicit list of sections, processed in the given order.
	Many(Vec<String>),
}

impl SectionSelector {
	/// Build a selector from command-line style input: no names or the
	/// [`ALL_SECTIONS`] sentinel alone select everything, one name selects
	/// that section and several names form a list.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
		match names.len() {
			0 => Self::All,
			1 => Self::from(names.remove(0)),
			_ => Self::Many(names),
		}
	}
}

impl From<&str> for SectionSelector {
	fn from(value: &str) -> Self {
		Self::from(value.to_string())
	}
}

impl From<String> for SectionSelector {
	fn from(value: String) -> Self {
		if value == ALL_SECTIONS {
			Self::All
		} else {
			Self::Named(value)
		}
	}
}

impl From<Vec<String>> for SectionSelector {
	fn from(value: Vec<String>) -> Self {
		Self::Many(value)
	}
}

impl From<&[&str]> for SectionSelector {
	fn from(value: &[&str]) -> Self {
		Self::Many(value.iter().map(|name| name.to_string()).collect())
	}
}

impl<const N: usize> From<[&str; N]> for SectionSelector {
	fn from(value: [&str; N]) -> Self {
		Self::from(&value[..])
	}
}

impl FromStr for SectionSelector {
	type Err = Infallible;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(Self::from(s))
	}
}

impl TryFrom<Value> for SectionSelector {
	type Error = Error;

	/// Accept a JSON string or an array of JSON strings; anything else is an
	/// invalid selector.
	fn try_from(value: Value) -> Result<Self> {
		match value {
			Value::String(name) => Ok(Self::from(name)),
			Value::Array(items) => items
				.into_iter()
				.map(|item| match item {
					Value::String(name) => Ok(name),
					other => Err(Error::InvalidSelector {
						found: format!("a list containing {}", json_type_name(&other)),
					}),
				})
				.collect::<Result<Vec<_>>>()
				.map(Self::Many),
			other => Err(Error::InvalidSelector {
				found: json_type_name(&other).to_string(),
			}),
		}
	}
}

impl fmt::Display for SectionSelector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::All => f.write_str(ALL_SECTIONS),
			Self::Named(name) => f.write_str(name),
			Self::Many(names) => write!(f, "[{}]", names.join(", ")),
		}
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "a list",
		Value::Object(_) => "an object",
	}
}

/// Validate `selector` against the sections present in a file and return the
/// names to process, in processing order.
///
/// A list selector is returned as given, duplicates included; an empty list
/// resolves to nothing.
pub fn resolve<S: AsRef<str>>(selector: &SectionSelector, available: &[S]) -> Result<Vec<String>> {
	let exists = |name: &str| available.iter().any(|section| section.as_ref() == name);

	match selector {
		SectionSelector::All => Ok(available
			.iter()
			.map(|section| section.as_ref().to_string())
			.collect()),
		SectionSelector::Named(name) => {
			if !exists(name) {
				return Err(Error::UnknownSection { name: name.clone() });
			}
			Ok(vec![name.clone()])
		}
		SectionSelector::Many(names) => {
			if let Some(missing) = names.iter().find(|name| !exists(name)) {
				return Err(Error::UnknownSection {
					name: missing.clone(),
				});
			}
			Ok(names.clone())
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::error::ErrorKind;

	const AVAILABLE: [&str; 3] = ["Section1", "Section2", "Section3"];

	#[test]
	fn all_returns_file_order() {
		let resolved = resolve(&SectionSelector::All, &AVAILABLE).unwrap();
		assert_eq!(resolved, AVAILABLE);
	}

	#[test]
	fn single_name_becomes_one_element_list() {
		let resolved = resolve(&"Section2".into(), &AVAILABLE).unwrap();
		assert_eq!(resolved, vec!["Section2"]);
	}

	#[test]
	fn unknown_single_name_is_rejected() {
		let err = resolve(&"Section4".into(), &AVAILABLE).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Validation);
	}

	#[test]
	fn list_is_returned_unchanged() {
		let selector = SectionSelector::from(["Section3", "Section1", "Section3"]);
		let resolved = resolve(&selector, &AVAILABLE).unwrap();
		assert_eq!(resolved, vec!["Section3", "Section1", "Section3"]);
	}

	#[test]
	fn list_with_unknown_name_reports_it() {
		let selector = SectionSelector::from(["Section1", "Section4"]);
		match resolve(&selector, &AVAILABLE) {
			Err(Error::UnknownSection { name }) => assert_eq!(name, "Section4"),
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn empty_list_resolves_to_nothing() {
		let resolved = resolve(&SectionSelector::Many(Vec::new()), &AVAILABLE).unwrap();
		assert!(resolved.is_empty());
	}

	#[test]
	fn sentinel_inside_a_list_is_a_section_name() {
		let selector = SectionSelector::from(["All"]);
		assert!(resolve(&selector, &AVAILABLE).is_err());
	}

	#[test]
	fn text_form_maps_sentinel() {
		assert_eq!(SectionSelector::from("All"), SectionSelector::All);
		assert_eq!(
			"all".parse::<SectionSelector>().unwrap(),
			SectionSelector::Named("all".into())
		);
	}

	#[test]
	fn from_names_picks_shape_by_count() {
		assert_eq!(
			SectionSelector::from_names(Vec::<String>::new()),
			SectionSelector::All
		);
		assert_eq!(
			SectionSelector::from_names(["All"]),
			SectionSelector::All
		);
		assert_eq!(
			SectionSelector::from_names(["A"]),
			SectionSelector::Named("A".into())
		);
		assert_eq!(
			SectionSelector::from_names(["A", "B"]),
			SectionSelector::Many(vec!["A".into(), "B".into()])
		);
	}

	#[test]
	fn json_selectors_accept_strings_and_string_lists() {
		assert_eq!(
			SectionSelector::try_from(json!("All")).unwrap(),
			SectionSelector::All
		);
		assert_eq!(
			SectionSelector::try_from(json!(["A", "B"])).unwrap(),
			SectionSelector::from(["A", "B"])
		);
	}

	#[test]
	fn json_selectors_of_other_types_are_invalid() {
		for value in [json!(3), json!(null), json!({"a": 1}), json!(["A", 2])] {
			let err = SectionSelector::try_from(value).unwrap_err();
			assert!(matches!(err, Error::InvalidSelector { .. }));
			assert_eq!(err.kind(), ErrorKind::Validation);
		}
	}
}
