//! Typed parameter values and the inference rules that produce them.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A parameter value after type inference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
	Integer(i64),
	Float(f64),
	Boolean(bool),
	List(Vec<Value>),
	String(String),
}

/// The variant a raw value is classified as, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	Integer,
	Float,
	Boolean,
	List,
	String,
}

impl ValueKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Integer => "int",
			Self::Float => "float",
			Self::Boolean => "bool",
			Self::List => "list",
			Self::String => "str",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ParamValue {
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Integer(_) => ValueKind::Integer,
			Self::Float(_) => ValueKind::Float,
			Self::Boolean(_) => ValueKind::Boolean,
			Self::List(_) => ValueKind::List,
			Self::String(_) => ValueKind::String,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Integer(value) => Some(*value),
			_ => None,
		}
	}

	/// Floats as-is; integers widen.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Float(value) => Some(*value),
			Self::Integer(value) => Some(*value as f64),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Boolean(value) => Some(*value),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Integer(value) => write!(f, "{value}"),
			// Debug keeps the trailing `.0` so floats stay distinguishable from integers.
			Self::Float(value) => write!(f, "{value:?}"),
			Self::Boolean(value) => write!(f, "{value}"),
			Self::List(items) => {
				let rendered = serde_json::to_string(items).map_err(|_| fmt::Error)?;
				f.write_str(&rendered)
			}
			Self::String(value) => f.write_str(value),
		}
	}
}

const BOOLEAN_LITERALS: [(&str, bool); 4] = [
	("True", true),
	("true", true),
	("False", false),
	("false", false),
];

fn parse_integer(raw: &str) -> Option<i64> {
	raw.parse().ok()
}

fn parse_float(raw: &str) -> Option<f64> {
	raw.parse().ok()
}

fn parse_boolean(raw: &str) -> Option<bool> {
	BOOLEAN_LITERALS
		.iter()
		.find(|(literal, _)| *literal == raw)
		.map(|(_, value)| *value)
}

fn looks_like_list(raw: &str) -> bool {
	raw.starts_with('[') && raw.ends_with(']')
}

/// Classify a raw value. Checks run in a fixed order and the first match wins:
/// integer, float, boolean, bracketed list, then plain string.
pub fn classify(raw: &str) -> ValueKind {
	if parse_integer(raw).is_some() {
		ValueKind::Integer
	} else if parse_float(raw).is_some() {
		ValueKind::Float
	} else if parse_boolean(raw).is_some() {
		ValueKind::Boolean
	} else if looks_like_list(raw) {
		ValueKind::List
	} else {
		ValueKind::String
	}
}

/// Convert a raw value into its typed form.
///
/// Only values classified as lists can fail: anything wrapped in brackets is
/// handed to the JSON parser and a parse failure is returned, not downgraded
/// to a string.
pub fn infer(raw: &str) -> Result<ParamValue, serde_json::Error> {
	if let Some(value) = parse_integer(raw) {
		return Ok(ParamValue::Integer(value));
	}
	if let Some(value) = parse_float(raw) {
		return Ok(ParamValue::Float(value));
	}
	if let Some(value) = parse_boolean(raw) {
		return Ok(ParamValue::Boolean(value));
	}
	if looks_like_list(raw) {
		return serde_json::from_str::<Vec<Value>>(raw).map(ParamValue::List);
	}
	Ok(ParamValue::String(raw.to_string()))
}
