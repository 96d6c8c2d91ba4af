//! Read INI parameter files into dictionaries of typed values.
//!
//! Each value is typed from its text: integers, then floats, then the
//! booleans `True`/`true`/`False`/`false`, then bracketed JSON lists, and
//! everything else stays a string. The root module re-exports the reading
//! API so callers rarely need to reach into [`params`].

pub mod app_dirs;
pub mod error;
pub mod logging;
pub mod params;

pub use error::{Error, ErrorKind, Result};
pub use params::{
	ALL_SECTIONS, DEFAULT_SECTION, Interpolation, ParamFile, ParamReader, ParamValue, Params,
	ReadOptions, Section, SectionSelector, ValueKind, classify, infer, read_params,
	read_params_str, read_params_with, resolve,
};
