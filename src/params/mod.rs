//! Reading parameter files into flat mappings of typed values.
//!
//! The pipeline has three steps: [`selector::resolve`] picks the sections to
//! read, [`value::infer`] types each raw value, and [`reader::ParamReader`]
//! walks the selected sections and collects the results. [`file::ParamFile`]
//! adapts the INI tokenizer's output for all three.

pub mod file;
pub mod interpolate;
pub mod reader;
pub mod selector;
pub mod value;

pub use file::{DEFAULT_SECTION, ParamFile, Section};
pub use interpolate::Interpolation;
pub use reader::{ParamReader, Params, ReadOptions, read_params, read_params_str, read_params_with};
pub use selector::{ALL_SECTIONS, SectionSelector, resolve};
pub use value::{ParamValue, ValueKind, classify, infer};
