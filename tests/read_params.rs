use std::fs;
use std::path::PathBuf;

use dictconfig::{
	Error, ErrorKind, Interpolation, ParamValue, ReadOptions, SectionSelector, ValueKind, classify,
	infer, logging, read_params, read_params_with,
};
use serde_json::json;
use tempfile::TempDir;

const SIMULATION: &str = "\
; simulation parameters
[DEFAULT]
output_dir = /scratch/run

[Cosmology]
H0 = 67.7
Omega_m = 0.31
sigma8: 0.81
use_baryons = True

[Grid]
n_cells = 512
box_size = 1e3
redshifts = [0.0, 0.5, 1.0]
labels = [\"low\", \"high\"]

[Output]
verbose = false
format = hdf5
n_cells = 256
";

fn fixture(contents: &str) -> (TempDir, PathBuf) {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("simulation.params");
	fs::write(&path, contents).expect("write fixture");
	(dir, path)
}

#[test]
fn reads_every_section_with_inferred_types() {
	logging::init_test();
	let (_dir, path) = fixture(SIMULATION);

	let params = read_params(&path, "All").expect("reads");

	assert_eq!(params["H0"], ParamValue::Float(67.7));
	assert_eq!(params["sigma8"], ParamValue::Float(0.81));
	assert_eq!(params["use_baryons"], ParamValue::Boolean(true));
	assert_eq!(params["box_size"], ParamValue::Float(1000.0));
	assert_eq!(
		params["redshifts"],
		ParamValue::List(vec![json!(0.0), json!(0.5), json!(1.0)])
	);
	assert_eq!(params["labels"], ParamValue::List(vec![json!("low"), json!("high")]));
	assert_eq!(params["verbose"], ParamValue::Boolean(false));
	assert_eq!(params["format"], ParamValue::String("hdf5".into()));
	assert_eq!(
		params["output_dir"],
		ParamValue::String("/scratch/run".into())
	);
	// Output is processed after Grid.
	assert_eq!(params["n_cells"], ParamValue::Integer(256));
}

#[test]
fn selected_sections_follow_the_given_order() {
	let (_dir, path) = fixture(SIMULATION);

	let params = read_params(&path, ["Output", "Grid"]).expect("reads");
	assert_eq!(params["n_cells"], ParamValue::Integer(512));
	assert!(!params.contains_key("H0"));

	let keys: Vec<&str> = params.keys().map(String::as_str).collect();
	assert_eq!(
		keys,
		vec![
			"verbose",
			"format",
			"n_cells",
			"output_dir",
			"box_size",
			"redshifts",
			"labels"
		]
	);
}

#[test]
fn json_selectors_are_validated() {
	let (_dir, path) = fixture(SIMULATION);

	let selector = SectionSelector::try_from(json!(["Grid"])).expect("valid selector");
	let params = read_params(&path, selector).expect("reads");
	assert_eq!(params["n_cells"], ParamValue::Integer(512));

	let err = SectionSelector::try_from(json!(42)).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn errors_surface_with_their_kind() {
	let (dir, path) = fixture(SIMULATION);

	let err = read_params(&path, "Section4").unwrap_err();
	assert!(matches!(err, Error::UnknownSection { ref name } if name == "Section4"));

	let err = read_params(dir.path().join("missing.ini"), "All").unwrap_err();
	assert_eq!(err.kind(), ErrorKind::NotFound);

	let (_bad_dir, bad) = fixture("[Broken]\nvalues = [1, 2, oops]\n");
	let err = read_params(&bad, "All").unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn options_enable_interpolation() {
	let (_dir, path) = fixture("[DEFAULT]\nroot = /data\n[Paths]\nlogs = %(root)s/logs\nratio = 10%%\n");
	let options = ReadOptions {
		interpolation: Interpolation::Basic,
		..ReadOptions::default()
	};

	let params = read_params_with(&path, "Paths", &options).expect("reads");
	assert_eq!(params["logs"], ParamValue::String("/data/logs".into()));
	assert_eq!(params["ratio"], ParamValue::String("10%".into()));
}

#[test]
fn inference_precedence_is_total() {
	let cases = [
		("10", ValueKind::Integer),
		("-3", ValueKind::Integer),
		("10.0", ValueKind::Float),
		("-1.5e-3", ValueKind::Float),
		("True", ValueKind::Boolean),
		("false", ValueKind::Boolean),
		("FALSE", ValueKind::String),
		("[1, 2, 3]", ValueKind::List),
		("[]", ValueKind::List),
		("[1, 2", ValueKind::String),
		("hello", ValueKind::String),
		("", ValueKind::String),
	];

	for (raw, kind) in cases {
		assert_eq!(classify(raw), kind, "{raw:?}");
	}
	assert_eq!(
		infer("[1, 2, 3]").unwrap(),
		ParamValue::List(vec![json!(1), json!(2), json!(3)])
	);
}
