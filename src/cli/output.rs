use anyhow::Result;
use dictconfig::Params;

/// Render the mapping as `key = value` lines, optionally tagged with the
/// inferred kind.
pub(crate) fn format_plain(params: &Params, show_kinds: bool) -> String {
	let mut out = String::new();
	for (key, value) in params {
		if show_kinds {
			out.push_str(&format!("{key} = {value} ({})\n", value.kind()));
		} else {
			out.push_str(&format!("{key} = {value}\n"));
		}
	}
	out
}

/// Print a plain-text representation of the mapping.
pub(crate) fn print_plain(params: &Params, show_kinds: bool) {
	if params.is_empty() {
		println!("No parameters");
		return;
	}
	print!("{}", format_plain(params, show_kinds));
}

/// Format the mapping as a JSON object in insertion order.
pub(crate) fn format_params_json(params: &Params) -> Result<String> {
	Ok(serde_json::to_string_pretty(params)?)
}

/// Print the JSON representation of the mapping.
pub(crate) fn print_json(params: &Params) -> Result<()> {
	println!("{}", format_params_json(params)?);
	Ok(())
}
