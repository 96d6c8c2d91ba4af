mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use dictconfig::logging;
use settings::ResolvedConfig;
use workflow::ReadWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_read(&resolved)
}

/// Read the parameter file and print the mapping in the chosen format.
fn run_read(settings: &ResolvedConfig) -> Result<()> {
	let workflow = ReadWorkflow::from_config(settings);
	let params = workflow.run()?;

	match settings.format {
		OutputFormat::Plain => print_plain(&params, settings.show_kinds),
		OutputFormat::Json => print_json(&params)?,
	}

	Ok(())
}
