use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{InterpolationArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `dictconfig` binary.
#[derive(Parser, Debug)]
#[command(
	name = "dictconfig",
	version,
	long_version = long_version(),
	about = "Read an INI parameter file into a dictionary of typed values",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(value_name = "PATH", help = "Parameter file to read")]
	pub(crate) path: PathBuf,
	#[arg(
		short,
		long = "section",
		value_name = "NAME",
		action = ArgAction::Append,
		help = "Section to read; repeat for several, `All` for every section (default: All)"
	)]
	pub(crate) sections: Vec<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DICTCONFIG_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "defaults-section",
		value_name = "NAME",
		conflicts_with = "no_defaults",
		help = "Section whose entries every other section inherits (default: DEFAULT)"
	)]
	pub(crate) defaults_section: Option<String>,
	#[arg(
		long = "no-defaults",
		help = "Treat the defaults section as an ordinary section (default: disabled)"
	)]
	pub(crate) no_defaults: bool,
	#[arg(
		short = 'i',
		long,
		value_enum,
		help = "Expand %(name)s references before typing values (default: none)"
	)]
	pub(crate) interpolation: Option<InterpolationArg>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		help = "Choose how to print the result (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		short = 'k',
		long = "kinds",
		help = "Annotate plain output with the inferred type (default: disabled)"
	)]
	pub(crate) kinds: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before reading (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity; repeat for more detail (default: warnings only)"
	)]
	pub(crate) verbose: u8,
}
