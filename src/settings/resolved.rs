use std::path::PathBuf;

use dictconfig::{ReadOptions, SectionSelector};

use crate::cli::OutputFormat;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub path: PathBuf,
	pub selector: SectionSelector,
	pub options: ReadOptions,
	pub format: OutputFormat,
	pub show_kinds: bool,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Parameter file: {}", self.path.display());
		println!("  Sections: {}", self.selector);
		println!(
			"  Defaults section: {}",
			self.options.defaults_section.as_deref().unwrap_or("(disabled)")
		);
		println!("  Interpolation: {}", self.options.interpolation.as_str());
		println!("  Output: {}", self.format.as_str());
		println!("  Show kinds: {}", bool_to_word(self.show_kinds));
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
