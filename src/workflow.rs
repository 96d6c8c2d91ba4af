use anyhow::{Context, Result};
use dictconfig::{ParamReader, Params, SectionSelector};
use std::path::PathBuf;
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates reading one parameter file with the resolved settings.
pub(crate) struct ReadWorkflow {
	reader: ParamReader,
	path: PathBuf,
	selector: SectionSelector,
}

impl ReadWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Self {
		Self {
			reader: ParamReader::new(config.options.clone()),
			path: config.path.clone(),
			selector: config.selector.clone(),
		}
	}

	pub(crate) fn run(&self) -> Result<Params> {
		let params = self
			.reader
			.read_path(&self.path, &self.selector)
			.with_context(|| format!("failed to read parameters from {}", self.path.display()))?;
		info!(
			path = %self.path.display(),
			selector = %self.selector,
			count = params.len(),
			"read parameters"
		);
		Ok(params)
	}
}
