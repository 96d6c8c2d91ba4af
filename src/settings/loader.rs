use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Merge settings files, `DICTCONFIG__*` variables and CLI flags into the
/// options for one read.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let merged = build_config(cli).context("could not assemble dictconfig settings")?;
	let mut raw: RawConfig = merged
		.try_deserialize()
		.context("dictconfig settings have an unexpected shape (see [read] and [output])")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
