//! Configuration loading and resolution for the binary.
//!
//! `load` layers default config files, explicit `--config` files,
//! `DICTCONFIG__*` environment variables and CLI flags, and returns a
//! [`ResolvedConfig`] ready to drive a read.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
