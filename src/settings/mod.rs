//! Configuration loading and resolution.
//!
//! `load` merges default files, explicit `--config` files and environment
//! variables, applies CLI overrides and returns a validated
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
pub(crate) use sources::{ENV_PREFIX, ENV_SEPARATOR, default_config_files};
