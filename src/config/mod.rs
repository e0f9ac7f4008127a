#[cfg(feature = "cli")]
pub mod cli;
pub mod metadata_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, LogFormat};
pub use metadata_config::MetadataConfig;
