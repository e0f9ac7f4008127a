pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::MetadataConfig;
pub use crate::core::add::{add, add_numbers};
pub use crate::core::metadata::{fetch_metadata, VideoMetadataClient};
pub use crate::domain::model::{Metadata, Number, VideoRequest};
pub use crate::domain::ports::MetadataSource;
pub use crate::utils::error::{Result, SvcError};
