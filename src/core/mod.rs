pub mod add;
pub mod metadata;

pub use crate::domain::model::{Metadata, Number, VideoRequest};
pub use crate::domain::ports::MetadataSource;
pub use crate::utils::error::Result;
