use crate::domain::model::{Metadata, VideoRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch_metadata(&self, request: &VideoRequest) -> Result<Metadata>;
}
