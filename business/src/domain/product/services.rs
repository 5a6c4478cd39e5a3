use std::path::PathBuf;

use async_trait::async_trait;

use super::errors::ProductError;
use super::value_objects::{AssetId, AssetRef};

/// A file staged on local disk, ready to be pushed to the media host.
/// The staged file is removed by the caller once the upload succeeds.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub path: PathBuf,
    pub file_name: Option<String>,
}

/// Port to the external media host: upload a staged file, get back the
/// hosted URL plus the opaque id, and destroy assets by id.
#[async_trait]
pub trait MediaStoreService: Send + Sync {
    async fn upload(&self, file: &MediaUpload) -> Result<AssetRef, ProductError>;
    async fn destroy(&self, id: &AssetId) -> Result<(), ProductError>;
}
