use async_trait::async_trait;
use reqwest::multipart;
use serde_json::json;

use business::domain::product::errors::ProductError;
use business::domain::product::services::{MediaStoreService, MediaUpload};
use business::domain::product::value_objects::{AssetId, AssetRef};

use crate::client::MediaClient;

/// Media-host adapter: multipart upload of staged files, JSON destroy calls.
pub struct MediaStoreHttp {
    client: MediaClient,
}

impl MediaStoreHttp {
    pub fn new(client: MediaClient) -> Self {
        Self { client }
    }

    fn parse_upload_response(data: &serde_json::Value) -> Option<AssetRef> {
        let url = data["secure_url"].as_str()?;
        let id = data["public_id"].as_str()?;
        Some(AssetRef::new(id, url))
    }
}

#[async_trait]
impl MediaStoreService for MediaStoreHttp {
    async fn upload(&self, file: &MediaUpload) -> Result<AssetRef, ProductError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|_| ProductError::UploadFailed)?;

        let file_name = file
            .file_name
            .clone()
            .unwrap_or_else(|| "upload.bin".to_string());
        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(file_name))
            .text("folder", self.client.folder.clone());

        let response = self
            .client
            .client
            .post(self.client.upload_url())
            .header("Authorization", self.client.auth_header())
            .multipart(form)
            .send()
            .await
            .map_err(|_| ProductError::UploadFailed)?;

        if !response.status().is_success() {
            return Err(ProductError::UploadFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ProductError::UploadFailed)?;

        Self::parse_upload_response(&data).ok_or(ProductError::UploadFailed)
    }

    async fn destroy(&self, id: &AssetId) -> Result<(), ProductError> {
        let body = json!({ "public_id": id.as_str() });

        let response = self
            .client
            .client
            .post(self.client.destroy_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| ProductError::AssetDeleteFailed)?;

        if !response.status().is_success() {
            return Err(ProductError::AssetDeleteFailed);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_url_and_id_from_upload_response() {
        let data = json!({
            "secure_url": "https://media.example.com/catalog/abc123.jpg",
            "public_id": "catalog/abc123",
            "bytes": 48213,
        });

        let asset = MediaStoreHttp::parse_upload_response(&data).unwrap();
        assert_eq!(asset.url, "https://media.example.com/catalog/abc123.jpg");
        assert_eq!(asset.id.as_str(), "catalog/abc123");
    }

    #[test]
    fn should_reject_upload_response_missing_public_id() {
        let data = json!({ "secure_url": "https://media.example.com/abc123.jpg" });
        assert!(MediaStoreHttp::parse_upload_response(&data).is_none());
    }
}
