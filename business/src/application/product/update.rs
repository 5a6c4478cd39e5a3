use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::{MediaStoreService, MediaUpload};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::AssetId;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub media_store: Arc<dyn MediaStoreService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let name = params.name.unwrap_or(existing.name);
        let price = params.price.unwrap_or(existing.price);
        Product::validate_name(&name)?;
        Product::validate_price(price)?;

        // New image set replaces the old one wholesale. Old assets are
        // destroyed first; a failed destroy orphans the asset at the media
        // host but does not fail the request.
        let images = match params.images {
            Some(files) => {
                for old in &existing.images {
                    self.destroy_best_effort(&old.id).await;
                }
                let mut replaced = Vec::with_capacity(files.len());
                for file in &files {
                    let asset = self.media_store.upload(file).await?;
                    self.remove_staged_file(file).await;
                    replaced.push(asset);
                }
                replaced
            }
            None => existing.images,
        };

        let avatar = match params.avatar {
            Some(file) => {
                self.destroy_best_effort(&existing.avatar.id).await;
                let asset = self.media_store.upload(&file).await?;
                self.remove_staged_file(&file).await;
                asset
            }
            None => existing.avatar,
        };

        let updated = Product::from_repository(
            existing.id,
            name,
            price,
            avatar,
            images,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

impl UpdateProductUseCaseImpl {
    async fn destroy_best_effort(&self, id: &AssetId) {
        if let Err(e) = self.media_store.destroy(id).await {
            self.logger
                .warn(&format!("Failed to delete media asset {}: {}", id, e));
        }
    }

    async fn remove_staged_file(&self, file: &MediaUpload) {
        if let Err(e) = tokio::fs::remove_file(&file.path).await {
            self.logger.warn(&format!(
                "Failed to remove staged file {}: {}",
                file.path.display(),
                e
            ));
        }
    }
}
