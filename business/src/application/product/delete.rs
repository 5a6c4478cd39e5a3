use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::MediaStoreService;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::value_objects::AssetId;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub media_store: Arc<dyn MediaStoreService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // Hosted assets go first; a failed destroy orphans the asset but
        // does not block removal of the document.
        for image in &product.images {
            self.destroy_best_effort(&image.id).await;
        }
        self.destroy_best_effort(&product.avatar.id).await;

        self.repository.delete(product.id).await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(product)
    }
}

impl DeleteProductUseCaseImpl {
    async fn destroy_best_effort(&self, id: &AssetId) {
        if let Err(e) = self.media_store.destroy(id).await {
            self.logger
                .warn(&format!("Failed to delete media asset {}: {}", id, e));
        }
    }
}
