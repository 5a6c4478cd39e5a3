use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::services::MediaUpload;

/// Fields left as `None` keep their previous value. Supplying `images`
/// replaces the whole image set; partial replacement is not supported.
pub struct UpdateProductParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub avatar: Option<MediaUpload>,
    pub images: Option<Vec<MediaUpload>>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
