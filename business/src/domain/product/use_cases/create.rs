use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::services::MediaUpload;

pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub avatar: MediaUpload,
    pub images: Vec<MediaUpload>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
