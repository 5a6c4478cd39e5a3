use chrono::{DateTime, Utc};
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};

use business::domain::product::model::Product;

/// Multipart form for creating a product.
#[derive(Debug, Multipart)]
pub struct CreateProductForm {
    /// Product name (4-50 characters)
    pub name: String,
    /// Product price (positive, bounded)
    pub price: f64,
    /// Avatar image file (required)
    pub avatar: Option<Upload>,
    /// Additional image files
    pub images: Vec<Upload>,
}

/// Multipart form for updating a product. Omitted fields keep their
/// previous value; supplying images replaces the whole set.
#[derive(Debug, Multipart)]
pub struct UpdateProductForm {
    /// Product name (4-50 characters)
    pub name: Option<String>,
    /// Product price (positive, bounded)
    pub price: Option<f64>,
    /// Replacement avatar image file
    pub avatar: Option<Upload>,
    /// Replacement image files
    pub images: Vec<Upload>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
    /// Hosted avatar image URL
    pub avatar: String,
    /// Media-host id of the avatar asset
    pub avatar_media_id: String,
    /// Hosted additional image URLs
    pub images: Vec<String>,
    /// Media-host ids of the additional image assets, same order as `images`
    pub media_ids: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price,
            avatar: product.avatar.url,
            avatar_media_id: product.avatar.id.to_string(),
            images: product.images.iter().map(|i| i.url.clone()).collect(),
            media_ids: product.images.iter().map(|i| i.id.to_string()).collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// All products plus the total count.
#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    /// The total number of products
    pub total: u64,
    /// The product records
    pub products: Vec<ProductResponse>,
}
