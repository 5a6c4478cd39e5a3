use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::AssetRef;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub avatar_url: String,
    pub avatar_media_id: Option<String>,
    pub image_urls: Vec<String>,
    pub image_media_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        // Rows written before the media-id columns existed fall back to
        // deriving the asset id from the hosted URL.
        let avatar = match self.avatar_media_id {
            Some(id) => AssetRef::new(id, self.avatar_url),
            None => AssetRef::from_url(self.avatar_url),
        };

        let mut ids = self.image_media_ids.into_iter();
        let images = self
            .image_urls
            .into_iter()
            .map(|url| match ids.next() {
                Some(id) => AssetRef::new(id, url),
                None => AssetRef::from_url(url),
            })
            .collect();

        Product::from_repository(
            self.id,
            self.name,
            self.price,
            avatar,
            images,
            self.created_at,
            self.updated_at,
        )
    }
}
