#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.name_length")]
    NameLength,
    #[error("product.price_out_of_range")]
    PriceOutOfRange,
    #[error("product.avatar_required")]
    AvatarRequired,
    #[error("product.not_found")]
    NotFound,
    #[error("media.upload_failed")]
    UploadFailed,
    #[error("media.delete_failed")]
    AssetDeleteFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
