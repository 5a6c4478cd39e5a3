use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::{MediaStoreService, MediaUpload};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub media_store: Arc<dyn MediaStoreService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        // Uploads run one at a time; earlier uploads are not rolled back
        // when a later one fails.
        let mut images = Vec::with_capacity(params.images.len());
        for file in &params.images {
            let asset = self.media_store.upload(file).await?;
            self.remove_staged_file(file).await;
            images.push(asset);
        }

        let avatar = self.media_store.upload(&params.avatar).await?;
        self.remove_staged_file(&params.avatar).await;

        let product = Product::new(NewProductProps {
            name: params.name,
            price: params.price,
            avatar,
            images,
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

impl CreateProductUseCaseImpl {
    /// Staged files are disposable once uploaded; a leftover is logged, not fatal.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::{AssetId, AssetRef};
    use mockall::mock;
    use std::path::PathBuf;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub MediaStore {}

        #[async_trait]
        impl MediaStoreService for MediaStore {
            async fn upload(&self, file: &MediaUpload) -> Result<AssetRef, ProductError>;
            async fn destroy(&self, id: &AssetId) -> Result<(), ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn staged(name: &str) -> MediaUpload {
        MediaUpload {
            path: PathBuf::from(format!("/tmp/missing-staged-{name}")),
            file_name: Some(name.to_string()),
        }
    }

    fn upload_by_file_name() -> MockMediaStore {
        let mut media = MockMediaStore::new();
        media.expect_upload().returning(|file| {
            let stem = file.file_name.clone().unwrap_or_default();
            Ok(AssetRef::new(
                format!("id-{stem}"),
                format!("https://media.example.com/id-{stem}.jpg"),
            ))
        });
        media
    }

    #[tokio::test]
    async fn should_create_product_with_avatar_and_images() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media_store: Arc::new(upload_by_file_name()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Wooden Chair".to_string(),
                price: 49.0,
                avatar: staged("front.jpg"),
                images: vec![staged("side.jpg"), staged("back.jpg")],
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Wooden Chair");
        assert_eq!(product.images.len(), 2);
        assert!(product.avatar.url.starts_with("https://"));
        assert!(product.images.iter().all(|i| i.url.starts_with("https://")));
    }

    #[tokio::test]
    async fn should_reject_invalid_name_after_uploads() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media_store: Arc::new(upload_by_file_name()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "ab".to_string(),
                price: 49.0,
                avatar: staged("front.jpg"),
                images: vec![],
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameLength));
    }

    #[tokio::test]
    async fn should_fail_without_saving_when_upload_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let mut mock_media = MockMediaStore::new();
        mock_media
            .expect_upload()
            .returning(|_| Err(ProductError::UploadFailed));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media_store: Arc::new(mock_media),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Wooden Chair".to_string(),
                price: 49.0,
                avatar: staged("front.jpg"),
                images: vec![staged("side.jpg")],
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::UploadFailed));
    }

    #[tokio::test]
    async fn should_remove_staged_files_after_successful_upload() {
        let dir = tempfile::tempdir().unwrap();
        let avatar_path = dir.path().join("front.jpg");
        let image_path = dir.path().join("side.jpg");
        std::fs::write(&avatar_path, b"avatar-bytes").unwrap();
        std::fs::write(&image_path, b"image-bytes").unwrap();

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media_store: Arc::new(upload_by_file_name()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Wooden Chair".to_string(),
                price: 49.0,
                avatar: MediaUpload {
                    path: avatar_path.clone(),
                    file_name: Some("front.jpg".to_string()),
                },
                images: vec![MediaUpload {
                    path: image_path.clone(),
                    file_name: Some("side.jpg".to_string()),
                }],
            })
            .await;

        assert!(result.is_ok());
        assert!(!avatar_path.exists());
        assert!(!image_path.exists());
    }
}
