use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::services::MediaUpload;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductForm, ProductListResponse, ProductResponse, UpdateProductForm,
};
use crate::api::tags::ApiTags;
use crate::api::uploads::{discard_staged, stage_upload};

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn invalid_id_response() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

fn staging_failed_response() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "InternalError".to_string(),
        message: "upload.staging_failed".to_string(),
    })
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting products with
/// hosted image attachments.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Uploads the supplied image files to the media host, then persists the
    /// product. The avatar file is required.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, form: CreateProductForm) -> CreateProductResponse {
        let Some(avatar) = form.avatar else {
            let (_, json) = ProductError::AvatarRequired.into_error_response();
            return CreateProductResponse::BadRequest(json);
        };

        let avatar = match stage_upload(avatar).await {
            Ok(file) => file,
            Err(_) => return CreateProductResponse::InternalError(staging_failed_response()),
        };
        let mut images: Vec<MediaUpload> = Vec::with_capacity(form.images.len());
        for upload in form.images {
            match stage_upload(upload).await {
                Ok(file) => images.push(file),
                Err(_) => {
                    // Earlier parts (avatar included) are already on disk.
                    images.push(avatar);
                    discard_staged(&images).await;
                    return CreateProductResponse::InternalError(staging_failed_response());
                }
            }
        }

        let params = CreateProductParams {
            name: form.name,
            price: form.price,
            avatar,
            images,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns every stored product plus the total count. An empty catalog
    /// is a normal 200 response.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let records: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(ProductListResponse {
                    total: records.len() as u64,
                    products: records,
                }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetProductByIdResponse::BadRequest(invalid_id_response()),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Omitted fields keep their previous value. Supplying new images
    /// replaces the whole image set; a new avatar replaces the old one.
    /// Superseded assets are deleted at the media host.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        form: UpdateProductForm,
    ) -> UpdateProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateProductResponse::BadRequest(invalid_id_response()),
        };

        let avatar = match form.avatar {
            Some(upload) => match stage_upload(upload).await {
                Ok(file) => Some(file),
                Err(_) => return UpdateProductResponse::InternalError(staging_failed_response()),
            },
            None => None,
        };

        // An empty images field means "keep the current set".
        let images = if form.images.is_empty() {
            None
        } else {
            let mut staged: Vec<MediaUpload> = Vec::with_capacity(form.images.len());
            for upload in form.images {
                match stage_upload(upload).await {
                    Ok(file) => staged.push(file),
                    Err(_) => {
                        // Earlier parts (a staged avatar included) are
                        // already on disk.
                        staged.extend(avatar);
                        discard_staged(&staged).await;
                        return UpdateProductResponse::InternalError(staging_failed_response());
                    }
                }
            }
            Some(staged)
        };

        let params = UpdateProductParams {
            id: uuid,
            name: form.name,
            price: form.price,
            avatar,
            images,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Deletes every hosted asset of the product, then removes the record.
    /// Responds with the deleted record.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteProductResponse::BadRequest(invalid_id_response()),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::product::model::Product;
    use mockall::mock;

    mock! {
        pub CreateUc {}

        #[async_trait]
        impl CreateProductUseCase for CreateUc {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub GetAllUc {}

        #[async_trait]
        impl GetAllProductsUseCase for GetAllUc {
            async fn execute(&self) -> Result<Vec<Product>, ProductError>;
        }
    }

    mock! {
        pub GetByIdUc {}

        #[async_trait]
        impl GetProductByIdUseCase for GetByIdUc {
            async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub UpdateUc {}

        #[async_trait]
        impl UpdateProductUseCase for UpdateUc {
            async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub DeleteUc {}

        #[async_trait]
        impl DeleteProductUseCase for DeleteUc {
            async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
        }
    }

    fn api_with(create: MockCreateUc, get_by_id: MockGetByIdUc) -> ProductApi {
        ProductApi::new(
            Arc::new(create),
            Arc::new(MockGetAllUc::new()),
            Arc::new(get_by_id),
            Arc::new(MockUpdateUc::new()),
            Arc::new(MockDeleteUc::new()),
        )
    }

    #[tokio::test]
    async fn should_reject_create_without_avatar_before_running_use_case() {
        let mut create = MockCreateUc::new();
        create.expect_execute().never();
        let api = api_with(create, MockGetByIdUc::new());

        let response = api
            .create_product(CreateProductForm {
                name: "Wooden Chair".to_string(),
                price: 49.0,
                avatar: None,
                images: vec![],
            })
            .await;

        match response {
            CreateProductResponse::BadRequest(json) => {
                assert_eq!(json.0.name, "ValidationError");
                assert_eq!(json.0.message, "product.avatar_required");
            }
            _ => panic!("expected a 400 response"),
        }
    }

    #[tokio::test]
    async fn should_reject_malformed_product_id_before_running_use_case() {
        let mut get_by_id = MockGetByIdUc::new();
        get_by_id.expect_execute().never();
        let api = api_with(MockCreateUc::new(), get_by_id);

        let response = api.get_product_by_id(Path("not-a-uuid".to_string())).await;

        match response {
            GetProductByIdResponse::BadRequest(json) => {
                assert_eq!(json.0.message, "product.invalid_id");
            }
            _ => panic!("expected a 400 response"),
        }
    }
}
