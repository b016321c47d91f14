use crate::{
    domain::{
        requests::{CreateProductRequest, CreateProductSpec, UpdateProductRequest},
        response::{
            ApiResponse, ProductDetailResponse, ProductListResponse, ProductTreeResponse,
            StatusResponse,
        },
    },
    model::{ProductTree, SubVariant, Variant},
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductTree>, RepositoryError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<ProductTree>, RepositoryError>;
    async fn find_variant_by_id(&self, variant_id: i32)
    -> Result<Option<Variant>, RepositoryError>;
    async fn find_sub_variant_by_id(
        &self,
        sub_variant_id: i32,
    ) -> Result<Option<SubVariant>, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        spec: &CreateProductSpec,
    ) -> Result<ProductTree, RepositoryError>;
    async fn rename_product(&self, product_id: i32, name: &str) -> Result<(), RepositoryError>;
    async fn rename_variant(&self, variant_id: i32, name: &str) -> Result<(), RepositoryError>;

    /// Direct set of option label and/or stock, bypassing the guarded
    /// add/remove path. The caller is responsible for validating the value.
    async fn override_sub_variant(
        &self,
        sub_variant_id: i32,
        option_label: Option<&str>,
        stock: Option<&BigDecimal>,
    ) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn list_products(&self) -> Result<ProductListResponse, ServiceError>;
    async fn find_by_code(
        &self,
        product_code: Option<&str>,
    ) -> Result<ProductDetailResponse, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        created_by: i32,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductTreeResponse>, ServiceError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<StatusResponse, ServiceError>;
}
