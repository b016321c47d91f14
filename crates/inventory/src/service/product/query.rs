use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::response::{ProductDetailResponse, ProductListResponse, ProductTreeResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

pub struct ProductQueryService {
    repository: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(repository: DynProductQueryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn list_products(&self) -> Result<ProductListResponse, ServiceError> {
        let trees = self.repository.find_all().await?;

        info!("📋 Listing {} products", trees.len());

        Ok(ProductListResponse {
            status: "Success".to_string(),
            message: "Products list fetched successfully".to_string(),
            response_code: 200,
            products: trees.into_iter().map(ProductTreeResponse::from).collect(),
        })
    }

    async fn find_by_code(
        &self,
        product_code: Option<&str>,
    ) -> Result<ProductDetailResponse, ServiceError> {
        let code = product_code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| ServiceError::validation("Product code is missing"))?;

        let tree = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product not found".to_string()))?;

        Ok(ProductDetailResponse {
            status: "Success".to_string(),
            message: "Product details fetched successfully".to_string(),
            response_code: 200,
            product: ProductTreeResponse::from(tree),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::FakeProductRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn list_products_returns_every_tree() {
        let repo = Arc::new(FakeProductRepository::new());
        repo.seed(FakeProductRepository::tree(1, "PRD-AAAAAAAA", "Shirt"));
        repo.seed(FakeProductRepository::tree(2, "PRD-BBBBBBBB", "Mug"));

        let svc = ProductQueryService::new(repo);
        let response = svc.list_products().await.unwrap();

        assert_eq!(response.message, "Products list fetched successfully");
        assert_eq!(response.products.len(), 2);
        assert_eq!(response.products[0].product_code, "PRD-AAAAAAAA");
    }

    #[tokio::test]
    async fn missing_code_is_a_validation_error() {
        let svc = ProductQueryService::new(Arc::new(FakeProductRepository::new()));

        for empty in [None, Some(""), Some("   ")] {
            let err = svc.find_by_code(empty).await.unwrap_err();
            assert!(err.to_string().contains("Product code is missing"));
        }
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let svc = ProductQueryService::new(Arc::new(FakeProductRepository::new()));

        let err = svc.find_by_code(Some("PRD-MISSING1")).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(err.to_string().contains("Product not found"));
    }

    #[tokio::test]
    async fn detail_includes_the_variant_tree() {
        let repo = Arc::new(FakeProductRepository::new());
        repo.seed(FakeProductRepository::tree(1, "PRD-AAAAAAAA", "Shirt"));

        let svc = ProductQueryService::new(repo);
        let response = svc.find_by_code(Some("PRD-AAAAAAAA")).await.unwrap();

        assert_eq!(response.message, "Product details fetched successfully");
        assert_eq!(response.product.name, "Shirt");
        assert_eq!(response.product.varients.len(), 1);
        assert_eq!(response.product.varients[0].sub_varients[0].option, "M");
    }
}
