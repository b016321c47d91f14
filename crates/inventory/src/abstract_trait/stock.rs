use crate::{
    domain::{requests::StockMutationRequest, response::{ApiResponse, StockResponse}},
    model::SubVariant,
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynStockCommandRepository = Arc<dyn StockCommandRepositoryTrait + Send + Sync>;
pub type DynStockCommandService = Arc<dyn StockCommandServiceTrait + Send + Sync>;

/// Atomic stock deltas. Implementations must apply each mutation as a
/// single read-modify-write (row lock or equivalent) so that concurrent
/// mutations against the same sub-variant never lose updates.
#[async_trait]
pub trait StockCommandRepositoryTrait {
    async fn add_stock(
        &self,
        sub_variant_id: i32,
        quantity: &BigDecimal,
    ) -> Result<SubVariant, RepositoryError>;

    /// Rejects with `InsufficientStock` (nothing applied) when the current
    /// stock is below `quantity`.
    async fn remove_stock(
        &self,
        sub_variant_id: i32,
        quantity: &BigDecimal,
    ) -> Result<SubVariant, RepositoryError>;
}

#[async_trait]
pub trait StockCommandServiceTrait {
    async fn add_stock(
        &self,
        req: &StockMutationRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError>;
    async fn remove_stock(
        &self,
        req: &StockMutationRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError>;
}
