use crate::{
    abstract_trait::{DynStockCommandRepository, StockCommandServiceTrait},
    domain::{
        requests::StockMutationRequest,
        response::{ApiResponse, StockResponse},
    },
};
use async_trait::async_trait;
use bigdecimal::{BigDecimal, FromPrimitive, RoundingMode};
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

/// Stock quantities are kept at a fixed scale of eight decimal places.
pub(crate) const STOCK_SCALE: i64 = 8;

pub struct StockCommandService {
    repository: DynStockCommandRepository,
}

impl StockCommandService {
    pub fn new(repository: DynStockCommandRepository) -> Self {
        Self { repository }
    }
}

/// Turns the wire-level `f64` quantity into the internal decimal. Rejects
/// a missing quantity, NaN/infinity and anything not strictly positive.
pub(crate) fn parse_quantity(stock: Option<f64>) -> Result<BigDecimal, ServiceError> {
    let raw = stock.ok_or_else(|| ServiceError::validation("Stock quantity is missing"))?;

    if !raw.is_finite() || raw <= 0.0 {
        return Err(ServiceError::validation("Invalid stock quantity"));
    }

    BigDecimal::from_f64(raw)
        .map(|quantity| quantity.with_scale_round(STOCK_SCALE, RoundingMode::HalfEven))
        .ok_or_else(|| ServiceError::validation("Invalid stock quantity"))
}

fn map_sub_variant_error(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::NotFound("Sub-varient not found".to_string()),
        other => ServiceError::Repo(other),
    }
}

#[async_trait]
impl StockCommandServiceTrait for StockCommandService {
    async fn add_stock(
        &self,
        req: &StockMutationRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError> {
        let sub_variant_id = req
            .sub_varient_id
            .ok_or_else(|| ServiceError::validation("Sub-varient ID is missing"))?;
        let quantity = parse_quantity(req.stock)?;

        let updated = self
            .repository
            .add_stock(sub_variant_id, &quantity)
            .await
            .map_err(map_sub_variant_error)?;

        info!(
            "📦 Added {quantity} to sub-variant ID {sub_variant_id}, now {}",
            updated.stock
        );

        Ok(ApiResponse::success(
            "Stock added successfully",
            200,
            StockResponse::from(updated),
        ))
    }

    async fn remove_stock(
        &self,
        req: &StockMutationRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError> {
        let sub_variant_id = req
            .sub_varient_id
            .ok_or_else(|| ServiceError::validation("Sub-varient ID is missing"))?;
        let quantity = parse_quantity(req.stock)?;

        let updated = self
            .repository
            .remove_stock(sub_variant_id, &quantity)
            .await
            .map_err(map_sub_variant_error)?;

        info!(
            "📦 Removed {quantity} from sub-variant ID {sub_variant_id}, now {}",
            updated.stock
        );

        Ok(ApiResponse::success(
            "Stock removed successfully",
            200,
            StockResponse::from(updated),
        ))
    }
}
