use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, CreateProductSpec, UpdateProductRequest, VariantSpec},
        response::{ApiResponse, ProductTreeResponse, StatusResponse},
    },
    service::stock::STOCK_SCALE,
    utils::generate_product_code,
};
use async_trait::async_trait;
use bigdecimal::{BigDecimal, FromPrimitive, RoundingMode};
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

/// Regeneration attempts when an auto-generated code collides with an
/// existing product.
const MAX_CODE_ATTEMPTS: usize = 3;

pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Administrative stock override: zero is a legal target level, negatives
/// and non-finite values are not.
fn parse_stock_override(raw: f64) -> Result<BigDecimal, ServiceError> {
    if !raw.is_finite() || raw < 0.0 {
        return Err(ServiceError::validation("Invalid stock value"));
    }

    BigDecimal::from_f64(raw)
        .map(|value| value.with_scale_round(STOCK_SCALE, RoundingMode::HalfEven))
        .ok_or_else(|| ServiceError::validation("Invalid stock value"))
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        created_by: i32,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductTreeResponse>, ServiceError> {
        // Entries without a name or without options are dropped silently;
        // the request only fails when nothing usable remains.
        let varients: Vec<VariantSpec> = req
            .varients
            .iter()
            .filter(|entry| !entry.name.trim().is_empty() && !entry.options.is_empty())
            .cloned()
            .collect();

        if req.name.trim().is_empty() || varients.is_empty() {
            return Err(ServiceError::validation(
                "Product name and varients are required",
            ));
        }

        let supplied_code = non_empty(req.product_code.as_ref());
        let mut attempt = 0;

        let tree = loop {
            attempt += 1;

            let product_code = supplied_code
                .map(str::to_string)
                .unwrap_or_else(generate_product_code);

            let spec = CreateProductSpec {
                product_code,
                name: req.name.trim().to_string(),
                created_by,
                varients: varients.clone(),
            };

            match self.command.create_product(&spec).await {
                Err(RepositoryError::Conflict(constraint)) if constraint == "product_code" => {
                    if supplied_code.is_some() {
                        return Err(ServiceError::validation("Product code already exists"));
                    }
                    if attempt >= MAX_CODE_ATTEMPTS {
                        return Err(ServiceError::Internal(
                            "Could not allocate a unique product code".to_string(),
                        ));
                    }
                    info!("⚠️ Generated product code collided, regenerating");
                }
                Err(RepositoryError::AlreadyExists(message)) => {
                    return Err(ServiceError::validation(message));
                }
                Err(err) => return Err(ServiceError::Repo(err)),
                Ok(tree) => break tree,
            }
        };

        info!(
            "✅ Product {} created by user ID {created_by}",
            tree.product.product_code
        );

        Ok(ApiResponse::success(
            "Successfully created",
            201,
            ProductTreeResponse::from(tree),
        ))
    }

    async fn update_product(&self, req: &UpdateProductRequest) -> Result<StatusResponse, ServiceError> {
        // Historical quirk kept on purpose: a missing product code is
        // answered with a 200 no-op, not an error.
        let Some(code) = non_empty(req.product_code.as_ref()) else {
            return Ok(StatusResponse::success(
                "Product code is required to update product",
            ));
        };

        let tree = self
            .query
            .find_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product not found".to_string()))?;

        if let Some(name) = non_empty(req.product_name.as_ref()) {
            self.command
                .rename_product(tree.product.product_id, name)
                .await?;
        }

        // Sub-variant fields are only reachable through a resolving
        // variant ID; an unknown ID is skipped silently.
        if let Some(variant_id) = req.varient_id {
            let variant = self
                .query
                .find_variant_by_id(variant_id)
                .await?
                .filter(|variant| variant.product_id == tree.product.product_id);

            if let Some(variant) = variant {
                if let Some(name) = non_empty(req.varient_name.as_ref()) {
                    self.command
                        .rename_variant(variant.variant_id, name)
                        .await?;
                }

                if let Some(sub_variant_id) = req.sub_varient_id {
                    let sub_variant = self
                        .query
                        .find_sub_variant_by_id(sub_variant_id)
                        .await?
                        .filter(|sub| sub.variant_id == variant.variant_id);

                    if let Some(sub_variant) = sub_variant {
                        let option_label = non_empty(req.sub_varient_option.as_ref());
                        let stock = req
                            .sub_varient_stock
                            .map(parse_stock_override)
                            .transpose()?;

                        if option_label.is_some() || stock.is_some() {
                            self.command
                                .override_sub_variant(
                                    sub_variant.sub_variant_id,
                                    option_label,
                                    stock.as_ref(),
                                )
                                .await?;
                        }
                    }
                }
            }
        }

        info!("🔄 Product {code} updated");

        Ok(StatusResponse::success("Product updated successfully"))
    }
}
