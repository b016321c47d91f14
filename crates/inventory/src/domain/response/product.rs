use crate::model::{ProductTree, SubVariant, VariantTree};
use bigdecimal::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nested product representation. Field names (`ProductID`, `varients`,
/// `sub_varients`, ...) preserve the original wire contract.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductTreeResponse {
    pub id: i32,

    #[serde(rename = "ProductID")]
    pub product_number: i64,

    #[serde(rename = "ProductCode")]
    pub product_code: String,

    #[serde(rename = "ProductName")]
    pub name: String,

    #[serde(rename = "TotalStock")]
    pub total_stock: f64,

    pub varients: Vec<VariantResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct VariantResponse {
    pub id: i32,
    pub name: String,
    pub sub_varients: Vec<SubVariantResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SubVariantResponse {
    pub id: i32,
    pub option: String,
    pub stock: f64,
}

impl From<SubVariant> for SubVariantResponse {
    fn from(value: SubVariant) -> Self {
        SubVariantResponse {
            id: value.sub_variant_id,
            option: value.option_label,
            stock: value.stock.to_f64().unwrap_or_default(),
        }
    }
}

impl From<VariantTree> for VariantResponse {
    fn from(value: VariantTree) -> Self {
        VariantResponse {
            id: value.variant.variant_id,
            name: value.variant.name,
            sub_varients: value
                .sub_variants
                .into_iter()
                .map(SubVariantResponse::from)
                .collect(),
        }
    }
}

impl From<ProductTree> for ProductTreeResponse {
    fn from(value: ProductTree) -> Self {
        ProductTreeResponse {
            id: value.product.product_id,
            product_number: value.product.product_number,
            product_code: value.product.product_code,
            name: value.product.name,
            total_stock: value.product.total_stock.to_f64().unwrap_or_default(),
            varients: value.variants.into_iter().map(VariantResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductListResponse {
    pub status: String,
    pub message: String,
    pub response_code: u16,
    pub products: Vec<ProductTreeResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductDetailResponse {
    pub status: String,
    pub message: String,
    pub response_code: u16,
    pub product: ProductTreeResponse,
}
