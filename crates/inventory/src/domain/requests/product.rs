use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Body of POST /api/add-product. The wire names (including `varients`)
/// are the original contract and are kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub varients: Vec<VariantSpec>,

    #[serde(default)]
    pub product_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VariantSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub options: Vec<String>,
}

/// Repository input for product creation: the code has already been
/// generated and the variant entries already filtered.
#[derive(Debug, Clone)]
pub struct CreateProductSpec {
    pub product_code: String,
    pub name: String,
    pub created_by: i32,
    pub varients: Vec<VariantSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams, ToSchema)]
pub struct ProductDetailQuery {
    pub product_code: Option<String>,
}

/// Body of POST /api/update-stock, the administrative override path.
/// Every field is optional; the original nesting rules apply (sub-variant
/// fields are only considered when `varient_id` resolves).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub product_code: Option<String>,

    #[serde(default)]
    pub product_name: Option<String>,

    #[serde(default)]
    pub varient_id: Option<i32>,

    #[serde(default)]
    pub varient_name: Option<String>,

    #[serde(default)]
    pub sub_varient_id: Option<i32>,

    #[serde(default)]
    pub sub_varient_option: Option<String>,

    #[serde(default)]
    pub sub_varient_stock: Option<f64>,
}
