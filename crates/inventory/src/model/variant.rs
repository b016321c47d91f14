use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Variant {
    pub variant_id: i32,
    pub product_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubVariant {
    pub sub_variant_id: i32,
    pub variant_id: i32,
    pub option_label: String,
    pub stock: BigDecimal,
}
