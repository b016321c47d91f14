use crate::model::SubVariant;
use bigdecimal::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StockResponse {
    pub sub_varient_id: i32,
    pub stock: f64,
}

impl From<SubVariant> for StockResponse {
    fn from(value: SubVariant) -> Self {
        StockResponse {
            sub_varient_id: value.sub_variant_id,
            stock: value.stock.to_f64().unwrap_or_default(),
        }
    }
}
