use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of POST /api/add-stock and /api/remove-stock. Both fields are
/// optional on the wire so the service can report which one is missing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StockMutationRequest {
    #[serde(default)]
    pub sub_varient_id: Option<i32>,

    #[serde(default)]
    pub stock: Option<f64>,
}
