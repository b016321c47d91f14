mod api;
mod product;
mod stock;
mod token;

pub use self::api::{ApiResponse, StatusResponse};
pub use self::product::{
    ProductDetailResponse, ProductListResponse, ProductTreeResponse, SubVariantResponse,
    VariantResponse,
};
pub use self::stock::StockResponse;
pub use self::token::TokenResponse;
