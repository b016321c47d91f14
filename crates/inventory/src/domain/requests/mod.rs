mod auth;
mod product;
mod stock;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::product::{
    CreateProductRequest, CreateProductSpec, ProductDetailQuery, UpdateProductRequest, VariantSpec,
};
pub use self::stock::StockMutationRequest;
