mod auth;
mod product;
mod stock;

#[cfg(test)]
pub(crate) mod testing;

pub use self::auth::AuthService;
pub use self::product::{ProductCommandService, ProductQueryService};
pub use self::stock::StockCommandService;
