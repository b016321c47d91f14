mod product;
mod stock;
mod user;

pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::stock::{
    DynStockCommandRepository, DynStockCommandService, StockCommandRepositoryTrait,
    StockCommandServiceTrait,
};
pub use self::user::{
    AuthServiceTrait, DynAuthService, DynUserCommandRepository, DynUserQueryRepository,
    UserCommandRepositoryTrait, UserQueryRepositoryTrait,
};
