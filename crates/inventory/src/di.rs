use crate::{
    abstract_trait::{
        DynAuthService, DynProductCommandService, DynProductQueryService, DynStockCommandService,
        DynUserQueryRepository,
    },
    repository::{ProductRepository, StockCommandRepository, UserCommandRepository, UserQueryRepository},
    service::{AuthService, ProductCommandService, ProductQueryService, StockCommandService},
};
use shared::{
    abstract_trait::DynJwtService,
    config::{ConnectionPool, Hashing},
};
use std::{fmt, sync::Arc};

/// Wires repositories into services once at startup; handlers only ever
/// see the trait objects.
#[derive(Clone)]
pub struct DependenciesInject {
    pub auth: DynAuthService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub stock_command: DynStockCommandService,
    pub user_query: DynUserQueryRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth", &"AuthService")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("stock_command", &"StockCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, jwt: DynJwtService) -> Self {
        let products = ProductRepository::new(pool.clone());
        let stock_repo = Arc::new(StockCommandRepository::new(pool.clone()));

        let user_query: DynUserQueryRepository = Arc::new(UserQueryRepository::new(pool.clone()));
        let user_command = Arc::new(UserCommandRepository::new(pool));

        let hashing = Arc::new(Hashing::new());

        let auth: DynAuthService = Arc::new(AuthService::new(
            user_query.clone(),
            user_command,
            hashing,
            jwt,
        ));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(products.query.clone()));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            products.query.clone(),
            products.command.clone(),
        ));

        let stock_command: DynStockCommandService =
            Arc::new(StockCommandService::new(stock_repo));

        Self {
            auth,
            product_query,
            product_command,
            stock_command,
            user_query,
        }
    }
}
