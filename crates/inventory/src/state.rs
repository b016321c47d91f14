use crate::di::DependenciesInject;
use shared::{
    abstract_trait::DynJwtService,
    config::{Config, ConnectionPool, JwtConfig},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let jwt_config: DynJwtService = Arc::new(JwtConfig::new(&config.jwt_secret));
        let di_container = DependenciesInject::new(pool, jwt_config.clone());

        Self {
            di_container,
            jwt_config,
        }
    }
}
