use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;
pub type DynHashing = Arc<dyn HashingTrait + Send + Sync>;

/// Token issuance and verification for the authentication boundary. Handlers
/// never decode tokens themselves; they receive an already-verified principal.
pub trait JwtServiceTrait {
    fn generate_token(&self, user_id: i64, token_type: &str) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str, expected_type: &str) -> Result<i64, ServiceError>;
}

#[async_trait]
pub trait HashingTrait {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError>;
    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError>;
}
