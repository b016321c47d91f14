use crate::{
    abstract_trait::{AuthServiceTrait, DynUserCommandRepository, DynUserQueryRepository},
    domain::{
        requests::{LoginRequest, RegisterRequest},
        response::{ApiResponse, TokenResponse},
    },
    model::User,
};
use async_trait::async_trait;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    errors::{RepositoryError, ServiceError},
};
use tracing::info;

pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
            jwt,
        }
    }

    fn issue_tokens(&self, user: &User) -> Result<TokenResponse, ServiceError> {
        let access_token = self.jwt.generate_token(user.user_id as i64, "access")?;
        let refresh_token = self.jwt.generate_token(user.user_id as i64, "refresh")?;

        Ok(TokenResponse {
            username: user.username.clone(),
            access_token,
            refresh_token,
        })
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        if self.query.find_by_username(&req.username).await?.is_some() {
            return Err(ServiceError::validation("Username already taken"));
        }

        let password_hash = self.hashing.hash_password(&req.password).await?;

        let user = self
            .command
            .create_user(&req.username, &password_hash)
            .await
            .map_err(|err| match err {
                // Lost the race against a concurrent registration.
                RepositoryError::AlreadyExists(message) => ServiceError::validation(message),
                other => ServiceError::Repo(other),
            })?;

        info!("🔐 Registered user {}", user.username);

        let tokens = self.issue_tokens(&user)?;
        Ok(ApiResponse::success("Registration successful", 201, tokens))
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user = self
            .query
            .find_by_username(&req.username)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &req.password)
            .await?;

        info!("🔓 User {} logged in", user.username);

        let tokens = self.issue_tokens(&user)?;
        Ok(ApiResponse::success("Login successful", 200, tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::FakeUserRepository;
    use shared::config::{Hashing, JwtConfig};
    use std::sync::Arc;

    fn service() -> AuthService {
        let users = Arc::new(FakeUserRepository::new());
        AuthService::new(
            users.clone(),
            users,
            Arc::new(Hashing::new()),
            Arc::new(JwtConfig::new("test-secret")),
        )
    }

    fn register_request(username: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[tokio::test]
    async fn register_issues_both_tokens() {
        let svc = service();

        let response = svc.register(&register_request("alice")).await.unwrap();

        assert_eq!(response.response_code, 201);
        assert_eq!(response.message, "Registration successful");
        assert_eq!(response.data.username, "alice");
        assert!(!response.data.access_token.is_empty());
        assert!(!response.data.refresh_token.is_empty());
        assert_ne!(response.data.access_token, response.data.refresh_token);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let svc = service();
        svc.register(&register_request("alice")).await.unwrap();

        let err = svc.register(&register_request("alice")).await.unwrap_err();

        assert!(err.to_string().contains("Username already taken"));
    }

    #[tokio::test]
    async fn login_round_trip() {
        let svc = service();
        svc.register(&register_request("alice")).await.unwrap();

        let response = svc
            .login(&LoginRequest {
                username: "alice".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.response_code, 200);
        assert_eq!(response.message, "Login successful");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_identical() {
        let svc = service();
        svc.register(&register_request("alice")).await.unwrap();

        let wrong_password = svc
            .login(&LoginRequest {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_user = svc
            .login(&LoginRequest {
                username: "bob".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }
}
