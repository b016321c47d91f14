use crate::{
    abstract_trait::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
    model::User,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, username, password, created_at, updated_at FROM users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, username, password, created_at, updated_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }
}

#[derive(Clone)]
pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, created_at)
            VALUES ($1, $2, CURRENT_TIMESTAMP)
            RETURNING user_id, username, password, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| match err.as_database_error() {
            Some(db_err) if db_err.code().as_deref() == Some("23505") => {
                RepositoryError::AlreadyExists("Username already taken".to_string())
            }
            _ => RepositoryError::from(err),
        })?;

        Ok(user)
    }
}
