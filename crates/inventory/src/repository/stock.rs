use crate::{
    abstract_trait::StockCommandRepositoryTrait, model::SubVariant,
    repository::refresh_total_stock,
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct StockCommandRepository {
    db: ConnectionPool,
}

impl StockCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    /// Locks the sub-variant row for the remainder of the transaction so the
    /// read-modify-write below cannot interleave with a concurrent mutation.
    async fn lock_sub_variant(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        sub_variant_id: i32,
    ) -> Result<Option<SubVariant>, RepositoryError> {
        let row = sqlx::query_as::<_, SubVariant>(
            r#"
            SELECT sub_variant_id, variant_id, option_label, stock
            FROM sub_variants
            WHERE sub_variant_id = $1
            FOR UPDATE
            "#,
        )
        .bind(sub_variant_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn apply_delta(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        sub_variant_id: i32,
        delta: &BigDecimal,
    ) -> Result<SubVariant, RepositoryError> {
        let updated = sqlx::query_as::<_, SubVariant>(
            r#"
            UPDATE sub_variants
            SET stock = stock + $2
            WHERE sub_variant_id = $1
            RETURNING sub_variant_id, variant_id, option_label, stock
            "#,
        )
        .bind(sub_variant_id)
        .bind(delta)
        .fetch_one(&mut **tx)
        .await
        .map_err(RepositoryError::from)?;

        Ok(updated)
    }
}

#[async_trait]
impl StockCommandRepositoryTrait for StockCommandRepository {
    async fn add_stock(
        &self,
        sub_variant_id: i32,
        quantity: &BigDecimal,
    ) -> Result<SubVariant, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        if Self::lock_sub_variant(&mut tx, sub_variant_id).await?.is_none() {
            return Err(RepositoryError::NotFound);
        }

        let updated = Self::apply_delta(&mut tx, sub_variant_id, quantity).await?;

        refresh_total_stock(&mut tx, sub_variant_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Added stock to sub-variant ID {} (new stock: {})",
            updated.sub_variant_id, updated.stock
        );
        Ok(updated)
    }

    async fn remove_stock(
        &self,
        sub_variant_id: i32,
        quantity: &BigDecimal,
    ) -> Result<SubVariant, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let Some(current) = Self::lock_sub_variant(&mut tx, sub_variant_id).await? else {
            return Err(RepositoryError::NotFound);
        };

        if current.stock < *quantity {
            // Dropping the transaction rolls back; nothing is applied.
            error!(
                "❌ Insufficient stock on sub-variant ID {sub_variant_id}: available {}, requested {quantity}",
                current.stock
            );
            return Err(RepositoryError::InsufficientStock {
                available: current.stock,
                requested: quantity.clone(),
            });
        }

        let updated = Self::apply_delta(&mut tx, sub_variant_id, &-quantity.clone()).await?;

        refresh_total_stock(&mut tx, sub_variant_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Removed stock from sub-variant ID {} (new stock: {})",
            updated.sub_variant_id, updated.stock
        );
        Ok(updated)
    }
}
