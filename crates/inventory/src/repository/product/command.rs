use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    domain::requests::CreateProductSpec,
    model::{Product, ProductTree, SubVariant, Variant, VariantTree},
    repository::refresh_total_stock,
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

/// Retries for the read-max-then-insert product number allocation. The
/// unique constraint turns a concurrent allocation into a conflict instead
/// of a duplicate, and the loop re-reads the new maximum.
const MAX_NUMBER_ALLOCATION_ATTEMPTS: usize = 3;

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn try_create(&self, spec: &CreateProductSpec) -> Result<ProductTree, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (product_number, product_code, name, created_by, total_stock, created_at)
            VALUES (
                (SELECT COALESCE(MAX(product_number), 0) + 1 FROM products),
                $1, $2, $3, 0, CURRENT_TIMESTAMP
            )
            RETURNING product_id, product_number, product_code, name, created_by,
                      is_favourite, active, hsn_code, total_stock, created_at, updated_at
            "#,
        )
        .bind(&spec.product_code)
        .bind(&spec.name)
        .bind(spec.created_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(classify_insert_error)?;

        let mut variants = Vec::with_capacity(spec.varients.len());

        for entry in &spec.varients {
            let variant = sqlx::query_as::<_, Variant>(
                r#"
                INSERT INTO variants (product_id, name)
                VALUES ($1, $2)
                RETURNING variant_id, product_id, name
                "#,
            )
            .bind(product.product_id)
            .bind(&entry.name)
            .fetch_one(&mut *tx)
            .await
            .map_err(classify_insert_error)?;

            let mut sub_variants = Vec::with_capacity(entry.options.len());

            for option in &entry.options {
                let sub_variant = sqlx::query_as::<_, SubVariant>(
                    r#"
                    INSERT INTO sub_variants (variant_id, option_label, stock)
                    VALUES ($1, $2, 0)
                    RETURNING sub_variant_id, variant_id, option_label, stock
                    "#,
                )
                .bind(variant.variant_id)
                .bind(option)
                .fetch_one(&mut *tx)
                .await
                .map_err(classify_insert_error)?;

                sub_variants.push(sub_variant);
            }

            variants.push(VariantTree {
                variant,
                sub_variants,
            });
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(ProductTree { product, variants })
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        spec: &CreateProductSpec,
    ) -> Result<ProductTree, RepositoryError> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.try_create(spec).await {
                Err(RepositoryError::Conflict(constraint))
                    if constraint == "product_number"
                        && attempt < MAX_NUMBER_ALLOCATION_ATTEMPTS =>
                {
                    info!(
                        "⚠️ product_number allocation conflict, retrying (attempt {attempt})"
                    );
                    continue;
                }
                Err(err) => {
                    error!("❌ Failed to create product {}: {err}", spec.name);
                    return Err(err);
                }
                Ok(tree) => {
                    info!(
                        "✅ Created product ID {} ({})",
                        tree.product.product_id, tree.product.name
                    );
                    return Ok(tree);
                }
            }
        }
    }

    async fn rename_product(&self, product_id: i32, name: &str) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            "UPDATE products SET name = $2, updated_at = CURRENT_TIMESTAMP WHERE product_id = $1",
        )
        .bind(product_id)
        .bind(name)
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🔄 Renamed product ID {product_id}");
        Ok(())
    }

    async fn rename_variant(&self, variant_id: i32, name: &str) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("UPDATE variants SET name = $2 WHERE variant_id = $1")
            .bind(variant_id)
            .bind(name)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🔄 Renamed variant ID {variant_id}");
        Ok(())
    }

    async fn override_sub_variant(
        &self,
        sub_variant_id: i32,
        option_label: Option<&str>,
        stock: Option<&BigDecimal>,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE sub_variants
            SET option_label = COALESCE($2, option_label),
                stock = COALESCE($3, stock)
            WHERE sub_variant_id = $1
            "#,
        )
        .bind(sub_variant_id)
        .bind(option_label)
        .bind(stock)
        .execute(&mut *tx)
        .await
        .map_err(classify_insert_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        // Unconditional: keeps the cached total consistent and stamps the
        // parent's updated_at even for a label-only change.
        refresh_total_stock(&mut tx, sub_variant_id).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔧 Overrode sub-variant ID {sub_variant_id}");
        Ok(())
    }
}

/// Maps Postgres unique violations to domain conflicts, keyed by the
/// constraint that fired.
fn classify_insert_error(err: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.code().as_deref() == Some("23505") {
            return match db_err.constraint() {
                Some("products_product_number_key") => {
                    RepositoryError::Conflict("product_number".to_string())
                }
                Some("products_product_code_key") => {
                    RepositoryError::Conflict("product_code".to_string())
                }
                Some("sub_variants_variant_id_option_label_key") => RepositoryError::AlreadyExists(
                    "Duplicate option for the same varient".to_string(),
                ),
                other => RepositoryError::Conflict(other.unwrap_or("unique").to_string()),
            };
        }
    }

    RepositoryError::from(err)
}
