use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    model::{Product, ProductTree, SubVariant, Variant},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductTree>, RepositoryError> {
        info!("🔍 Fetching all products with variant trees");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, product_number, product_code, name, created_by,
                   is_favourite, active, hsn_code, total_stock, created_at, updated_at
            FROM products
            ORDER BY created_at DESC, product_number
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let variants = sqlx::query_as::<_, Variant>(
            "SELECT variant_id, product_id, name FROM variants ORDER BY variant_id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let sub_variants = sqlx::query_as::<_, SubVariant>(
            r#"
            SELECT sub_variant_id, variant_id, option_label, stock
            FROM sub_variants
            ORDER BY sub_variant_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(ProductTree::assemble(products, variants, sub_variants))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ProductTree>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, product_number, product_code, name, created_by,
                   is_favourite, active, hsn_code, total_stock, created_at, updated_at
            FROM products
            WHERE product_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let Some(product) = product else {
            return Ok(None);
        };

        let variants = sqlx::query_as::<_, Variant>(
            "SELECT variant_id, product_id, name FROM variants WHERE product_id = $1 ORDER BY variant_id",
        )
        .bind(product.product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let variant_ids: Vec<i32> = variants.iter().map(|v| v.variant_id).collect();

        let sub_variants = sqlx::query_as::<_, SubVariant>(
            r#"
            SELECT sub_variant_id, variant_id, option_label, stock
            FROM sub_variants
            WHERE variant_id = ANY($1)
            ORDER BY sub_variant_id
            "#,
        )
        .bind(&variant_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(ProductTree::assemble(vec![product], variants, sub_variants).pop())
    }

    async fn find_variant_by_id(
        &self,
        variant_id: i32,
    ) -> Result<Option<Variant>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let variant = sqlx::query_as::<_, Variant>(
            "SELECT variant_id, product_id, name FROM variants WHERE variant_id = $1",
        )
        .bind(variant_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(variant)
    }

    async fn find_sub_variant_by_id(
        &self,
        sub_variant_id: i32,
    ) -> Result<Option<SubVariant>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sub_variant = sqlx::query_as::<_, SubVariant>(
            r#"
            SELECT sub_variant_id, variant_id, option_label, stock
            FROM sub_variants
            WHERE sub_variant_id = $1
            "#,
        )
        .bind(sub_variant_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(sub_variant)
    }
}
