mod product;
mod stock;
mod user;

pub use self::product::ProductRepository;
pub use self::stock::StockCommandRepository;
pub use self::user::{UserCommandRepository, UserQueryRepository};

use shared::errors::RepositoryError;
use sqlx::{Postgres, Transaction};

/// Recomputes the parent product's cached `total_stock` from its sub-variant
/// rows, inside the caller's transaction. Every stock mutation goes through
/// this so the cache is never stale.
///
/// The parent row lock is taken in its own statement, before the sum. A
/// concurrent mutation of a sibling sub-variant blocks here, and once it
/// commits the recompute below runs on a fresh snapshot that includes the
/// sibling's change. Folding lock and sum into one UPDATE would let the
/// post-block re-check reuse the old snapshot and write a stale total.
pub(crate) async fn refresh_total_stock(
    tx: &mut Transaction<'_, Postgres>,
    sub_variant_id: i32,
) -> Result<(), RepositoryError> {
    let product_id: i32 = sqlx::query_scalar(
        r#"
        SELECT p.product_id
        FROM products p
        JOIN variants v ON v.product_id = p.product_id
        JOIN sub_variants s ON s.variant_id = v.variant_id
        WHERE s.sub_variant_id = $1
        FOR UPDATE OF p
        "#,
    )
    .bind(sub_variant_id)
    .fetch_one(&mut **tx)
    .await
    .map_err(RepositoryError::from)?;

    sqlx::query(
        r#"
        UPDATE products
        SET total_stock = (
                SELECT COALESCE(SUM(s.stock), 0)
                FROM variants v
                JOIN sub_variants s ON s.variant_id = v.variant_id
                WHERE v.product_id = $1
            ),
            updated_at = CURRENT_TIMESTAMP
        WHERE product_id = $1
        "#,
    )
    .bind(product_id)
    .execute(&mut **tx)
    .await
    .map_err(RepositoryError::from)?;

    Ok(())
}
