use crate::model::variant::{SubVariant, Variant};
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_number: i64,
    pub product_code: String,
    pub name: String,
    pub created_by: i32,
    pub is_favourite: bool,
    pub active: bool,
    pub hsn_code: Option<String>,
    pub total_stock: BigDecimal,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Fully materialized product aggregate. Repositories return these so the
/// aggregation stays free of hidden IO.
#[derive(Debug, Clone)]
pub struct ProductTree {
    pub product: Product,
    pub variants: Vec<VariantTree>,
}

#[derive(Debug, Clone)]
pub struct VariantTree {
    pub variant: Variant,
    pub sub_variants: Vec<SubVariant>,
}

impl ProductTree {
    /// Groups flat rows into product → variant → sub-variant trees,
    /// preserving the row order of `products`.
    pub fn assemble(
        products: Vec<Product>,
        variants: Vec<Variant>,
        sub_variants: Vec<SubVariant>,
    ) -> Vec<ProductTree> {
        let mut subs_by_variant: std::collections::HashMap<i32, Vec<SubVariant>> =
            std::collections::HashMap::new();
        for sub in sub_variants {
            subs_by_variant.entry(sub.variant_id).or_default().push(sub);
        }

        let mut variants_by_product: std::collections::HashMap<i32, Vec<VariantTree>> =
            std::collections::HashMap::new();
        for variant in variants {
            let sub_variants = subs_by_variant
                .remove(&variant.variant_id)
                .unwrap_or_default();
            variants_by_product
                .entry(variant.product_id)
                .or_default()
                .push(VariantTree {
                    variant,
                    sub_variants,
                });
        }

        products
            .into_iter()
            .map(|product| {
                let variants = variants_by_product
                    .remove(&product.product_id)
                    .unwrap_or_default();
                ProductTree { product, variants }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn product(id: i32, number: i64) -> Product {
        Product {
            product_id: id,
            product_number: number,
            product_code: format!("PRD-{id:04}"),
            name: format!("product-{id}"),
            created_by: 1,
            is_favourite: false,
            active: true,
            hsn_code: None,
            total_stock: BigDecimal::from(0),
            created_at: None,
            updated_at: None,
        }
    }

    fn variant(id: i32, product_id: i32) -> Variant {
        Variant {
            variant_id: id,
            product_id,
            name: format!("variant-{id}"),
        }
    }

    fn sub_variant(id: i32, variant_id: i32) -> SubVariant {
        SubVariant {
            sub_variant_id: id,
            variant_id,
            option_label: format!("option-{id}"),
            stock: BigDecimal::from(0),
        }
    }

    #[test]
    fn assembles_nested_trees_in_product_order() {
        let products = vec![product(1, 1), product(2, 2)];
        let variants = vec![variant(10, 1), variant(11, 1), variant(12, 2)];
        let subs = vec![
            sub_variant(100, 10),
            sub_variant(101, 10),
            sub_variant(102, 11),
            sub_variant(103, 12),
        ];

        let trees = ProductTree::assemble(products, variants, subs);

        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].product.product_id, 1);
        assert_eq!(trees[0].variants.len(), 2);
        assert_eq!(trees[0].variants[0].sub_variants.len(), 2);
        assert_eq!(trees[0].variants[1].sub_variants.len(), 1);
        assert_eq!(trees[1].variants.len(), 1);
        assert_eq!(trees[1].variants[0].sub_variants[0].sub_variant_id, 103);
    }

    #[test]
    fn product_without_variants_gets_empty_tree() {
        let trees = ProductTree::assemble(vec![product(1, 1)], vec![], vec![]);

        assert_eq!(trees.len(), 1);
        assert!(trees[0].variants.is_empty());
    }
}
