//! In-memory repository fakes for service tests.

use crate::{
    abstract_trait::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, StockCommandRepositoryTrait,
        UserCommandRepositoryTrait, UserQueryRepositoryTrait,
    },
    domain::requests::CreateProductSpec,
    model::{Product, ProductTree, SubVariant, User, Variant, VariantTree},
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use shared::errors::RepositoryError;
use std::{
    collections::HashMap,
    str::FromStr,
    sync::Mutex,
};

pub(crate) fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

/// Sub-variants of one product, plus the product's cached stock total.
/// The total is recomputed from the sub-variants inside the same critical
/// section as every mutation, mirroring the lock-then-recompute the real
/// repository does per transaction.
#[derive(Default)]
pub(crate) struct FakeStockRepository {
    state: Mutex<FakeStockState>,
}

#[derive(Default)]
struct FakeStockState {
    subs: HashMap<i32, SubVariant>,
    total: BigDecimal,
}

impl FakeStockState {
    fn refresh_total(&mut self) {
        self.total = self.subs.values().map(|sub| sub.stock.clone()).sum();
    }
}

impl FakeStockRepository {
    pub fn with_sub_variant(sub_variant_id: i32, option_label: &str, stock: &str) -> Self {
        let repo = Self::default();
        repo.add_sub_variant(sub_variant_id, option_label, stock);
        repo
    }

    pub fn add_sub_variant(&self, sub_variant_id: i32, option_label: &str, stock: &str) {
        let mut state = self.state.lock().unwrap();
        state.subs.insert(
            sub_variant_id,
            SubVariant {
                sub_variant_id,
                variant_id: 1,
                option_label: option_label.to_string(),
                stock: dec(stock),
            },
        );
        state.refresh_total();
    }

    pub fn stock_of(&self, sub_variant_id: i32) -> BigDecimal {
        self.state.lock().unwrap().subs[&sub_variant_id].stock.clone()
    }

    pub fn total_stock(&self) -> BigDecimal {
        self.state.lock().unwrap().total.clone()
    }
}

#[async_trait]
impl StockCommandRepositoryTrait for FakeStockRepository {
    async fn add_stock(
        &self,
        sub_variant_id: i32,
        quantity: &BigDecimal,
    ) -> Result<SubVariant, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let sub = state
            .subs
            .get_mut(&sub_variant_id)
            .ok_or(RepositoryError::NotFound)?;

        sub.stock = &sub.stock + quantity;
        let updated = sub.clone();
        state.refresh_total();
        Ok(updated)
    }

    async fn remove_stock(
        &self,
        sub_variant_id: i32,
        quantity: &BigDecimal,
    ) -> Result<SubVariant, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let sub = state
            .subs
            .get_mut(&sub_variant_id)
            .ok_or(RepositoryError::NotFound)?;

        if sub.stock < *quantity {
            return Err(RepositoryError::InsufficientStock {
                available: sub.stock.clone(),
                requested: quantity.clone(),
            });
        }

        sub.stock = &sub.stock - quantity;
        let updated = sub.clone();
        state.refresh_total();
        Ok(updated)
    }
}

#[derive(Default)]
pub(crate) struct FakeProductRepository {
    pub trees: Mutex<Vec<ProductTree>>,
    counters: Mutex<Counters>,
}

#[derive(Default)]
struct Counters {
    product: i32,
    variant: i32,
    sub_variant: i32,
}

impl FakeProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, tree: ProductTree) {
        self.trees.lock().unwrap().push(tree);
    }

    pub fn tree(product_id: i32, product_code: &str, name: &str) -> ProductTree {
        ProductTree {
            product: Product {
                product_id,
                product_number: product_id as i64,
                product_code: product_code.to_string(),
                name: name.to_string(),
                created_by: 1,
                is_favourite: false,
                active: true,
                hsn_code: None,
                total_stock: BigDecimal::from(0),
                created_at: None,
                updated_at: None,
            },
            variants: vec![VariantTree {
                variant: Variant {
                    variant_id: product_id * 10,
                    product_id,
                    name: "Size".to_string(),
                },
                sub_variants: vec![SubVariant {
                    sub_variant_id: product_id * 100,
                    variant_id: product_id * 10,
                    option_label: "M".to_string(),
                    stock: BigDecimal::from(0),
                }],
            }],
        }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for FakeProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductTree>, RepositoryError> {
        Ok(self.trees.lock().unwrap().clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ProductTree>, RepositoryError> {
        Ok(self
            .trees
            .lock()
            .unwrap()
            .iter()
            .find(|tree| tree.product.product_code == code)
            .cloned())
    }

    async fn find_variant_by_id(
        &self,
        variant_id: i32,
    ) -> Result<Option<Variant>, RepositoryError> {
        Ok(self
            .trees
            .lock()
            .unwrap()
            .iter()
            .flat_map(|tree| tree.variants.iter())
            .find(|entry| entry.variant.variant_id == variant_id)
            .map(|entry| entry.variant.clone()))
    }

    async fn find_sub_variant_by_id(
        &self,
        sub_variant_id: i32,
    ) -> Result<Option<SubVariant>, RepositoryError> {
        Ok(self
            .trees
            .lock()
            .unwrap()
            .iter()
            .flat_map(|tree| tree.variants.iter())
            .flat_map(|entry| entry.sub_variants.iter())
            .find(|sub| sub.sub_variant_id == sub_variant_id)
            .cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for FakeProductRepository {
    async fn create_product(
        &self,
        spec: &CreateProductSpec,
    ) -> Result<ProductTree, RepositoryError> {
        let mut trees = self.trees.lock().unwrap();

        if trees
            .iter()
            .any(|tree| tree.product.product_code == spec.product_code)
        {
            return Err(RepositoryError::Conflict("product_code".to_string()));
        }

        let mut counters = self.counters.lock().unwrap();
        counters.product += 1;

        let product_number = trees
            .iter()
            .map(|tree| tree.product.product_number)
            .max()
            .unwrap_or(0)
            + 1;

        let product = Product {
            product_id: counters.product,
            product_number,
            product_code: spec.product_code.clone(),
            name: spec.name.clone(),
            created_by: spec.created_by,
            is_favourite: false,
            active: true,
            hsn_code: None,
            total_stock: BigDecimal::from(0),
            created_at: None,
            updated_at: None,
        };

        let mut variants = Vec::new();

        for entry in &spec.varients {
            counters.variant += 1;

            let variant = Variant {
                variant_id: counters.variant,
                product_id: product.product_id,
                name: entry.name.clone(),
            };

            let mut sub_variants = Vec::new();

            for option in &entry.options {
                counters.sub_variant += 1;

                sub_variants.push(SubVariant {
                    sub_variant_id: counters.sub_variant,
                    variant_id: variant.variant_id,
                    option_label: option.clone(),
                    stock: BigDecimal::from(0),
                });
            }

            let mut seen = Vec::new();
            for sub in &sub_variants {
                if seen.contains(&&sub.option_label) {
                    return Err(RepositoryError::AlreadyExists(
                        "Duplicate option for the same varient".to_string(),
                    ));
                }
                seen.push(&sub.option_label);
            }

            variants.push(VariantTree {
                variant,
                sub_variants,
            });
        }

        let tree = ProductTree { product, variants };
        trees.push(tree.clone());

        Ok(tree)
    }

    async fn rename_product(&self, product_id: i32, name: &str) -> Result<(), RepositoryError> {
        let mut trees = self.trees.lock().unwrap();
        let tree = trees
            .iter_mut()
            .find(|tree| tree.product.product_id == product_id)
            .ok_or(RepositoryError::NotFound)?;

        tree.product.name = name.to_string();
        Ok(())
    }

    async fn rename_variant(&self, variant_id: i32, name: &str) -> Result<(), RepositoryError> {
        let mut trees = self.trees.lock().unwrap();
        let entry = trees
            .iter_mut()
            .flat_map(|tree| tree.variants.iter_mut())
            .find(|entry| entry.variant.variant_id == variant_id)
            .ok_or(RepositoryError::NotFound)?;

        entry.variant.name = name.to_string();
        Ok(())
    }

    async fn override_sub_variant(
        &self,
        sub_variant_id: i32,
        option_label: Option<&str>,
        stock: Option<&BigDecimal>,
    ) -> Result<(), RepositoryError> {
        let mut trees = self.trees.lock().unwrap();

        let tree = trees
            .iter_mut()
            .find(|tree| {
                tree.variants.iter().any(|entry| {
                    entry
                        .sub_variants
                        .iter()
                        .any(|sub| sub.sub_variant_id == sub_variant_id)
                })
            })
            .ok_or(RepositoryError::NotFound)?;

        for entry in &mut tree.variants {
            for sub in &mut entry.sub_variants {
                if sub.sub_variant_id == sub_variant_id {
                    if let Some(label) = option_label {
                        sub.option_label = label.to_string();
                    }
                    if let Some(value) = stock {
                        sub.stock = value.clone();
                    }
                }
            }
        }

        tree.product.total_stock = tree
            .variants
            .iter()
            .flat_map(|entry| entry.sub_variants.iter())
            .map(|sub| sub.stock.clone())
            .sum();
        tree.product.updated_at = Some(chrono::Utc::now().naive_utc());

        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeUserRepository {
    users: Mutex<Vec<User>>,
}

impl FakeUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for FakeUserRepository {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.user_id == user_id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for FakeUserRepository {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|user| user.username == username) {
            return Err(RepositoryError::AlreadyExists(
                "Username already taken".to_string(),
            ));
        }

        let user = User {
            user_id: users.len() as i32 + 1,
            username: username.to_string(),
            password: password_hash.to_string(),
            created_at: None,
            updated_at: None,
        };

        users.push(user.clone());
        Ok(user)
    }
}
