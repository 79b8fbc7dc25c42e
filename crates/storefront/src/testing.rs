//! In-memory stand-ins for the Postgres repositories, used by orchestration and router tests.

use crate::{
    abstract_trait::{
        category::repository::{CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait},
        order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        product::repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        product_category::ProductCategoryRepositoryTrait,
        product_price::ProductPriceRepositoryTrait,
    },
    di::{DependenciesInject, Repositories},
    model::{Category, Order, Product, ProductCategory, ProductPrice},
    state::AppState,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{domain::Nullable, errors::RepositoryError, utils::ContextTimeout};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

/// Operations that can be forced to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    CreateLink,
    CreatePrice,
    DeleteLinksByProduct,
    DeletePricesByProduct,
}

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    categories: Vec<Category>,
    orders: Vec<Order>,
    links: Vec<ProductCategory>,
    prices: Vec<ProductPrice>,
    sequences: HashMap<&'static str, i64>,
    // Calls still allowed to succeed before the failure fires.
    failures: HashMap<Failure, usize>,
}

impl Tables {
    fn next_id(&mut self, table: &'static str) -> i64 {
        let id = self.sequences.entry(table).or_insert(0);
        *id += 1;
        *id
    }

    fn check(&mut self, failure: Failure) -> Result<(), RepositoryError> {
        match self.failures.get_mut(&failure) {
            Some(0) => Err(RepositoryError::Custom(format!("injected failure: {failure:?}"))),
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

fn page<T: Clone>(rows: impl Iterator<Item = T>, offset: i64, limit: i64) -> Vec<T> {
    rows.skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn fail(&self, failure: Failure) {
        self.fail_after(failure, 0);
    }

    /// Lets `successes` calls through, then fails every later one.
    pub fn fail_after(&self, failure: Failure, successes: usize) {
        self.lock().failures.insert(failure, successes);
    }

    pub fn repositories(&self) -> Repositories {
        let store = Arc::new(self.clone());
        Repositories {
            product_query: store.clone(),
            product_command: store.clone(),
            category_query: store.clone(),
            category_command: store.clone(),
            order_query: store.clone(),
            order_command: store.clone(),
            product_category: store.clone(),
            product_price: store,
        }
    }

    pub fn container(&self) -> DependenciesInject {
        DependenciesInject::new(
            self.repositories(),
            ContextTimeout::new(Duration::from_secs(5)),
        )
    }

    pub fn app_state(&self) -> AppState {
        AppState::from_container(self.container())
    }

    pub fn stored_product(&self, id: i64) -> Option<Product> {
        self.lock().products.iter().find(|p| p.id == id).cloned()
    }

    pub fn stored_order(&self, id: i64) -> Option<Order> {
        self.lock().orders.iter().find(|o| o.id == id).cloned()
    }

    pub fn links_of(&self, product_id: i64) -> Vec<ProductCategory> {
        self.lock()
            .links
            .iter()
            .filter(|l| l.product_id == product_id)
            .cloned()
            .collect()
    }

    pub fn prices_of(&self, product_id: i64) -> Vec<ProductPrice> {
        self.lock()
            .prices
            .iter()
            .filter(|p| p.product_id == product_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryStore {
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let tables = self.lock();
        let matches = tables
            .products
            .iter()
            .filter(|p| query.is_empty() || contains_ci(&p.name, query) || contains_ci(&p.sku, query));

        let found = matches.clone().count() as i64;
        Ok((page(matches.cloned(), offset, limit), found))
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.stored_product(id).ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryStore {
    async fn create(&self, product: &mut Product) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        product.id = tables.next_id("products");
        product.created = Utc::now();
        tables.products.push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        let Some(stored) = tables.products.iter_mut().find(|p| p.id == product.id) else {
            return Err(RepositoryError::AffectedRows(0));
        };

        stored.name = product.name.clone();
        stored.sku = product.sku.clone();
        stored.updated = Nullable::Value(product.updated.into_option().unwrap_or_else(Utc::now));
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        RepositoryError::expect_single_row((before - tables.products.len()) as u64)
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for InMemoryStore {
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Category>, i64), RepositoryError> {
        let tables = self.lock();
        let matches = tables
            .categories
            .iter()
            .filter(|c| query.is_empty() || contains_ci(&c.name, query));

        let found = matches.clone().count() as i64;
        Ok((page(matches.cloned(), offset, limit), found))
    }

    async fn find_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        self.lock()
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for InMemoryStore {
    async fn create(&self, category: &mut Category) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        category.id = tables.next_id("categories");
        category.created = Utc::now();
        tables.categories.push(category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        let Some(stored) = tables.categories.iter_mut().find(|c| c.id == category.id) else {
            return Err(RepositoryError::AffectedRows(0));
        };

        stored.name = category.name.clone();
        if !category.parent_id.is_absent() {
            stored.parent_id = category.parent_id;
        }
        stored.updated =
            Nullable::Value(category.updated.into_option().unwrap_or_else(Utc::now));
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        RepositoryError::expect_single_row((before - tables.categories.len()) as u64)
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryStore {
    async fn find_all(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Order>, i64), RepositoryError> {
        let tables = self.lock();
        let found = tables.orders.len() as i64;
        Ok((page(tables.orders.iter().cloned(), offset, limit), found))
    }

    async fn find_by_id(&self, id: i64) -> Result<Order, RepositoryError> {
        self.stored_order(id).ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryStore {
    async fn create(&self, order: &mut Order) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        order.id = tables.next_id("orders");
        order.created = Utc::now();
        tables.orders.push(order.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        let before = tables.orders.len();
        tables.orders.retain(|o| o.id != id);
        RepositoryError::expect_single_row((before - tables.orders.len()) as u64)
    }
}

#[async_trait]
impl ProductCategoryRepositoryTrait for InMemoryStore {
    async fn find_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductCategory>, RepositoryError> {
        Ok(self.links_of(product_id))
    }

    async fn find_by_category_id(
        &self,
        category_id: i64,
    ) -> Result<Vec<ProductCategory>, RepositoryError> {
        Ok(self
            .lock()
            .links
            .iter()
            .filter(|l| l.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn create(&self, link: &mut ProductCategory) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        tables.check(Failure::CreateLink)?;
        link.id = tables.next_id("product_category");
        tables.links.push(link.clone());
        Ok(())
    }

    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, RepositoryError> {
        let mut tables = self.lock();
        tables.check(Failure::DeleteLinksByProduct)?;
        let before = tables.links.len();
        tables.links.retain(|l| l.product_id != product_id);
        Ok((before - tables.links.len()) as u64)
    }

    async fn delete_by_category_id(&self, category_id: i64) -> Result<u64, RepositoryError> {
        let mut tables = self.lock();
        let before = tables.links.len();
        tables.links.retain(|l| l.category_id != category_id);
        Ok((before - tables.links.len()) as u64)
    }
}

#[async_trait]
impl ProductPriceRepositoryTrait for InMemoryStore {
    async fn find_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductPrice>, RepositoryError> {
        Ok(self.prices_of(product_id))
    }

    async fn find_by_amount(
        &self,
        product_id: i64,
        amount: i64,
    ) -> Result<ProductPrice, RepositoryError> {
        self.prices_of(product_id)
            .into_iter()
            .filter(|p| p.amount < amount)
            .max_by_key(|p| p.amount)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, price: &mut ProductPrice) -> Result<(), RepositoryError> {
        let mut tables = self.lock();
        tables.check(Failure::CreatePrice)?;
        price.id = tables.next_id("product_price");
        tables.prices.push(price.clone());
        Ok(())
    }

    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, RepositoryError> {
        let mut tables = self.lock();
        tables.check(Failure::DeletePricesByProduct)?;
        let before = tables.prices.len();
        tables.prices.retain(|p| p.product_id != product_id);
        Ok((before - tables.prices.len()) as u64)
    }
}
