use crate::{
    abstract_trait::{
        catalog::DynProductCatalogService,
        category::{
            repository::{DynCategoryCommandRepository, DynCategoryQueryRepository},
            service::DynCategoryService,
        },
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::DynOrderService,
        },
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::DynProductService,
        },
        product_category::{DynProductCategoryRepository, DynProductCategoryService},
        product_price::{DynProductPriceRepository, DynProductPriceService},
    },
    repository::{
        CategoryCommandRepository, CategoryQueryRepository, OrderCommandRepository,
        OrderQueryRepository, ProductCategoryRepository, ProductCommandRepository,
        ProductPriceRepository, ProductQueryRepository,
    },
    service::{
        CategoryService, OrderService, ProductCatalogService, ProductCategoryService,
        ProductPriceService, ProductService,
    },
};
use shared::{config::ConnectionPool, utils::ContextTimeout};
use std::{fmt, sync::Arc};

/// Store-facing implementations the use cases are built on.
#[derive(Clone)]
pub struct Repositories {
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub category_query: DynCategoryQueryRepository,
    pub category_command: DynCategoryCommandRepository,
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub product_category: DynProductCategoryRepository,
    pub product_price: DynProductPriceRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            product_query: Arc::new(ProductQueryRepository::new(pool.clone())),
            product_command: Arc::new(ProductCommandRepository::new(pool.clone())),
            category_query: Arc::new(CategoryQueryRepository::new(pool.clone())),
            category_command: Arc::new(CategoryCommandRepository::new(pool.clone())),
            order_query: Arc::new(OrderQueryRepository::new(pool.clone())),
            order_command: Arc::new(OrderCommandRepository::new(pool.clone())),
            product_category: Arc::new(ProductCategoryRepository::new(pool.clone())),
            product_price: Arc::new(ProductPriceRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub category_service: DynCategoryService,
    pub product_service: DynProductService,
    pub order_service: DynOrderService,
    pub product_category_service: DynProductCategoryService,
    pub product_price_service: DynProductPriceService,
    pub catalog_service: DynProductCatalogService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("category_service", &"CategoryService")
            .field("product_service", &"ProductService")
            .field("order_service", &"OrderService")
            .field("product_category_service", &"ProductCategoryService")
            .field("product_price_service", &"ProductPriceService")
            .field("catalog_service", &"ProductCatalogService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(repositories: Repositories, timeout: ContextTimeout) -> Self {
        let Repositories {
            product_query,
            product_command,
            category_query,
            category_command,
            order_query,
            order_command,
            product_category,
            product_price,
        } = repositories;

        let category_service: DynCategoryService = Arc::new(CategoryService::new(
            category_query,
            category_command,
            timeout,
        ));
        let product_service: DynProductService = Arc::new(ProductService::new(
            product_query,
            product_command,
            timeout,
        ));
        let order_service: DynOrderService =
            Arc::new(OrderService::new(order_query, order_command, timeout));
        let product_category_service: DynProductCategoryService =
            Arc::new(ProductCategoryService::new(product_category, timeout));
        let product_price_service: DynProductPriceService =
            Arc::new(ProductPriceService::new(product_price, timeout));

        let catalog_service: DynProductCatalogService = Arc::new(ProductCatalogService::new(
            product_service.clone(),
            category_service.clone(),
            product_category_service.clone(),
            product_price_service.clone(),
        ));

        Self {
            category_service,
            product_service,
            order_service,
            product_category_service,
            product_price_service,
            catalog_service,
        }
    }
}
