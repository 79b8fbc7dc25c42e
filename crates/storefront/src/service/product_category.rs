use crate::{
    abstract_trait::product_category::{
        DynProductCategoryRepository, ProductCategoryServiceTrait,
    },
    model::ProductCategory,
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::ContextTimeout};

#[derive(Clone)]
pub struct ProductCategoryService {
    repository: DynProductCategoryRepository,
    timeout: ContextTimeout,
}

impl ProductCategoryService {
    pub fn new(repository: DynProductCategoryRepository, timeout: ContextTimeout) -> Self {
        Self {
            repository,
            timeout,
        }
    }
}

#[async_trait]
impl ProductCategoryServiceTrait for ProductCategoryService {
    async fn find_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductCategory>, ServiceError> {
        self.timeout
            .scope()
            .run(self.repository.find_by_product_id(product_id))
            .await
    }

    async fn find_by_category_id(
        &self,
        category_id: i64,
    ) -> Result<Vec<ProductCategory>, ServiceError> {
        self.timeout
            .scope()
            .run(self.repository.find_by_category_id(category_id))
            .await
    }

    async fn create(&self, link: &mut ProductCategory) -> Result<(), ServiceError> {
        self.timeout.scope().run(self.repository.create(link)).await
    }

    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, ServiceError> {
        self.timeout
            .scope()
            .run(self.repository.delete_by_product_id(product_id))
            .await
    }

    async fn delete_by_category_id(&self, category_id: i64) -> Result<u64, ServiceError> {
        self.timeout
            .scope()
            .run(self.repository.delete_by_category_id(category_id))
            .await
    }
}
