use crate::{
    abstract_trait::product_price::{DynProductPriceRepository, ProductPriceServiceTrait},
    model::ProductPrice,
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::ContextTimeout};

#[derive(Clone)]
pub struct ProductPriceService {
    repository: DynProductPriceRepository,
    timeout: ContextTimeout,
}

impl ProductPriceService {
    pub fn new(repository: DynProductPriceRepository, timeout: ContextTimeout) -> Self {
        Self {
            repository,
            timeout,
        }
    }
}

#[async_trait]
impl ProductPriceServiceTrait for ProductPriceService {
    async fn find_by_product_id(&self, product_id: i64) -> Result<Vec<ProductPrice>, ServiceError> {
        self.timeout
            .scope()
            .run(self.repository.find_by_product_id(product_id))
            .await
    }

    async fn find_by_amount(
        &self,
        product_id: i64,
        amount: i64,
    ) -> Result<ProductPrice, ServiceError> {
        self.timeout
            .scope()
            .run(self.repository.find_by_amount(product_id, amount))
            .await
    }

    async fn create(&self, price: &mut ProductPrice) -> Result<(), ServiceError> {
        self.timeout.scope().run(self.repository.create(price)).await
    }

    async fn delete_by_product_id(&self, product_id: i64) -> Result<u64, ServiceError> {
        self.timeout
            .scope()
            .run(self.repository.delete_by_product_id(product_id))
            .await
    }
}
