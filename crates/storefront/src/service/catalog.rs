use crate::{
    abstract_trait::{
        catalog::ProductCatalogServiceTrait, category::service::DynCategoryService,
        product::service::DynProductService, product_category::DynProductCategoryService,
        product_price::DynProductPriceService,
    },
    domain::{
        requests::product::{CreateProductRequest, PriceTierRequest, UpdateProductRequest},
        response::product::ProductDetailResponse,
    },
    model::{Product, ProductCategory, ProductPrice},
};
use async_trait::async_trait;
use shared::{domain::Nullable, errors::ServiceError};
use tracing::{error, info, warn};

/// Product workflows that touch several tables. Nothing here runs in a transaction:
/// a failure part-way leaves earlier writes in place.
#[derive(Clone)]
pub struct ProductCatalogService {
    product: DynProductService,
    category: DynCategoryService,
    product_category: DynProductCategoryService,
    product_price: DynProductPriceService,
}

impl ProductCatalogService {
    pub fn new(
        product: DynProductService,
        category: DynCategoryService,
        product_category: DynProductCategoryService,
        product_price: DynProductPriceService,
    ) -> Self {
        Self {
            product,
            category,
            product_category,
            product_price,
        }
    }

    async fn attach(
        &self,
        product_id: i64,
        category_ids: &[i64],
        tiers: &[PriceTierRequest],
    ) -> Result<(), ServiceError> {
        for &category_id in category_ids {
            let mut link = ProductCategory::new(product_id, category_id);
            self.product_category.create(&mut link).await.map_err(|e| {
                error!("❌ Failed to link product {product_id} to category {category_id}: {e}");
                e
            })?;
        }

        for tier in tiers {
            let mut price = ProductPrice::new(product_id, tier.amount, tier.price);
            self.product_price.create(&mut price).await.map_err(|e| {
                error!("❌ Failed to add price tier to product {product_id}: {e}");
                e
            })?;
        }

        Ok(())
    }

    async fn detach(&self, product_id: i64) -> Result<(), ServiceError> {
        let prices = self.product_price.delete_by_product_id(product_id).await?;
        let links = self.product_category.delete_by_product_id(product_id).await?;

        info!("🧹 Product {product_id}: removed {prices} price tier(s) and {links} link(s)");
        Ok(())
    }
}

#[async_trait]
impl ProductCatalogServiceTrait for ProductCatalogService {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, ServiceError> {
        let mut product = Product::new(req.name.clone(), req.sku.clone());
        self.product.create(&mut product).await?;

        self.attach(product.id, &req.category_id, &req.price).await?;

        info!(
            "✅ Product {} created with {} categories and {} price tier(s)",
            product.id,
            req.category_id.len(),
            req.price.len()
        );
        Ok(product)
    }

    async fn update_product(&self, req: &UpdateProductRequest) -> Result<Product, ServiceError> {
        let original = self.product.find_by_id(req.id).await?;

        let mut product = Product {
            id: req.id,
            name: req.name.clone(),
            sku: req.sku.clone(),
            created: original.created,
            updated: Nullable::Absent,
        };
        self.product.update(&mut product).await?;

        if let Err(e) = self.detach(req.id).await {
            error!("❌ Failed to clear associations of product {}: {e}", req.id);

            // Only the product row is restored; removed prices and links stay removed.
            let mut revert = original;
            if let Err(revert_err) = self.product.update(&mut revert).await {
                error!("❌ Failed to revert product {}: {revert_err}", req.id);
            }
            return Err(e);
        }

        self.attach(req.id, &req.category_id, &req.price).await?;

        info!("✅ Product {} updated", req.id);
        Ok(product)
    }

    async fn product_detail(&self, id: i64) -> Result<ProductDetailResponse, ServiceError> {
        let product = self.product.find_by_id(id).await?;
        let links = self.product_category.find_by_product_id(id).await?;

        let mut categories = Vec::with_capacity(links.len());
        for link in links {
            match self.category.find_by_id(link.category_id).await {
                Ok(category) => categories.push(category),
                Err(e) => warn!(
                    "⚠️ Skipping category {} of product {id}: {e}",
                    link.category_id
                ),
            }
        }

        Ok(ProductDetailResponse::new(product, categories))
    }

    async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        self.product.delete(id).await?;

        let links = self.product_category.clone();
        tokio::spawn(async move {
            if let Err(e) = links.delete_by_product_id(id).await {
                warn!("⚠️ Failed to clean up category links of product {id}: {e}");
            }
        });

        Ok(())
    }

    async fn delete_category(&self, id: i64) -> Result<(), ServiceError> {
        self.category.delete(id).await?;

        let links = self.product_category.clone();
        tokio::spawn(async move {
            if let Err(e) = links.delete_by_category_id(id).await {
                warn!("⚠️ Failed to clean up product links of category {id}: {e}");
            }
        });

        Ok(())
    }
}
