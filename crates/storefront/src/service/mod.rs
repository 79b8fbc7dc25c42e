mod catalog;
mod category;
mod order;
mod product;
mod product_category;
mod product_price;

pub use self::catalog::ProductCatalogService;
pub use self::category::CategoryService;
pub use self::order::OrderService;
pub use self::product::ProductService;
pub use self::product_category::ProductCategoryService;
pub use self::product_price::ProductPriceService;
