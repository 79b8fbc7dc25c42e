pub mod catalog;
pub mod category;
pub mod order;
pub mod product;
pub mod product_category;
pub mod product_price;
