mod category;
mod order;
mod product;
mod product_category;
mod product_price;

pub use self::category::Category;
pub use self::order::{Order, OrderStatus};
pub use self::product::Product;
pub use self::product_category::ProductCategory;
pub use self::product_price::ProductPrice;
