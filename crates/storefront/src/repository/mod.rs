mod category;
mod order;
mod product;
mod product_category;
mod product_price;

pub use self::category::{CategoryCommandRepository, CategoryQueryRepository};
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::product_category::ProductCategoryRepository;
pub use self::product_price::ProductPriceRepository;

/// Turns a free-text query into a case-insensitive `LIKE` pattern, or `None` to match
/// everything. LIKE wildcards in the input are matched literally.
pub(crate) fn like_pattern(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');

    Some(pattern)
}
