//! Product Catalog
//!
//! Data model and the pure filter/aggregate core the views are derived from.

pub mod aggregate;
pub mod product;

pub use aggregate::{
    category_counts, distinct_categories, filter_catalog, mean_price_by_category, CategoryFilter,
    ALL_CATEGORIES,
};
pub use product::Product;
