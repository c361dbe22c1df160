//! Filter & Aggregate
//!
//! Pure functions deriving the view data: category filtering, per-category
//! counts and mean prices. Everything here is recomputed from the current
//! catalog on each interaction; nothing is cached.

use std::collections::BTreeMap;

use super::product::Product;

/// Sentinel value for the unfiltered sidebar option.
pub const ALL_CATEGORIES: &str = "all";

/// The sidebar category selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filter; the full catalog passes through.
    All,
    /// Exact-match filter on the category string.
    Category(String),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    /// Build a filter from a `<select>` value, treating the sentinel as `All`.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// The `<select>` value for this filter.
    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(name) => name,
        }
    }

    /// Whether a record with the given category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }
}

/// Apply the category filter, preserving source order.
pub fn filter_catalog(catalog: &[Product], filter: &CategoryFilter) -> Vec<Product> {
    catalog
        .iter()
        .filter(|p| filter.matches(&p.category))
        .cloned()
        .collect()
}

/// Every distinct category in the catalog, in first-appearance order.
///
/// Fed by the *unfiltered* catalog so the sidebar always lists all options.
pub fn distinct_categories(catalog: &[Product]) -> Vec<String> {
    let mut seen = Vec::new();
    for product in catalog {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Number of records per category, ordered by descending count.
///
/// Ties are broken by category name so the chart is deterministic. An empty
/// input yields an empty result.
pub fn category_counts(products: &[Product]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for product in products {
        *counts.entry(&product.category).or_insert(0) += 1;
    }

    let mut ordered: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ordered
}

/// Arithmetic mean of `price` per category, ordered by category name.
///
/// A category with a single record yields that record's price exactly. An
/// empty input yields an empty result.
pub fn mean_price_by_category(products: &[Product]) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for product in products {
        let entry = sums.entry(&product.category).or_insert((0.0, 0));
        entry.0 += product.price;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(name, (sum, count))| (name.to_string(), sum / count as f64))
        .collect()
}
