//! Global Application State
//!
//! Reactive state management using Leptos signals. Every view derives its
//! data from these inputs on each interaction; no mutable globals are
//! carried between renders.

use leptos::*;

use crate::catalog::{CategoryFilter, Product};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The product catalog as last fetched (empty until loaded, or on failure)
    pub catalog: RwSignal<Vec<Product>>,
    /// Sidebar category selection
    pub selected_category: RwSignal<CategoryFilter>,
    /// Title of the product picked in the detail selector, if any
    pub selected_product: RwSignal<Option<String>>,
    /// Whether the catalog fetch is in flight
    pub loading: RwSignal<bool>,
    /// Failure message from the last fetch attempt, if it failed
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    fn new() -> Self {
        Self {
            catalog: create_rw_signal(Vec::new()),
            selected_category: create_rw_signal(CategoryFilter::All),
            selected_product: create_rw_signal(None),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    /// Apply the outcome of a catalog fetch.
    ///
    /// Success replaces the catalog and clears any prior failure. Failure
    /// substitutes an empty catalog and raises exactly one error indication:
    /// the message the error panel renders in place of the data views.
    pub fn apply_fetch_result(&self, result: Result<Vec<Product>, String>) {
        match result {
            Ok(products) => {
                self.catalog.set(products);
                self.error.set(None);
            }
            Err(message) => {
                self.catalog.set(Vec::new());
                self.error.set(Some(message));
            }
        }
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Resolve the product-detail selection against the filtered titles.
///
/// A previously selected title that fell out of the filtered set degrades to
/// the first filtered title, mirroring the selector's own default. An empty
/// filtered set yields `None`, which skips the detail panel entirely.
pub fn effective_selection(titles: &[String], selected: Option<&str>) -> Option<String> {
    match selected {
        Some(title) if titles.iter().any(|t| t == title) => Some(title.to_string()),
        _ => titles.first().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn product(title: &str, category: &str, price: f64) -> Product {
        Product {
            id: 0,
            title: title.to_string(),
            price,
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_effective_selection_keeps_valid_choice() {
        let filtered = titles(&["A", "B", "C"]);
        assert_eq!(
            effective_selection(&filtered, Some("B")),
            Some("B".to_string())
        );
    }

    #[test]
    fn test_effective_selection_falls_back_to_first() {
        let filtered = titles(&["A", "B"]);
        // "C" was filtered out by a category change.
        assert_eq!(
            effective_selection(&filtered, Some("C")),
            Some("A".to_string())
        );
        assert_eq!(effective_selection(&filtered, None), Some("A".to_string()));
    }

    #[test]
    fn test_effective_selection_empty_set_is_none() {
        assert_eq!(effective_selection(&[], Some("A")), None);
        assert_eq!(effective_selection(&[], None), None);
    }

    #[test]
    fn test_fetch_success_replaces_catalog() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.apply_fetch_result(Ok(vec![product("A", "X", 10.0)]));

        assert_eq!(state.catalog.get_untracked().len(), 1);
        assert!(state.error.get_untracked().is_none());

        runtime.dispose();
    }

    #[test]
    fn test_fetch_failure_empties_catalog_with_one_error() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.catalog.set(vec![product("A", "X", 10.0)]);

        state.apply_fetch_result(Err("Network error: connection refused".to_string()));

        // The error message is the one and only failure indication; the
        // catalog is emptied so every data view short-circuits with it.
        assert!(state.catalog.get_untracked().is_empty());
        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some("Network error: connection refused")
        );

        runtime.dispose();
    }

    #[test]
    fn test_fetch_success_clears_prior_failure() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.apply_fetch_result(Err("Request failed with status 503".to_string()));
        state.apply_fetch_result(Ok(vec![product("A", "X", 10.0)]));

        assert_eq!(state.catalog.get_untracked().len(), 1);
        assert!(state.error.get_untracked().is_none());

        runtime.dispose();
    }
}
