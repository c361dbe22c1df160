//! Dashboard Page
//!
//! The single page: sidebar filter, product table, two bar charts, and the
//! product detail panel, all derived from the current catalog and filter.

use leptos::*;

use crate::api;
use crate::catalog::{
    category_counts, distinct_categories, filter_catalog, mean_price_by_category,
};
use crate::components::{BarChart, Loading, ProductDetail, ProductTable, Sidebar};
use crate::state::global::GlobalState;

/// Fetch the catalog into the global state.
///
/// One attempt; a failure substitutes an empty catalog and raises the single
/// error message the page renders in place of the data views.
pub fn load_catalog(state: GlobalState) {
    spawn_local(async move {
        state.loading.set(true);
        state.clear_error();

        let result = api::fetch_products().await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Failed to fetch catalog: {}", e).into());
        }
        state.apply_fetch_result(result);

        state.loading.set(false);
    });
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the catalog on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        load_catalog(state_for_effect.clone());
    });

    let catalog = state.catalog;
    let selected_category = state.selected_category;
    let loading = state.loading;
    let error = state.error;

    // All view data is re-derived from (catalog, filter) on every interaction.
    let categories = create_memo(move |_| distinct_categories(&catalog.get()));
    let filtered = create_memo(move |_| filter_catalog(&catalog.get(), &selected_category.get()));

    // Both aggregates come from the *filtered* set, so a specific category
    // selection degenerates each chart to a single bar.
    let counts = create_memo(move |_| {
        category_counts(&filtered.get())
            .into_iter()
            .map(|(category, count)| (category, count as f64))
            .collect::<Vec<_>>()
    });
    let mean_prices = create_memo(move |_| mean_price_by_category(&filtered.get()));

    let state_for_retry = state.clone();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"📊 Product Catalog Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Products from the Fake Store API"</p>
                </div>

                <RefreshButton />
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(message) = error.get() {
                    let state = state_for_retry.clone();
                    view! {
                        <section class="bg-gray-800 rounded-xl p-12 text-center space-y-4">
                            <p class="text-lg text-red-400">{message}</p>
                            <button
                                on:click=move |_| load_catalog(state.clone())
                                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                                       font-medium transition-colors"
                            >
                                "Retry"
                            </button>
                        </section>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex flex-col md:flex-row gap-8">
                            <Sidebar categories=categories />

                            <div class="flex-1 space-y-8 min-w-0">
                                // Product table
                                <section class="bg-gray-800 rounded-xl p-6">
                                    <h2 class="text-xl font-semibold mb-4">"📋 Products"</h2>
                                    <ProductTable products=filtered />
                                </section>

                                // Charts
                                <div class="grid lg:grid-cols-2 gap-8">
                                    <section class="bg-gray-800 rounded-xl p-6">
                                        <h2 class="text-xl font-semibold mb-4">
                                            "Products per category"
                                        </h2>
                                        <BarChart bars=counts fill="#60a5fa" integer_axis=true />
                                    </section>

                                    <section class="bg-gray-800 rounded-xl p-6">
                                        <h2 class="text-xl font-semibold mb-4">
                                            "Average price per category"
                                        </h2>
                                        <BarChart bars=mean_prices fill="#4ade80" />
                                    </section>
                                </div>

                                // Product detail
                                <section class="bg-gray-800 rounded-xl p-6">
                                    <h2 class="text-xl font-semibold mb-4">"🔍 Product details"</h2>
                                    <ProductDetail products=filtered />
                                </section>
                            </div>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Manual refresh control
#[component]
fn RefreshButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let loading = state.loading;

    let state_for_click = state;
    let on_click = move |_| {
        load_catalog(state_for_click.clone());
    };

    view! {
        <button
            on:click=on_click
            disabled=move || loading.get()
            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-800
                   disabled:text-gray-500 rounded-lg text-sm font-medium transition-colors"
        >
            "↻ Refresh"
        </button>
    }
}
