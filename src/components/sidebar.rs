//! Sidebar Component
//!
//! Category filter control: a single-select over "all" plus every distinct
//! category of the unfiltered catalog.

use leptos::*;

use crate::catalog::{CategoryFilter, ALL_CATEGORIES};
use crate::state::global::GlobalState;

/// Sidebar with the category filter
#[component]
pub fn Sidebar(#[prop(into)] categories: Signal<Vec<String>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let selected = state.selected_category;

    view! {
        <aside class="w-64 shrink-0 bg-gray-800 rounded-xl p-6 self-start">
            <h2 class="text-lg font-semibold mb-4">"Filters"</h2>

            <label class="block text-sm text-gray-400 mb-2" for="category-filter">
                "Category"
            </label>
            <select
                id="category-filter"
                on:change=move |ev| {
                    selected.set(CategoryFilter::from_value(&event_target_value(&ev)))
                }
                prop:value=move || selected.get().value().to_string()
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value=ALL_CATEGORIES>"All categories"</option>
                {move || {
                    categories.get()
                        .into_iter()
                        .map(|category| {
                            view! {
                                <option value=category.clone() class="capitalize">
                                    {category.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </aside>
    }
}
