//! Product Detail Component
//!
//! Single-select over the filtered record titles plus a detail panel for the
//! selected record. Skipped entirely when the filtered set is empty.

use leptos::*;

use crate::catalog::Product;
use crate::state::global::{effective_selection, GlobalState};

/// Fixed display width for the product image, in pixels.
const IMAGE_WIDTH: u32 = 150;

/// Product selector and detail panel
#[component]
pub fn ProductDetail(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let selected_product = state.selected_product;

    let titles = create_memo(move |_| {
        products
            .get()
            .iter()
            .map(|p| p.title.clone())
            .collect::<Vec<_>>()
    });

    // The stored selection may have been filtered out; degrade to the first
    // filtered title, or to nothing when the filtered set is empty.
    let selection = create_memo(move |_| {
        let titles = titles.get();
        effective_selection(&titles, selected_product.get().as_deref())
    });

    let detail = create_memo(move |_| {
        let title = selection.get()?;
        products.get().into_iter().find(|p| p.title == title)
    });

    view! {
        {move || {
            if titles.get().is_empty() {
                view! {
                    <p class="text-gray-400 text-sm">"No products to show"</p>
                }.into_view()
            } else {
                view! {
                    <div class="space-y-4">
                        <select
                            on:change=move |ev| {
                                selected_product.set(Some(event_target_value(&ev)))
                            }
                            prop:value=move || selection.get().unwrap_or_default()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            {move || {
                                titles.get()
                                    .into_iter()
                                    .map(|title| {
                                        view! {
                                            <option value=title.clone()>{title.clone()}</option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>

                        {move || detail.get().map(|product| view! {
                            <DetailPanel product=product />
                        })}
                    </div>
                }.into_view()
            }
        }}
    }
}

/// Detail panel for one product
#[component]
fn DetailPanel(product: Product) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-6">
            <img
                src=product.image.clone()
                alt=product.title.clone()
                width=IMAGE_WIDTH
                class="rounded-lg bg-white p-2 shrink-0"
            />

            <div class="space-y-2">
                <h3 class="text-lg font-semibold">{product.title.clone()}</h3>
                <p>
                    <span class="text-gray-400">"Category: "</span>
                    <span class="capitalize">{product.category.clone()}</span>
                </p>
                <p>
                    <span class="text-gray-400">"Price: "</span>
                    <span class="font-mono">{product.display_price()}</span>
                </p>
                <p class="text-gray-300 text-sm leading-relaxed">
                    {product.description.clone()}
                </p>
            </div>
        </div>
    }
}
