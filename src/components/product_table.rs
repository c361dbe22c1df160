//! Product Table Component
//!
//! Tabular view of (title, category, price) for the filtered records.

use leptos::*;

use crate::catalog::Product;

/// Product table for the filtered catalog
#[component]
pub fn ProductTable(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-gray-700">
            <table class="w-full text-left text-sm">
                <thead class="bg-gray-700 text-gray-300 uppercase text-xs">
                    <tr>
                        <th class="px-4 py-3">"Title"</th>
                        <th class="px-4 py-3">"Category"</th>
                        <th class="px-4 py-3 text-right">"Price"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let products = products.get();
                        if products.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="3" class="px-4 py-6 text-center text-gray-400">
                                        "No products match the current filter"
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            products.into_iter().map(|product| {
                                view! {
                                    <tr class="border-t border-gray-700 hover:bg-gray-750">
                                        <td class="px-4 py-3">{product.title.clone()}</td>
                                        <td class="px-4 py-3 capitalize text-gray-300">
                                            {product.category.clone()}
                                        </td>
                                        <td class="px-4 py-3 text-right font-mono">
                                            {product.display_price()}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
