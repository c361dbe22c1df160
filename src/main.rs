//! Storefront Dashboard
//!
//! Interactive product catalog dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live product catalog from the Fake Store API
//! - Category filtering with per-category aggregates
//! - Bar charts for product counts and average prices
//! - Product detail view with description and image
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks directly to the public Fake Store API over HTTP;
//! there is no backend of its own. All view data is re-derived from the
//! current reactive state on every interaction.

use leptos::*;

mod api;
mod app;
mod catalog;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
