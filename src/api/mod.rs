//! API Client
//!
//! HTTP access to the Fake Store API.

pub mod client;

pub use client::{fetch_products, get_api_base, DEFAULT_API_BASE};
