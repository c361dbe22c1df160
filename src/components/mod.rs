//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod bar_chart;
pub mod loading;
pub mod nav;
pub mod product_detail;
pub mod product_table;
pub mod sidebar;

pub use bar_chart::BarChart;
pub use loading::Loading;
pub use nav::Nav;
pub use product_detail::ProductDetail;
pub use product_table::ProductTable;
pub use sidebar::Sidebar;
