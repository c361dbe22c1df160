//! State Management
//!
//! Global reactive application state.

pub mod global;

pub use global::{effective_selection, provide_global_state, GlobalState};
