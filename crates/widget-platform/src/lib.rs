//! Browser platform adapters — implements widget-core port traits
//! via wasm-bindgen.

pub mod http;
pub mod store;
