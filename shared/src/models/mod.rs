//! Data models
//!
//! Mirrors the JSON shapes served by the restaurant API. Field names on the
//! wire follow the API (`category_number`, `option_details`, ...); a few are
//! renamed on the Rust side where the API name is unclear.

pub mod category;
pub mod dining_table;
pub mod order;
pub mod product;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use order::*;
pub use product::*;
