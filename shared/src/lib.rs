//! Shared types for the price monitor
//!
//! Wire models and pure helpers used by the server and by any dashboard
//! client consuming its API.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AlertTableRecord, AlertType, HistoryPoint, NavItem, PriceChannel, PriceComparison, Product,
    ProductTag, SelectOption,
};
pub use util::{ALL_OPTION_VALUE, build_select_options, map_product_tags};
