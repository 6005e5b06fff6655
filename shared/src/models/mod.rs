//! Data models
//!
//! Shared between price-monitor and the dashboard (via API).
//! Wire field names are camelCase; optional competitor prices are omitted
//! rather than zero-filled.

pub mod alert;
pub mod history;
pub mod navigation;
pub mod option;
pub mod product;
pub mod tag;

// Re-exports
pub use alert::*;
pub use history::*;
pub use navigation::*;
pub use option::*;
pub use product::*;
pub use tag::*;
