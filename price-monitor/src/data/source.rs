//! Data source contract

use shared::models::{HistoryPoint, PriceComparison, Product};

use super::DataError;

pub type DataResult<T> = Result<T, DataError>;

/// Synchronous access to the internal pricing data service.
///
/// Implementations must be safe to share across request tasks; every call is
/// an independent read except [`toggle_special_attention`], which flips the
/// only user-mutable flag.
///
/// [`toggle_special_attention`]: PriceDataSource::toggle_special_attention
pub trait PriceDataSource: Send + Sync {
    /// Full internal product list
    fn internal_products(&self) -> DataResult<Vec<Product>>;

    /// Price series of one product, oldest first
    fn history_data(&self, product_id: &str) -> DataResult<Vec<HistoryPoint>>;

    /// Raw competitor comparisons, one per monitored SKU
    fn price_comparisons(&self) -> DataResult<Vec<PriceComparison>>;

    /// Flip the special-attention flag of a comparison; returns the new value
    fn toggle_special_attention(&self, id: &str) -> DataResult<bool>;
}
