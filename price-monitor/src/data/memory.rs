//! In-memory data source

use chrono::NaiveDate;
use dashmap::DashMap;
use shared::models::{HistoryPoint, PriceComparison, Product};

use super::seed;
use super::{DataError, DataResult, PriceDataSource};

/// Data source backed by a fixed catalog
///
/// Special-attention flags live in a [`DashMap`] so concurrent toggles on
/// different rows never contend on one lock.
#[derive(Debug)]
pub struct MemoryDataSource {
    products: Vec<Product>,
    comparisons: Vec<PriceComparison>,
    special: DashMap<String, bool>,
    history_end: NaiveDate,
}

impl MemoryDataSource {
    /// Seeded catalog with histories ending today
    pub fn new() -> Self {
        Self::with_data(
            seed::products(),
            seed::comparisons(),
            chrono::Local::now().date_naive(),
        )
    }

    pub fn with_data(
        products: Vec<Product>,
        comparisons: Vec<PriceComparison>,
        history_end: NaiveDate,
    ) -> Self {
        let special = comparisons
            .iter()
            .map(|c| (c.id.clone(), c.is_special))
            .collect();
        Self {
            products,
            comparisons,
            special,
            history_end,
        }
    }

    /// Seeded catalog with a fixed history end date
    pub fn seeded(history_end: NaiveDate) -> Self {
        Self::with_data(seed::products(), seed::comparisons(), history_end)
    }
}

impl Default for MemoryDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceDataSource for MemoryDataSource {
    fn internal_products(&self) -> DataResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn history_data(&self, product_id: &str) -> DataResult<Vec<HistoryPoint>> {
        // Unknown products have no series
        Ok(self
            .comparisons
            .iter()
            .find(|c| c.id == product_id)
            .map(|c| seed::history(c, self.history_end))
            .unwrap_or_default())
    }

    fn price_comparisons(&self) -> DataResult<Vec<PriceComparison>> {
        Ok(self
            .comparisons
            .iter()
            .map(|c| {
                let mut c = c.clone();
                if let Some(flag) = self.special.get(&c.id) {
                    c.is_special = *flag;
                }
                c
            })
            .collect())
    }

    fn toggle_special_attention(&self, id: &str) -> DataResult<bool> {
        let mut flag = self
            .special
            .get_mut(id)
            .ok_or_else(|| DataError::not_found(id))?;
        *flag = !*flag;
        tracing::info!(id = %id, is_special = *flag, "Special attention toggled");
        Ok(*flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MemoryDataSource {
        MemoryDataSource::seeded(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let source = source();
        assert!(source.toggle_special_attention("TOP002").unwrap());

        let rows = source.price_comparisons().unwrap();
        let row = rows.iter().find(|c| c.id == "TOP002").unwrap();
        assert!(row.is_special);

        assert!(!source.toggle_special_attention("TOP002").unwrap());
    }

    #[test]
    fn test_toggle_unknown_id() {
        assert_eq!(
            source().toggle_special_attention("NOPE"),
            Err(DataError::not_found("NOPE"))
        );
    }

    #[test]
    fn test_history_of_unknown_product_is_empty() {
        assert!(source().history_data("NOPE").unwrap().is_empty());
        assert_eq!(
            source().history_data("TOP001").unwrap().len(),
            seed::HISTORY_DAYS as usize
        );
    }
}
