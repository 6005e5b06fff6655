//! Product Model

use serde::{Deserialize, Serialize};

use super::ProductTag;

/// Internal product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku_id: String,
    pub name: String,
    /// Packaging spec, e.g. "500ml*12"
    pub spec: String,
    pub category: String,
    /// Our selling price
    pub our_price: f64,
    /// Purchase cost (None when not recorded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    /// Tags may be missing from upstream payloads; see [`crate::map_product_tags`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ProductTag>>,
}
