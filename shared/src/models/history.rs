//! Price History Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of a product's price series across channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub our_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jd_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yjp_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xsj_price: Option<f64>,
}
