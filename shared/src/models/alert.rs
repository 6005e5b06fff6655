//! Price Alert Models
//!
//! [`PriceComparison`] is the raw per-SKU comparison supplied by the data
//! layer; [`AlertTableRecord`] is the classified row shown in the alert table.

use serde::{Deserialize, Serialize};

use super::ProductTag;

/// Machine-readable alert classification
///
/// Any wire value outside the three known ones deserializes into
/// [`AlertType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    /// 价格倒挂: competitor undercuts us beyond the configured margin
    Inversion,
    /// 价格劣势: we are higher-priced
    Losing,
    /// 价格优势: we are at or below the lowest competitor
    Advantage,
    #[serde(other)]
    Unknown,
}

impl AlertType {
    /// Wire value, e.g. `"INVERSION"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inversion => "INVERSION",
            Self::Losing => "LOSING",
            Self::Advantage => "ADVANTAGE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable status shown in the category column
    pub fn category(&self) -> &'static str {
        match self {
            Self::Inversion => "价格倒挂",
            Self::Losing => "价格劣势",
            Self::Advantage => "价格优势",
            Self::Unknown => "未知",
        }
    }

    /// Parse a wire value; unrecognized strings map to `Unknown`
    pub fn parse(value: &str) -> Self {
        match value {
            "INVERSION" => Self::Inversion,
            "LOSING" => Self::Losing,
            "ADVANTAGE" => Self::Advantage,
            _ => Self::Unknown,
        }
    }

    /// The three classifiable values, in display order
    pub const KNOWN: [AlertType; 3] = [Self::Inversion, Self::Losing, Self::Advantage];
}

/// Competitor sales channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceChannel {
    Jd,
    Yjp,
    Xsj,
}

impl PriceChannel {
    pub const ALL: [PriceChannel; 3] = [Self::Jd, Self::Yjp, Self::Xsj];

    /// Column title of the channel
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Jd => "京东",
            Self::Yjp => "易久批",
            Self::Xsj => "鲜世纪",
        }
    }
}

/// Raw competitor comparison for one SKU, as stored by the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparison {
    pub id: String,
    pub sku_id: String,
    pub product: String,
    pub spec: String,
    pub our_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jd_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yjp_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xsj_price: Option<f64>,
    /// Our purchase cost; inversion is measured against it when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub is_special: bool,
    #[serde(default)]
    pub tags: Vec<ProductTag>,
}

impl PriceComparison {
    /// Price reported by a channel, `None` when that channel has no data
    pub fn channel_price(&self, channel: PriceChannel) -> Option<f64> {
        match channel {
            PriceChannel::Jd => self.jd_price,
            PriceChannel::Yjp => self.yjp_price,
            PriceChannel::Xsj => self.xsj_price,
        }
    }
}

/// One row of the alert table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTableRecord {
    pub id: String,
    pub sku_id: String,
    pub product: String,
    pub spec: String,
    pub our_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jd_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yjp_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xsj_price: Option<f64>,
    /// Our price minus the lowest competitor price; positive = we are higher
    pub gap: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// User-toggled; never derived
    pub is_special: bool,
    #[serde(default)]
    pub tags: Vec<ProductTag>,
}

impl AlertTableRecord {
    pub fn channel_price(&self, channel: PriceChannel) -> Option<f64> {
        match channel {
            PriceChannel::Jd => self.jd_price,
            PriceChannel::Yjp => self.yjp_price,
            PriceChannel::Xsj => self.xsj_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&AlertType::Inversion).unwrap(),
            "\"INVERSION\""
        );
        let parsed: AlertType = serde_json::from_str("\"LOSING\"").unwrap();
        assert_eq!(parsed, AlertType::Losing);
    }

    #[test]
    fn test_unrecognized_alert_type_is_unknown() {
        let parsed: AlertType = serde_json::from_str("\"CLEARANCE\"").unwrap();
        assert_eq!(parsed, AlertType::Unknown);
        assert_eq!(AlertType::parse("clearance"), AlertType::Unknown);
    }

    #[test]
    fn test_record_omits_missing_channels() {
        let record = AlertTableRecord {
            id: "A1".to_string(),
            sku_id: "SKU1".to_string(),
            product: "啤酒".to_string(),
            spec: "500ml*12".to_string(),
            our_price: 50.0,
            jd_price: Some(48.0),
            yjp_price: None,
            xsj_price: None,
            gap: 2.0,
            category: "价格劣势".to_string(),
            alert_type: AlertType::Losing,
            is_special: false,
            tags: vec![],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "LOSING");
        assert_eq!(json["jdPrice"], 48.0);
        assert!(json.get("yjpPrice").is_none());
        assert_eq!(record.channel_price(PriceChannel::Xsj), None);
    }
}
