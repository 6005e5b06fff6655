//! Alert table filters

use shared::ALL_OPTION_VALUE;
use shared::models::{AlertTableRecord, AlertType, ProductTag};

/// Row filter; `None` fields match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertFilter {
    pub alert_type: Option<AlertType>,
    pub tag: Option<ProductTag>,
    pub special: Option<bool>,
}

/// Reject a filter value selecting an unrecognized alert type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown alert type: {0}")]
pub struct UnknownAlertType(pub String);

/// Selection value from a dropdown; empty or `ALL` means no filter
fn selected(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL_OPTION_VALUE)
}

impl AlertFilter {
    /// Build from raw selection values
    pub fn from_selection(
        alert_type: Option<&str>,
        tag: Option<&str>,
        special: Option<bool>,
    ) -> Result<Self, UnknownAlertType> {
        let alert_type = match selected(alert_type) {
            Some(value) => match AlertType::parse(value) {
                AlertType::Unknown => return Err(UnknownAlertType(value.to_string())),
                known => Some(known),
            },
            None => None,
        };

        Ok(Self {
            alert_type,
            tag: selected(tag).map(ProductTag::from),
            special,
        })
    }

    pub fn matches(&self, record: &AlertTableRecord) -> bool {
        self.alert_type.is_none_or(|t| record.alert_type == t)
            && self.tag.as_ref().is_none_or(|tag| record.tags.contains(tag))
            && self.special.is_none_or(|s| record.is_special == s)
    }

    /// Keep matching records, preserving order
    pub fn apply(&self, records: Vec<AlertTableRecord>) -> Vec<AlertTableRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
