//! Cell formatting and tone selection

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::AlertType;

use super::classifier::to_decimal;

/// Placeholder for a channel without data
pub const MISSING_PRICE: &str = "-";

/// Visual treatment of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Danger,
    Safe,
    Warning,
    Success,
}

impl Tone {
    /// Dashboard palette color
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Danger => "#ff4d4f",
            Tone::Safe => "#52c41a",
            Tone::Warning => "#faad14",
            Tone::Success => "#389e0d",
        }
    }
}

/// Fixed 2 decimals, half away from zero; `-0.00` collapses to `0.00`
///
/// `None` when the value has no decimal form (NaN, infinite, out of range).
fn fixed2(value: f64) -> Option<String> {
    let mut rounded = to_decimal(value)?.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    Some(rounded.to_string())
}

fn unrepresentable(value: f64) -> String {
    tracing::warn!(value, "Price value not representable, rendering as missing");
    MISSING_PRICE.to_string()
}

/// `¥19.50` for a quoted price, `-` for a missing one
pub fn format_currency(price: Option<f64>) -> String {
    match price {
        Some(value) => match fixed2(value) {
            Some(text) => format!("¥{text}"),
            None => unrepresentable(value),
        },
        None => MISSING_PRICE.to_string(),
    }
}

/// Signed gap text: `+` only when positive
pub fn format_gap(gap: f64) -> String {
    match fixed2(gap) {
        Some(text) if gap > 0.0 => format!("+{text}"),
        Some(text) => text,
        None => unrepresentable(gap),
    }
}

/// Positive gap (we are dearer) is dangerous, anything else is safe
pub fn gap_tone(gap: f64) -> Tone {
    if gap > 0.0 { Tone::Danger } else { Tone::Safe }
}

/// Status tag tone
///
/// Unknown types deliberately share the ADVANTAGE tone.
pub fn status_tone(alert_type: AlertType) -> Tone {
    match alert_type {
        AlertType::Inversion => Tone::Warning,
        AlertType::Losing => Tone::Danger,
        AlertType::Advantage | AlertType::Unknown => Tone::Success,
    }
}
