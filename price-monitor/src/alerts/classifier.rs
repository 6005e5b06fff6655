//! Alert Classifier
//!
//! Derives gap, type and category of a comparison.
//! Uses rust_decimal for the arithmetic, stores as f64.

use rust_decimal::prelude::*;
use shared::models::{AlertTableRecord, AlertType, PriceChannel, PriceComparison};

/// Default inversion margin (percent above our cost)
pub const DEFAULT_INVERSION_MARGIN_PERCENT: f64 = 5.0;

const DECIMAL_PLACES: u32 = 2;

/// `None` for NaN, infinities and magnitudes Decimal cannot hold
#[inline]
pub(crate) fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Round to 2 decimal places (half away from zero) and convert back
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Classification parameters, supplied by configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Safety band above our cost; a competitor below it is an inversion
    pub inversion_margin_percent: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            inversion_margin_percent: DEFAULT_INVERSION_MARGIN_PERCENT,
        }
    }
}

/// Lowest price across channels that reported a usable one
pub fn lowest_competitor_price(comparison: &PriceComparison) -> Option<f64> {
    PriceChannel::ALL
        .iter()
        .filter_map(|&ch| comparison.channel_price(ch))
        .filter(|p| to_decimal(*p).is_some())
        .min_by(|a, b| a.total_cmp(b))
}

/// Our price minus the lowest competitor price; zero without competitor data
pub fn compute_gap(comparison: &PriceComparison) -> f64 {
    let ours = to_decimal(comparison.our_price);
    let lowest = lowest_competitor_price(comparison).and_then(to_decimal);
    match (ours, lowest) {
        (Some(ours), Some(lowest)) => to_f64(ours - lowest),
        _ => 0.0,
    }
}

/// Price below which a competitor counts as an inversion
///
/// 有成本价时: cost × (1 + margin%)；没有时退回 our × (1 - margin%)
fn inversion_threshold(ours: Decimal, cost: Option<Decimal>, config: &ClassifierConfig) -> Decimal {
    let margin = to_decimal(config.inversion_margin_percent).unwrap_or_default() / Decimal::ONE_HUNDRED;
    match cost {
        Some(cost) => cost * (Decimal::ONE + margin),
        None => ours * (Decimal::ONE - margin),
    }
}

/// Classify a comparison
///
/// - INVERSION: lowest < inversion threshold (cost based when cost is known)
/// - LOSING: otherwise, gap > 0
/// - ADVANTAGE: everything else, including no competitor data
/// - UNKNOWN: our own price is not a usable number
pub fn classify_type(comparison: &PriceComparison, config: &ClassifierConfig) -> AlertType {
    let Some(lowest) = lowest_competitor_price(comparison).and_then(to_decimal) else {
        return AlertType::Advantage;
    };
    let Some(ours) = to_decimal(comparison.our_price) else {
        tracing::warn!(id = %comparison.id, our_price = comparison.our_price, "Unusable own price, cannot classify");
        return AlertType::Unknown;
    };
    let cost = comparison.cost_price.and_then(to_decimal);

    if lowest < inversion_threshold(ours, cost, config) {
        AlertType::Inversion
    } else if ours > lowest {
        AlertType::Losing
    } else {
        AlertType::Advantage
    }
}

/// Build the alert table row for a comparison
pub fn classify(comparison: &PriceComparison, config: &ClassifierConfig) -> AlertTableRecord {
    let alert_type = classify_type(comparison, config);
    AlertTableRecord {
        id: comparison.id.clone(),
        sku_id: comparison.sku_id.clone(),
        product: comparison.product.clone(),
        spec: comparison.spec.clone(),
        our_price: comparison.our_price,
        jd_price: comparison.jd_price,
        yjp_price: comparison.yjp_price,
        xsj_price: comparison.xsj_price,
        gap: compute_gap(comparison),
        category: alert_type.category().to_string(),
        alert_type,
        is_special: comparison.is_special,
        tags: comparison.tags.clone(),
    }
}

/// Classify every comparison, keeping input order
pub fn classify_all(comparisons: &[PriceComparison], config: &ClassifierConfig) -> Vec<AlertTableRecord> {
    comparisons.iter().map(|c| classify(c, config)).collect()
}
