//! Built-in sample catalog
//!
//! Stands in for the internal data service in development and tests.

use chrono::{Days, NaiveDate};
use shared::models::{HistoryPoint, PriceComparison, Product, ProductTag};

/// Length of generated price series
pub const HISTORY_DAYS: u64 = 30;

struct SeedRow {
    id: &'static str,
    sku_id: &'static str,
    name: &'static str,
    spec: &'static str,
    category: &'static str,
    our_price: f64,
    cost_price: Option<f64>,
    tags: Option<&'static [&'static str]>,
    jd: Option<f64>,
    yjp: Option<f64>,
    xsj: Option<f64>,
}

const ROWS: &[SeedRow] = &[
    SeedRow {
        id: "TOP001",
        sku_id: "SKU-10001",
        name: "青岛啤酒经典",
        spec: "500ml*12",
        category: "啤酒",
        our_price: 52.0,
        cost_price: Some(45.5),
        tags: Some(&[ProductTag::HOT]),
        jd: Some(49.9),
        yjp: Some(46.8),
        xsj: None,
    },
    SeedRow {
        id: "TOP002",
        sku_id: "SKU-10002",
        name: "雪花勇闯天涯",
        spec: "500ml*12",
        category: "啤酒",
        our_price: 39.0,
        cost_price: Some(33.0),
        tags: Some(&[ProductTag::HOT]),
        jd: Some(41.5),
        yjp: Some(38.2),
        xsj: Some(40.0),
    },
    SeedRow {
        id: "TOP003",
        sku_id: "SKU-10003",
        name: "农夫山泉饮用天然水",
        spec: "550ml*24",
        category: "饮用水",
        our_price: 28.5,
        cost_price: Some(24.0),
        tags: None,
        jd: Some(29.9),
        yjp: Some(30.5),
        xsj: Some(31.0),
    },
    SeedRow {
        id: "TOP004",
        sku_id: "SKU-10004",
        name: "元气森林白桃气泡水",
        spec: "480ml*15",
        category: "饮料",
        our_price: 66.0,
        cost_price: Some(55.0),
        tags: Some(&[ProductTag::NEW, ProductTag::HOT]),
        jd: Some(56.5),
        yjp: None,
        xsj: Some(64.5),
    },
    SeedRow {
        id: "TOP005",
        sku_id: "SKU-10005",
        name: "伊利纯牛奶",
        spec: "250ml*24",
        category: "乳品",
        our_price: 62.0,
        cost_price: None,
        tags: Some(&[]),
        jd: None,
        yjp: None,
        xsj: None,
    },
    SeedRow {
        id: "TOP006",
        sku_id: "SKU-10006",
        name: "东方树叶乌龙茶",
        spec: "500ml*15",
        category: "饮料",
        our_price: 58.0,
        cost_price: Some(50.0),
        tags: Some(&[ProductTag::NEW]),
        jd: Some(57.2),
        yjp: Some(58.5),
        xsj: None,
    },
];

fn tags_of(row: &SeedRow) -> Option<Vec<ProductTag>> {
    row.tags
        .map(|tags| tags.iter().map(|t| ProductTag::new(*t)).collect())
}

pub fn products() -> Vec<Product> {
    ROWS.iter()
        .map(|row| Product {
            id: row.id.to_string(),
            sku_id: row.sku_id.to_string(),
            name: row.name.to_string(),
            spec: row.spec.to_string(),
            category: row.category.to_string(),
            our_price: row.our_price,
            cost_price: row.cost_price,
            tags: tags_of(row),
        })
        .collect()
}

pub fn comparisons() -> Vec<PriceComparison> {
    ROWS.iter()
        .map(|row| PriceComparison {
            id: row.id.to_string(),
            sku_id: row.sku_id.to_string(),
            product: row.name.to_string(),
            spec: row.spec.to_string(),
            our_price: row.our_price,
            jd_price: row.jd,
            yjp_price: row.yjp,
            xsj_price: row.xsj,
            cost_price: row.cost_price,
            is_special: false,
            tags: tags_of(row).unwrap_or_default(),
        })
        .collect()
}

/// Deterministic daily series ending at `end`
///
/// Prices wobble around the current quote; a channel with no current quote has
/// no history either.
pub fn history(comparison: &PriceComparison, end: NaiveDate) -> Vec<HistoryPoint> {
    let start = end
        .checked_sub_days(Days::new(HISTORY_DAYS - 1))
        .unwrap_or(end);

    (0..HISTORY_DAYS)
        .filter_map(|day| {
            let date = start.checked_add_days(Days::new(day))?;
            Some(HistoryPoint {
                date,
                our_price: wobble(comparison.our_price, day, 0),
                jd_price: comparison.jd_price.map(|p| wobble(p, day, 3)),
                yjp_price: comparison.yjp_price.map(|p| wobble(p, day, 5)),
                xsj_price: comparison.xsj_price.map(|p| wobble(p, day, 7)),
            })
        })
        .collect()
}

fn wobble(base: f64, day: u64, phase: u64) -> f64 {
    let step = ((day * 7 + phase) % 11) as f64;
    let value = base + (step - 5.0) * 0.1;
    (value * 100.0).round() / 100.0
}
