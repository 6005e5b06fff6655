//! Filter options handlers
//!
//! Option lists for the dashboard dropdowns. Every list starts with the
//! synthetic "all" option.

use std::collections::HashSet;

use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::{AlertType, Product, SelectOption};
use shared::{ALL_OPTION_VALUE, build_select_options, map_product_tags};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersResponse {
    pub tags: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
    pub alert_types: Vec<SelectOption>,
}

/// Distinct values in first-seen order
fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}

pub fn build_filters(products: &[Product]) -> FiltersResponse {
    let tags = distinct(
        products
            .iter()
            .flat_map(|p| map_product_tags(p.tags.as_deref()))
            .map(|t| t.as_str()),
    );
    let categories = distinct(products.iter().map(|p| p.category.as_str()));

    let mut alert_types = vec![SelectOption::new("全部状态", ALL_OPTION_VALUE)];
    alert_types.extend(
        AlertType::KNOWN
            .iter()
            .map(|t| SelectOption::new(t.category(), t.as_str())),
    );

    FiltersResponse {
        tags: build_select_options(tags, "全部标签", None),
        categories: build_select_options(categories, "全部分类", None),
        alert_types,
    }
}

/// GET /api/filters - 获取筛选项
pub async fn get_filters(State(state): State<ServerState>) -> AppResult<Json<FiltersResponse>> {
    let products = state
        .data()
        .internal_products()
        .map_err(|e| AppError::data_source("Failed to fetch filter options", e))?;

    Ok(Json(build_filters(&products)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductTag;

    fn product(id: &str, category: &str, tags: Option<Vec<ProductTag>>) -> Product {
        Product {
            id: id.to_string(),
            sku_id: format!("SKU-{}", id),
            name: id.to_string(),
            spec: "1件".to_string(),
            category: category.to_string(),
            our_price: 1.0,
            cost_price: None,
            tags,
        }
    }

    #[test]
    fn test_filters_are_deduplicated_in_first_seen_order() {
        let products = vec![
            product("a", "啤酒", Some(vec![ProductTag::new_arrival(), ProductTag::hot()])),
            product("b", "饮料", None),
            product("c", "啤酒", Some(vec![ProductTag::hot()])),
        ];
        let filters = build_filters(&products);

        let tags: Vec<&str> = filters.tags.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(tags, vec!["ALL", "新品", "爆品"]);

        let categories: Vec<&str> = filters.categories.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(categories, vec!["ALL", "啤酒", "饮料"]);

        assert_eq!(filters.alert_types.len(), 4);
        assert_eq!(filters.alert_types[0].value, "ALL");
        assert_eq!(filters.alert_types[1], SelectOption::new("价格倒挂", "INVERSION"));
    }
}
