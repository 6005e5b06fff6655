//! Sidebar navigation

use axum::{Json, Router, routing::get};
use shared::models::NavItem;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/navigation", get(list))
}

/// Dashboard pages in sidebar order
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("/", "数据总览", "dashboard"),
        NavItem::new("/products", "商品列表", "shopping"),
        NavItem::new("/alerts", "价格预警", "alert"),
        NavItem::new("/history", "价格走势", "line-chart"),
    ]
}

/// GET /api/navigation
pub async fn list() -> Json<Vec<NavItem>> {
    Json(nav_items())
}
