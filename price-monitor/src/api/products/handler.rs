//! Product API Handlers

use axum::{Json, extract::State};
use shared::models::Product;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/products - 获取内部商品列表
///
/// `tags` is always present in the response, empty when the product has none.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let mut products = state
        .data()
        .internal_products()
        .map_err(|e| AppError::data_source("Failed to fetch products", e))?;

    for product in &mut products {
        product.tags.get_or_insert_with(Vec::new);
    }

    Ok(Json(products))
}
