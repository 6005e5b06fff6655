//! Price Alert API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::alerts::{ALERT_COLUMNS, AlertFilter, AlertRowView, ColumnSpec, classify_all, render_view};
use crate::core::ServerState;
use crate::data::DataError;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct AlertQuery {
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    pub tag: Option<String>,
    pub special: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub id: String,
    pub is_special: bool,
}

/// GET /api/alerts - 获取价格预警表
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<AlertQuery>, QueryRejection>,
) -> AppResult<Json<Vec<AlertRowView>>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let filter = AlertFilter::from_selection(
        query.alert_type.as_deref(),
        query.tag.as_deref(),
        query.special,
    )
    .map_err(|e| AppError::validation(e.to_string()))?;

    let comparisons = state
        .data()
        .price_comparisons()
        .map_err(|e| AppError::data_source("Failed to fetch price alerts", e))?;

    let records = filter.apply(classify_all(&comparisons, &state.classifier()));
    Ok(Json(records.iter().map(render_view).collect()))
}

/// GET /api/alerts/columns - 预警表列定义
pub async fn columns() -> Json<&'static [ColumnSpec]> {
    Json(&ALERT_COLUMNS)
}

/// POST /api/alerts/{id}/attention - 切换特别关注
pub async fn toggle_attention(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ToggleResponse>> {
    let is_special = state
        .data()
        .toggle_special_attention(&id)
        .map_err(|e| match e {
            DataError::NotFound(_) => AppError::not_found(format!("Alert {}", id)),
            other => AppError::data_source("Failed to toggle special attention", other),
        })?;

    Ok(Json(ToggleResponse { id, is_special }))
}
