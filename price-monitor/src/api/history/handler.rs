//! History API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use shared::models::HistoryPoint;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

const PRODUCT_ID_PARAM: &str = "productId";

#[derive(Debug, Default)]
pub struct HistoryQuery {
    pub product_id: Option<String>,
}

impl HistoryQuery {
    /// First `productId` wins; repeated or unrelated parameters are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            product_id: pairs
                .into_iter()
                .find(|(key, _)| key == PRODUCT_ID_PARAM)
                .map(|(_, value)| value),
        }
    }

    /// Requested product, or `default` when absent or blank
    pub fn product_id_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.product_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(default)
    }
}

/// GET /api/history?productId= - 获取商品历史价格
pub async fn get_history(
    State(state): State<ServerState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<HistoryPoint>>> {
    // 查询串解析失败时按未指定处理，此接口只有 200 / 500
    let query = match pairs {
        Ok(Query(pairs)) => HistoryQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Unparsable history query, using default product");
            HistoryQuery::default()
        }
    };
    let product_id = query.product_id_or(&state.config.default_product_id);

    let history = state
        .data()
        .history_data(product_id)
        .map_err(|e| AppError::data_source("Failed to fetch history data", e))?;

    Ok(Json(history))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_product_id_uses_default() {
        let query = HistoryQuery {
            product_id: Some("  ".to_string()),
        };
        assert_eq!(query.product_id_or("TOP001"), "TOP001");
        assert_eq!(HistoryQuery::default().product_id_or("TOP001"), "TOP001");

        let query = HistoryQuery {
            product_id: Some("TOP003".to_string()),
        };
        assert_eq!(query.product_id_or("TOP001"), "TOP003");
    }

    #[test]
    fn test_repeated_product_id_takes_first() {
        let pairs = vec![
            ("productId".to_string(), "TOP002".to_string()),
            ("foo".to_string(), "bar".to_string()),
            ("productId".to_string(), "TOP003".to_string()),
        ];
        assert_eq!(HistoryQuery::from_pairs(pairs).product_id_or("TOP001"), "TOP002");
        assert_eq!(HistoryQuery::from_pairs(vec![]).product_id_or("TOP001"), "TOP001");
    }
}
