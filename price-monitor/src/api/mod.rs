//! API 路由模块
//!
//! # 结构
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 |
//! | /api/products | GET | 内部商品列表 |
//! | /api/history | GET | 商品历史价格 |
//! | /api/alerts | GET | 价格预警表 |
//! | /api/alerts/columns | GET | 预警表列定义 |
//! | /api/alerts/{id}/attention | POST | 切换特别关注 |
//! | /api/filters | GET | 筛选项 |
//! | /api/navigation | GET | 侧边栏导航 |

pub mod alerts;
pub mod filters;
pub mod health;
pub mod history;
pub mod navigation;
pub mod products;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
