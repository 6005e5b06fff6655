use crate::alerts::{ClassifierConfig, DEFAULT_INVERSION_MARGIN_PERCENT};

/// History endpoint fallback when no `productId` is given
pub const DEFAULT_PRODUCT_ID: &str = "TOP001";

/// 服务配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，未设置时输出到终端 |
/// | INVERSION_MARGIN_PERCENT | 5 | 倒挂判定幅度 (%) |
/// | DEFAULT_PRODUCT_ID | TOP001 | 历史价格默认商品 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 INVERSION_MARGIN_PERCENT=8 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 倒挂判定幅度，低于我方价格该百分比即视为倒挂
    pub inversion_margin_percent: f64,
    pub default_product_id: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析时使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            inversion_margin_percent: std::env::var("INVERSION_MARGIN_PERCENT")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(DEFAULT_INVERSION_MARGIN_PERCENT),
            default_product_id: std::env::var("DEFAULT_PRODUCT_ID")
                .ok()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| DEFAULT_PRODUCT_ID.into()),
        }
    }

    /// Classifier parameters derived from this config
    pub fn classifier(&self) -> ClassifierConfig {
        ClassifierConfig {
            inversion_margin_percent: self.inversion_margin_percent,
        }
    }
}

impl Default for Config {
    /// Built-in defaults, ignoring the environment
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            inversion_margin_percent: DEFAULT_INVERSION_MARGIN_PERCENT,
            default_product_id: DEFAULT_PRODUCT_ID.into(),
        }
    }
}
