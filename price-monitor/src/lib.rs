//! Price Monitor - 电商比价监控服务
//!
//! # 架构概述
//!
//! - **预警表** (`alerts`): 比价分类、单元格格式化、特别关注操作
//! - **数据访问** (`data`): 内部数据服务接口与内存实现
//! - **HTTP API** (`api`): 商品、历史价格、预警、筛选项
//!
//! # 模块结构
//!
//! ```text
//! price-monitor/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── alerts/        # 分类与渲染 (纯函数)
//! ├── data/          # 数据访问层
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── routes/        # 路由装配
//! └── utils/         # 错误、日志
//! ```

pub mod alerts;
pub mod api;
pub mod core;
pub mod data;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use alerts::{ClassifierConfig, render_row, render_view};
pub use core::{Config, Server, ServerState};
pub use data::{DataError, MemoryDataSource, PriceDataSource};
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 加载 .env、读取配置并初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____       _
   / __ \_____(_)_______
  / /_/ / ___/ / ___/ _ \
 / ____/ /  / / /__/  __/
/_/   /_/  /_/\___/\___/  monitor
    "#
    );
}
