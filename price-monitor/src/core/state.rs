use std::sync::Arc;

use crate::alerts::ClassifierConfig;
use crate::core::Config;
use crate::data::{MemoryDataSource, PriceDataSource};

/// 服务器状态 - 持有所有 handler 共享的引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆的成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | data | 数据访问层 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub data: Arc<dyn PriceDataSource>,
}

impl ServerState {
    pub fn new(config: Config, data: Arc<dyn PriceDataSource>) -> Self {
        Self {
            config: Arc::new(config),
            data,
        }
    }

    /// 使用内置样例数据初始化
    pub fn initialize(config: &Config) -> Self {
        Self::new(config.clone(), Arc::new(MemoryDataSource::new()))
    }

    pub fn classifier(&self) -> ClassifierConfig {
        self.config.classifier()
    }

    pub fn data(&self) -> &dyn PriceDataSource {
        self.data.as_ref()
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
