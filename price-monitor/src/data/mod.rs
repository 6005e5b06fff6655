//! 数据访问层
//!
//! - [`PriceDataSource`] - 外部数据服务的同步接口
//! - [`MemoryDataSource`] - 内置样例数据的内存实现
//! - [`DataError`] - 数据层错误

mod error;
mod memory;
mod seed;
mod source;

pub use error::DataError;
pub use memory::MemoryDataSource;
pub use source::{DataResult, PriceDataSource};
