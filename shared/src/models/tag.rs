//! Product Tag Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// 商品标签（"爆品"、"新品"等）
///
/// 一个商品可以有多个标签，按集合语义处理。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductTag(String);

impl ProductTag {
    /// 爆品
    pub const HOT: &'static str = "爆品";
    /// 新品
    pub const NEW: &'static str = "新品";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn hot() -> Self {
        Self::new(Self::HOT)
    }

    pub fn new_arrival() -> Self {
        Self::new(Self::NEW)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductTag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl AsRef<str> for ProductTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
