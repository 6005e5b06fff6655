//! Sidebar Navigation Model

use serde::{Deserialize, Serialize};

/// Sidebar entry consumed by the dashboard shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub path: String,
    pub label: String,
    /// Icon identifier understood by the shell
    pub icon: String,
}

impl NavItem {
    pub fn new(path: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }
}
