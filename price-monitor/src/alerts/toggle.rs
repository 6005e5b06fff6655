//! Special-attention toggle
//!
//! The toggle sits inside a clickable row. Activating it must reach the
//! caller's callback and must never bubble up to the row's own click handler.

use serde::{Deserialize, Serialize};

/// Icon variant reflecting `isSpecial`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttentionIcon {
    Filled,
    Outline,
}

impl AttentionIcon {
    pub fn for_flag(is_special: bool) -> Self {
        if is_special { Self::Filled } else { Self::Outline }
    }
}

/// A click travelling from the toggle towards its ancestors
#[derive(Debug, Default)]
pub struct ClickEvent {
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Attention control bound to one record
pub struct AttentionToggle<F>
where
    F: Fn(&str),
{
    id: String,
    icon: AttentionIcon,
    on_toggle: F,
}

impl<F> AttentionToggle<F>
where
    F: Fn(&str),
{
    pub fn new(id: impl Into<String>, is_special: bool, on_toggle: F) -> Self {
        Self {
            id: id.into(),
            icon: AttentionIcon::for_flag(is_special),
            on_toggle,
        }
    }

    pub fn icon(&self) -> AttentionIcon {
        self.icon
    }

    /// Handle a click: stop propagation, then notify the caller once
    pub fn click(&self, event: &mut ClickEvent) {
        event.stop_propagation();
        (self.on_toggle)(&self.id);
    }
}

impl<F> std::fmt::Debug for AttentionToggle<F>
where
    F: Fn(&str),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttentionToggle")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}
