//! Alert Table Columns
//!
//! Declarative column set plus the per-row render contract:
//! `(record, callback) -> row`.

use serde::{Deserialize, Serialize};
use shared::models::{AlertTableRecord, AlertType, PriceChannel, ProductTag};

use super::format::{Tone, format_currency, format_gap, gap_tone, status_tone};
use super::toggle::{AttentionIcon, AttentionToggle, ClickEvent};

/// Column identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    Product,
    Spec,
    OurPrice,
    JdPrice,
    YjpPrice,
    XsjPrice,
    Gap,
    Status,
    Tags,
    Attention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Column rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub title: &'static str,
    pub align: Align,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
}

const fn column(key: ColumnKey, title: &'static str, align: Align, width: Option<u16>) -> ColumnSpec {
    ColumnSpec {
        key,
        title,
        align,
        width,
    }
}

/// Columns of the price comparison table, in display order
pub const ALERT_COLUMNS: [ColumnSpec; 10] = [
    column(ColumnKey::Product, "商品名称", Align::Left, None),
    column(ColumnKey::Spec, "规格", Align::Left, Some(120)),
    column(ColumnKey::OurPrice, "我方价格", Align::Right, Some(110)),
    column(ColumnKey::JdPrice, PriceChannel::Jd.display_name(), Align::Right, Some(110)),
    column(ColumnKey::YjpPrice, PriceChannel::Yjp.display_name(), Align::Right, Some(110)),
    column(ColumnKey::XsjPrice, PriceChannel::Xsj.display_name(), Align::Right, Some(110)),
    column(ColumnKey::Gap, "价差", Align::Right, Some(100)),
    column(ColumnKey::Status, "状态", Align::Center, Some(110)),
    column(ColumnKey::Tags, "标签", Align::Left, None),
    column(ColumnKey::Attention, "特别关注", Align::Center, Some(90)),
];

/// Text with a visual treatment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneCell {
    pub text: String,
    pub tone: Tone,
    pub color: &'static str,
}

impl ToneCell {
    fn new(text: String, tone: Tone) -> Self {
        Self {
            text,
            tone,
            color: tone.color(),
        }
    }
}

/// Attention column state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttentionCell {
    pub icon: AttentionIcon,
    pub is_special: bool,
}

/// Serializable view of one rendered row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRowView {
    pub id: String,
    pub sku_id: String,
    pub product: String,
    pub spec: String,
    pub our_price: String,
    pub jd_price: String,
    pub yjp_price: String,
    pub xsj_price: String,
    pub gap: ToneCell,
    pub status: ToneCell,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub tags: Vec<ProductTag>,
    pub attention: AttentionCell,
}

impl AlertRowView {
    /// Displayed text of a column; `None` for non-text columns
    pub fn text(&self, key: ColumnKey) -> Option<&str> {
        match key {
            ColumnKey::Product => Some(self.product.as_str()),
            ColumnKey::Spec => Some(self.spec.as_str()),
            ColumnKey::OurPrice => Some(self.our_price.as_str()),
            ColumnKey::JdPrice => Some(self.jd_price.as_str()),
            ColumnKey::YjpPrice => Some(self.yjp_price.as_str()),
            ColumnKey::XsjPrice => Some(self.xsj_price.as_str()),
            ColumnKey::Gap => Some(self.gap.text.as_str()),
            ColumnKey::Status => Some(self.status.text.as_str()),
            ColumnKey::Tags | ColumnKey::Attention => None,
        }
    }
}

/// Render the display cells of a record
pub fn render_view(record: &AlertTableRecord) -> AlertRowView {
    AlertRowView {
        id: record.id.clone(),
        sku_id: record.sku_id.clone(),
        product: record.product.clone(),
        spec: record.spec.clone(),
        our_price: format_currency(Some(record.our_price)),
        jd_price: format_currency(record.channel_price(PriceChannel::Jd)),
        yjp_price: format_currency(record.channel_price(PriceChannel::Yjp)),
        xsj_price: format_currency(record.channel_price(PriceChannel::Xsj)),
        gap: ToneCell::new(format_gap(record.gap), gap_tone(record.gap)),
        status: ToneCell::new(record.category.clone(), status_tone(record.alert_type)),
        alert_type: record.alert_type,
        tags: record.tags.clone(),
        attention: AttentionCell {
            icon: AttentionIcon::for_flag(record.is_special),
            is_special: record.is_special,
        },
    }
}

/// A rendered row with its attention action wired
#[derive(Debug)]
pub struct AlertRow<F>
where
    F: Fn(&str),
{
    pub view: AlertRowView,
    pub toggle: AttentionToggle<F>,
}

impl<F> AlertRow<F>
where
    F: Fn(&str),
{
    /// Click on the attention control, bubbling to `on_row_click` unless stopped
    pub fn click_attention(&self, mut on_row_click: impl FnMut(&str)) {
        let mut event = ClickEvent::new();
        self.toggle.click(&mut event);
        if !event.is_propagation_stopped() {
            on_row_click(&self.view.id);
        }
    }

    /// Click anywhere else on the row
    pub fn click_row(&self, mut on_row_click: impl FnMut(&str)) {
        on_row_click(&self.view.id);
    }
}

/// Map a record and the attention callback to a renderable row
pub fn render_row<F>(record: &AlertTableRecord, on_toggle: F) -> AlertRow<F>
where
    F: Fn(&str),
{
    AlertRow {
        view: render_view(record),
        toggle: AttentionToggle::new(record.id.clone(), record.is_special, on_toggle),
    }
}
