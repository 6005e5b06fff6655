//! Dashboard helpers shared by server and clients

use crate::models::{ProductTag, SelectOption};

/// Sentinel value of the synthetic "all" option
pub const ALL_OPTION_VALUE: &str = "ALL";

/// Build selection options from raw labels.
///
/// Index 0 is always `{all_label, all_value}` (`all_value` defaults to
/// [`ALL_OPTION_VALUE`]); every item follows as `{item, item}` in input
/// order. Duplicates are kept; dedupe before calling if needed.
pub fn build_select_options<I>(items: I, all_label: &str, all_value: Option<&str>) -> Vec<SelectOption>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let items = items.into_iter();
    let mut options = Vec::with_capacity(items.size_hint().0 + 1);
    options.push(SelectOption::new(
        all_label,
        all_value.unwrap_or(ALL_OPTION_VALUE),
    ));
    options.extend(items.map(|item| {
        let item = item.as_ref();
        SelectOption::new(item, item)
    }));
    options
}

/// Tags of a product, or an empty list when none were supplied.
///
/// Returns the given slice itself, not a copy.
pub fn map_product_tags(tags: Option<&[ProductTag]>) -> &[ProductTag] {
    tags.unwrap_or(&[])
}
