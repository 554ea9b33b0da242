//! Normalizes upstream items and computes the lowest-price statistics.

use super::models::{NormalizedItem, PriceRange, RawItem, SearchResult, ShopResponse};
use crate::error::{Result, SearchError};
use regex_lite::Regex;
use std::sync::LazyLock;
use tracing::debug;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Removes every `<...>` tag, e.g. the `<b>` highlighting Naver puts around matches.
pub fn clean_html_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Parses an upstream price string, falling back to 0.
pub fn format_price(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// Converts one upstream item into its normalized form.
pub fn normalize_item(item: RawItem) -> NormalizedItem {
    NormalizedItem {
        title: item.title.as_deref().map(clean_html_tags).unwrap_or_default(),
        lprice: item.lprice.as_deref().map(format_price).unwrap_or(0),
        hprice: item.hprice.as_deref().map(format_price).unwrap_or(0),
        link: item.link.unwrap_or_default(),
        image: item.image.unwrap_or_default(),
        product_id: item.product_id.unwrap_or_default(),
        brand: item.brand.unwrap_or_default(),
        category: item.category.unwrap_or_default(),
        mall_name: item.mall_name.unwrap_or_default(),
    }
}

/// Builds the client payload from an upstream response.
///
/// `lowest_price` and `price_range` cover every upstream item; only `items`
/// is truncated to `display`.
pub fn summarize(query: &str, response: ShopResponse, display: usize) -> Result<SearchResult> {
    if response.items.is_empty() {
        return Err(SearchError::NoResults);
    }

    let mut items: Vec<NormalizedItem> = response.items.into_iter().map(normalize_item).collect();

    // min_by_key keeps the first of equal minimums
    let lowest_price = items
        .iter()
        .min_by_key(|item| item.lprice)
        .cloned()
        .ok_or(SearchError::NoResults)?;

    let price_range = PriceRange::from_prices(items.iter().map(|item| item.lprice));

    debug!(
        "Normalized {} items (lowest {}, range {}-{})",
        items.len(),
        lowest_price.lprice,
        price_range.min,
        price_range.max
    );

    items.truncate(display);

    Ok(SearchResult {
        success: true,
        query: query.to_string(),
        total: response.total,
        items,
        lowest_price,
        price_range,
    })
}
