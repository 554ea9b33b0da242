//! Data models for the Naver Shopping API and the normalized search result.

use serde::{Deserialize, Deserializer, Serialize};

/// Upstream response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopResponse {
    /// Total matches reported upstream
    #[serde(default)]
    pub total: u64,
    /// Offset of the first returned item
    #[serde(default)]
    pub start: Option<u64>,
    /// Number of items upstream returned
    #[serde(default)]
    pub display: Option<u64>,
    #[serde(default)]
    pub last_build_date: Option<String>,
    /// Items as returned upstream, cheapest first
    #[serde(default)]
    pub items: Vec<RawItem>,
}

/// A single upstream item before normalization.
///
/// Every field is optional; prices arrive as strings but bare numbers are
/// accepted too.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lprice: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hprice: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mall_name: Option<String>,
}

/// Accepts strings and numbers as text; anything else becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// An upstream item after markup stripping and price coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub title: String,
    pub lprice: u64,
    pub hprice: u64,
    pub link: String,
    pub image: String,
    pub product_id: String,
    pub brand: String,
    pub category: String,
    pub mall_name: String,
}

/// Min/max over strictly positive lowest prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// Computes the range over prices greater than zero, or `{0, 0}` if none are.
    pub fn from_prices(prices: impl IntoIterator<Item = u64>) -> Self {
        prices
            .into_iter()
            .filter(|&p| p > 0)
            .fold(None, |acc: Option<Self>, p| match acc {
                Some(r) => Some(Self { min: r.min.min(p), max: r.max.max(p) }),
                None => Some(Self { min: p, max: p }),
            })
            .unwrap_or_default()
    }

    /// Returns true if no positive price contributed.
    pub fn is_empty(&self) -> bool {
        self.min == 0 && self.max == 0
    }
}

/// Successful search payload returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub success: bool,
    pub query: String,
    pub total: u64,
    pub items: Vec<NormalizedItem>,
    /// Cheapest item of the full upstream page, which may lie beyond `items`
    pub lowest_price: NormalizedItem,
    pub price_range: PriceRange,
}

impl SearchResult {
    /// Returns number of returned items.
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_response_deserialize() {
        let json = r#"{
            "lastBuildDate": "Mon, 01 Jan 2024 00:00:00 +0900",
            "total": 1234,
            "start": 1,
            "display": 2,
            "items": [
                {"title": "<b>Mouse</b>", "lprice": "15000", "hprice": "", "mallName": "Shop",
                 "productId": "123", "category1": "Digital"},
                {"title": "Pad", "lprice": 9900}
            ]
        }"#;

        let response: ShopResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total, 1234);
        assert_eq!(response.display, Some(2));
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].mall_name.as_deref(), Some("Shop"));
        assert_eq!(response.items[0].product_id.as_deref(), Some("123"));
        assert!(response.items[0].category.is_none());
        assert_eq!(response.items[1].lprice.as_deref(), Some("9900"));
        assert!(response.items[1].link.is_none());
    }

    #[test]
    fn test_shop_response_missing_items() {
        let response: ShopResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(response.items.is_empty());

        let response: ShopResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.total, 0);
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_raw_item_null_and_odd_types() {
        let item: RawItem =
            serde_json::from_str(r#"{"title": null, "lprice": true, "brand": ["x"]}"#).unwrap();
        assert!(item.title.is_none());
        assert!(item.lprice.is_none());
        assert!(item.brand.is_none());
    }

    #[test]
    fn test_price_range_excludes_zero() {
        let range = PriceRange::from_prices([500, 0, 300]);
        assert_eq!(range, PriceRange { min: 300, max: 500 });
        assert!(!range.is_empty());
    }

    #[test]
    fn test_price_range_all_zero() {
        let range = PriceRange::from_prices([0, 0]);
        assert_eq!(range, PriceRange { min: 0, max: 0 });
        assert!(range.is_empty());

        assert!(PriceRange::from_prices(Vec::new()).is_empty());
    }

    #[test]
    fn test_price_range_single() {
        assert_eq!(PriceRange::from_prices([42]), PriceRange { min: 42, max: 42 });
    }

    #[test]
    fn test_search_result_serializes_camel_case() {
        let item = NormalizedItem {
            title: "Mouse".to_string(),
            lprice: 100,
            product_id: "p1".to_string(),
            mall_name: "Shop".to_string(),
            ..Default::default()
        };
        let result = SearchResult {
            success: true,
            query: "mouse".to_string(),
            total: 1,
            items: vec![item.clone()],
            lowest_price: item,
            price_range: PriceRange { min: 100, max: 100 },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["lowestPrice"]["productId"], "p1");
        assert_eq!(json["items"][0]["mallName"], "Shop");
        assert_eq!(json["priceRange"]["min"], 100);
        assert_eq!(result.count(), 1);
    }
}
