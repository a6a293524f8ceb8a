//! Defensively-defaulted shape for paginated listing responses.
//!
//! Table-like consumers bind against one fixed shape regardless of how much
//! of it the server actually sent: `pagination` (the widget cells), a
//! `results` summary, the row `data`, and a `signal` carrying the current
//! page for reactive binding. Every missing piece defaults to an empty or
//! zero value; a missing page defaults to 1.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Pagination widget cells, passed through verbatim. Defaults to `[]`.
    pub pagination: Value,
    pub results: ListingResults,
    /// Row data, passed through verbatim. Defaults to `[]`.
    pub data: Value,
    pub signal: PageSignal,
}

/// Result counters of a listing response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResults {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub from: i64,
    #[serde(default)]
    pub to: i64,
    #[serde(default)]
    pub per_page: i64,
}

/// Current page wrapped in a `{value}` cell for reactive binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSignal {
    pub value: i64,
}

impl Listing {
    /// Builds a listing from an envelope `message`, defaulting every
    /// missing or malformed piece.
    pub fn from_message(message: &Value) -> Listing {
        let results = message
            .get("results")
            .cloned()
            .and_then(|v| serde_json::from_value::<ListingResults>(v).ok())
            .unwrap_or_default();
        let page = if results.page != 0 { results.page } else { 1 };

        Listing {
            pagination: field_or_empty_array(message, "pagination"),
            data: field_or_empty_array(message, "data"),
            results,
            signal: PageSignal { value: page },
        }
    }
}

impl Default for Listing {
    fn default() -> Self {
        Listing::from_message(&Value::Null)
    }
}

fn field_or_empty_array(message: &Value, key: &str) -> Value {
    match message.get(key) {
        Some(Value::Null) | None => Value::Array(Vec::new()),
        Some(value) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_message_maps_through_with_signal_on_current_page() {
        let message = json!({
            "pagination": [{"text": "1", "page": 1, "active": true, "disabled": false}],
            "results": {"total": 10, "page": 2, "from": 6, "to": 10, "perPage": 5},
            "data": [{"id": 1}, {"id": 2}]
        });
        let listing = Listing::from_message(&message);

        assert_eq!(listing.results.total, 10);
        assert_eq!(listing.results.per_page, 5);
        assert_eq!(listing.signal.value, 2);
        assert_eq!(listing.data, message["data"]);
        assert_eq!(listing.pagination, message["pagination"]);
    }

    #[test]
    fn empty_message_defaults_everything() {
        for message in [Value::Null, json!({}), json!("Server error")] {
            let listing = Listing::from_message(&message);
            assert_eq!(listing.pagination, json!([]));
            assert_eq!(listing.data, json!([]));
            assert_eq!(listing.results, ListingResults::default());
            assert_eq!(listing.signal.value, 1);
        }
    }

    #[test]
    fn partial_results_fill_missing_counters_with_zero() {
        let listing = Listing::from_message(&json!({"results": {"total": 3}}));
        assert_eq!(listing.results.total, 3);
        assert_eq!(listing.results.page, 0);
        assert_eq!(listing.results.per_page, 0);
        assert_eq!(listing.signal.value, 1);
    }

    #[test]
    fn page_zero_signals_page_one() {
        let listing = Listing::from_message(&json!({"results": {"page": 0, "total": 1}}));
        assert_eq!(listing.signal.value, 1);

        let listing = Listing::from_message(&json!({"results": {"page": 4}}));
        assert_eq!(listing.signal.value, 4);
    }
}
