// crates/situ-core/src/feed.rs
// Feed transport abstraction and JSON array decoding

use async_trait::async_trait;
use log::{debug, error};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::{Result, SituError};

/// Raw answer from a feed endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResponse {
    pub status: u16,
    pub body: String,
}

impl FeedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can GET a feed URL
///
/// Futures are not `Send`: the browser implementation holds JS handles.
#[async_trait(?Send)]
pub trait FeedSource {
    async fn fetch(&self, url: &str) -> Result<FeedResponse>;
}

/// Which feed is being decoded, for error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Products,
    Projects,
}

impl FeedKind {
    fn label(self) -> &'static str {
        match self {
            FeedKind::Products => "Product",
            FeedKind::Projects => "Project",
        }
    }

    fn shape_error(self) -> SituError {
        SituError::Shape(format!("{} data is not in the expected format.", self.label()))
    }
}

/// Fetch `url` and decode it as a JSON array of `T`
///
/// Non-success status, a non-array payload, or an entry that is not an
/// object are all load failures.
pub async fn fetch_array<T, S>(source: &S, url: &str, kind: FeedKind) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: FeedSource + ?Sized,
{
    debug!("Fetching {} feed from {}", kind.label(), url);

    let response = source.fetch(url).await?;
    if !response.is_success() {
        return Err(SituError::Network(response.status));
    }

    let payload: serde_json::Value = serde_json::from_str(&response.body)?;
    let entries = match payload {
        serde_json::Value::Array(entries) => entries,
        other => {
            error!("Fetched {} data is not an array: {}", kind.label(), other);
            return Err(kind.shape_error());
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            if !entry.is_object() {
                error!("{} entry {} is not an object: {}", kind.label(), idx, entry);
                return Err(SituError::Shape(format!(
                    "{} data is not in the expected format (entry {}).",
                    kind.label(),
                    idx
                )));
            }
            serde_json::from_value(entry).map_err(SituError::from)
        })
        .collect()
}

/// In-memory feed keyed by URL; unknown URLs answer 404
#[derive(Debug, Clone, Default)]
pub struct StaticFeed {
    responses: HashMap<String, FeedResponse>,
}

impl StaticFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, response: FeedResponse) -> Self {
        self.responses.insert(url.into(), response);
        self
    }

    pub fn with_json(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.with(url, FeedResponse::ok(body))
    }
}

#[async_trait(?Send)]
impl FeedSource for StaticFeed {
    async fn fetch(&self, url: &str) -> Result<FeedResponse> {
        Ok(self.responses.get(url).cloned().unwrap_or(FeedResponse {
            status: 404,
            body: String::new(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use situ_types::ProductRecord;

    #[tokio::test]
    async fn test_fetch_array_decodes_records() {
        let feed = StaticFeed::new().with_json("/p.json", r#"[{"nombre": "A"}, {"nombre": "B"}]"#);
        let records: Vec<ProductRecord> = fetch_array(&feed, "/p.json", FeedKind::Products).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "B");
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let feed = StaticFeed::new();
        let err = fetch_array::<ProductRecord, _>(&feed, "/missing.json", FeedKind::Products)
            .await
            .unwrap_err();
        assert!(matches!(err, SituError::Network(404)));
    }

    #[tokio::test]
    async fn test_object_payload_is_shape_error() {
        let feed = StaticFeed::new().with_json("/p.json", "{}");
        let err = fetch_array::<ProductRecord, _>(&feed, "/p.json", FeedKind::Products)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Product data is not in the expected format.");
    }

    #[tokio::test]
    async fn test_non_object_entry_is_shape_error() {
        let feed = StaticFeed::new().with_json("/p.json", r#"[{"nombre": "A"}, 5]"#);
        let err = fetch_array::<ProductRecord, _>(&feed, "/p.json", FeedKind::Projects)
            .await
            .unwrap_err();
        assert!(matches!(err, SituError::Shape(_)));
        assert!(err.to_string().contains("entry 1"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_json_error() {
        let feed = StaticFeed::new().with_json("/p.json", "[{");
        let err = fetch_array::<ProductRecord, _>(&feed, "/p.json", FeedKind::Products)
            .await
            .unwrap_err();
        assert!(matches!(err, SituError::Json(_)));
    }

    #[test]
    fn test_response_success_range() {
        assert!(FeedResponse::ok("").is_success());
        assert!(FeedResponse { status: 204, body: String::new() }.is_success());
        assert!(!FeedResponse { status: 500, body: String::new() }.is_success());
    }
}
