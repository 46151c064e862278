// crates/situ-app/src/api.rs
// Browser feed transport (gloo-net)

use async_trait::async_trait;
use situ_core::{FeedResponse, FeedSource, Result, SituError};

/// Fetches feeds from the hosting origin
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFeed;

#[async_trait(?Send)]
impl FeedSource for HttpFeed {
    async fn fetch(&self, url: &str) -> Result<FeedResponse> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| SituError::Transport(format!("{:?}", e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SituError::Transport(format!("{:?}", e)))?;

        Ok(FeedResponse { status, body })
    }
}
