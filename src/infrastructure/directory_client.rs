use async_trait::async_trait;

use crate::feed::errors::{FeedError, FeedResult};
use crate::feed::source::{PlayerPage, PlayerSource};

/// Public player directory queried when no override is configured.
pub const DEFAULT_PLAYERS_API_URL: &str = "https://api.balldontlie.io/v1/players";

/// One raw upstream reply: the status code and the unparsed body.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client for the external player directory
///
/// Holds the base URL and the injected credential; one instance is built at
/// startup and shared. Issues exactly one request per call, with no retry
/// and no caching. The credential header is sent even when empty, leaving the
/// upstream's own error behavior to govern unauthenticated calls.
#[derive(Debug, Clone)]
pub struct PlayerDirectoryClient {
    http: reqwest::Client,
    base_url: String,
    credential: Option<String>,
}

impl PlayerDirectoryClient {
    /// Creates a client for the given directory URL
    ///
    /// # Arguments
    /// * `base_url` - Full URL of the players listing endpoint
    /// * `credential` - Secret injected as the `Authorization` header
    pub fn new(
        base_url: impl Into<String>,
        credential: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url: base_url.into(),
            credential,
        })
    }

    /// Fetches one page and returns the reply verbatim
    ///
    /// Used by the proxy route, which relays the body without parsing it.
    pub async fn fetch_raw(
        &self,
        search: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> Result<UpstreamReply, reqwest::Error> {
        let mut request = self
            .http
            .get(&self.base_url)
            .header("Content-Type", "application/json")
            .header("Authorization", self.credential.as_deref().unwrap_or(""))
            .query(&[("page", page), ("per_page", per_page)]);

        if let Some(search) = search {
            request = request.query(&[("search", search)]);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(UpstreamReply { status, body })
    }
}

#[async_trait]
impl PlayerSource for PlayerDirectoryClient {
    async fn fetch_page(
        &self,
        search: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> FeedResult<PlayerPage> {
        let reply = self
            .fetch_raw(search, page, per_page)
            .await
            .map_err(|e| FeedError::Fetch(e.to_string()))?;

        if reply.status == 429 {
            return Err(FeedError::RateLimited);
        }
        if !reply.is_success() {
            return Err(FeedError::Fetch(format!(
                "directory returned status {}",
                reply.status
            )));
        }

        serde_json::from_slice(&reply.body)
            .map_err(|e| FeedError::Fetch(format!("invalid directory payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_success_bounds() {
        assert!(UpstreamReply { status: 200, body: vec![] }.is_success());
        assert!(UpstreamReply { status: 299, body: vec![] }.is_success());
        assert!(!UpstreamReply { status: 300, body: vec![] }.is_success());
        assert!(!UpstreamReply { status: 429, body: vec![] }.is_success());
        assert!(!UpstreamReply { status: 500, body: vec![] }.is_success());
    }
}
