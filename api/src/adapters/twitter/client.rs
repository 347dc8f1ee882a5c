//! Twitter API client implementation
//!
//! Authenticates with the application-only (client credentials) OAuth2 flow
//! and retrieves user timelines. The bearer token is cached across requests
//! and refreshed transparently; a 401 from the timeline endpoint drops the
//! cache so the next request re-authenticates.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};

use crate::domain::entities::Post;
use crate::domain::ports::TimelineSource;
use crate::error::UpstreamError;

const TOKEN_URL: &str = "https://api.twitter.com/oauth2/token";
const API_BASE_URL: &str = "https://api.twitter.com/1.1";

/// Upstream calls that outlive this are cut off rather than left hanging.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Refresh the cached token this long before it would expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Application credential pair for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

#[derive(Clone)]
struct BearerToken {
    access_token: String,
    /// None when the token endpoint reported no expiry.
    expires_at: Option<Instant>,
}

impl BearerToken {
    fn is_fresh(&self) -> bool {
        match self.expires_at {
            Some(deadline) => Instant::now() + EXPIRY_MARGIN < deadline,
            None => true,
        }
    }
}

/// Timeline source backed by the Twitter v1.1 API
pub struct TwitterTimeline {
    http: Client,
    credentials: Credentials,
    token_url: String,
    base_url: String,
    /// Cached bearer token for the credential pair.
    token: RwLock<Option<BearerToken>>,
    /// Serializes token refreshes so concurrent requests trigger one
    /// exchange instead of a stampede.
    refresh: Mutex<()>,
}

impl TwitterTimeline {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            credentials,
            token_url: TOKEN_URL.to_string(),
            base_url: API_BASE_URL.to_string(),
            token: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Return a valid bearer token, exchanging credentials when the cache is
    /// empty or stale. Requests that lose the refresh race reuse the
    /// winner's token.
    async fn bearer_token(&self) -> Result<String, UpstreamError> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_fresh() {
                return Ok(token.access_token.clone());
            }
        }

        let _refresh = self.refresh.lock().await;

        // Another request may have refreshed while we waited for the lock.
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_fresh() {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.exchange_credentials().await?;
        let access_token = token.access_token.clone();
        *self.token.write().await = Some(token);

        Ok(access_token)
    }

    async fn exchange_credentials(&self) -> Result<BearerToken, UpstreamError> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.credentials.key, Some(&self.credentials.secret))
            .form(&[("grant_type", "client_credentials")])
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UpstreamError::TokenExchange {
                status: status.as_u16(),
                message,
            });
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Deserialization(e.to_string()))?;

        if !body.token_type.eq_ignore_ascii_case("bearer") {
            return Err(UpstreamError::TokenType(body.token_type));
        }

        Ok(BearerToken {
            access_token: body.access_token,
            expires_at: body
                .expires_in
                .map(|secs| Instant::now() + Duration::from_secs(secs)),
        })
    }

    /// Drop the cached token so the next request re-authenticates.
    async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| UpstreamError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            self.invalidate_token().await;
            Err(UpstreamError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(UpstreamError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Response types from the Twitter API
#[derive(Deserialize)]
struct TokenResponse {
    token_type: String,
    access_token: String,
    expires_in: Option<u64>,
}

#[derive(Deserialize)]
struct TweetResponse {
    id_str: String,
    text: String,
    source: String,
    created_at: String,
    in_reply_to_status_id_str: Option<String>,
}

impl From<TweetResponse> for Post {
    fn from(r: TweetResponse) -> Self {
        Post {
            id: r.id_str,
            text: r.text,
            source: r.source,
            created_at: r.created_at,
            is_reply: r.in_reply_to_status_id_str.is_some(),
        }
    }
}

#[async_trait]
impl TimelineSource for TwitterTimeline {
    async fn fetch_timeline(&self, username: &str) -> Result<Vec<Post>, UpstreamError> {
        let token = self.bearer_token().await?;

        let response = self
            .http
            .get(self.api_url("/statuses/user_timeline.json"))
            .query(&[("screen_name", username), ("exclude_replies", "true")])
            .bearer_auth(token)
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await?;

        let tweets: Vec<TweetResponse> = self.handle_response(response).await?;

        Ok(tweets.into_iter().map(Post::from).collect())
    }
}
