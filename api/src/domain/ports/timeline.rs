//! Timeline source port trait

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::error::UpstreamError;

/// Interface to an upstream timeline provider.
///
/// Implementations fetch a single user's recent posts in upstream order
/// (newest first) with replies excluded. No state is retained between
/// calls beyond whatever connection pooling the implementation performs.
#[async_trait]
pub trait TimelineSource: Send + Sync {
    async fn fetch_timeline(&self, username: &str) -> Result<Vec<Post>, UpstreamError>;
}
