//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured per test.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::domain::ports::TimelineSource;
use crate::error::UpstreamError;

/// In-memory timeline source with canned posts per username.
#[derive(Default)]
pub struct MockTimeline {
    timelines: HashMap<String, Vec<Post>>,
    fail: bool,
    panic: bool,
}

impl MockTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a username's timeline
    pub fn with_timeline(mut self, username: &str, posts: Vec<Post>) -> Self {
        self.timelines.insert(username.to_string(), posts);
        self
    }

    /// Make every fetch fail, simulating an unreachable upstream
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Make every fetch panic, simulating a programming error in a handler
    pub fn panicking(mut self) -> Self {
        self.panic = true;
        self
    }
}

#[async_trait]
impl TimelineSource for MockTimeline {
    async fn fetch_timeline(&self, username: &str) -> Result<Vec<Post>, UpstreamError> {
        if self.panic {
            panic!("mock timeline panic");
        }

        if self.fail {
            return Err(UpstreamError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            });
        }

        Ok(self.timelines.get(username).cloned().unwrap_or_default())
    }
}
