//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::Post;

/// Create a test post with default values
pub fn test_post(id: &str) -> Post {
    Post {
        id: id.to_string(),
        text: format!("post body {}", id),
        source: "<a href=\"https://example.com/client\">Example Client</a>".to_string(),
        created_at: "Wed Aug 27 13:08:45 +0000 2008".to_string(),
        is_reply: false,
    }
}

/// Create a test post with a specific raw creation timestamp
pub fn test_post_created_at(id: &str, created_at: &str) -> Post {
    Post {
        created_at: created_at.to_string(),
        ..test_post(id)
    }
}
