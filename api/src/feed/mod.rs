//! Feed model and transformation
//!
//! Maps an upstream timeline into the normalized feed model the renderer
//! serializes. Transformation is pure: no I/O and no error path.

pub mod renderer;

pub use renderer::render_rss;

use chrono::{DateTime, Utc};

use crate::domain::entities::Post;

/// Upstream timestamp format, e.g. `Wed Aug 27 13:08:45 +0000 2008`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Static label identifying this service as the feed author.
const FEED_AUTHOR: &str = "birdfeed";

/// A normalized feed ready for rendering
#[derive(Debug, Clone)]
pub struct Feed {
    pub title: String,

    /// Self-referential link: the literal path the feed was requested at.
    pub link: String,

    pub description: String,

    pub author: String,

    /// Wall-clock time the feed was assembled.
    pub created: DateTime<Utc>,

    /// Items in upstream timeline order, newest first. Always a sequence,
    /// possibly empty, never absent.
    pub items: Vec<FeedItem>,
}

/// A single feed entry projected from an upstream post
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub id: String,

    /// The post id doubles as the title; the upstream has no separate
    /// human-readable title field.
    pub title: String,

    /// The post's origin/source link, not its canonical permalink.
    pub link: String,

    /// Raw post body text, verbatim.
    pub description: String,

    /// None when the upstream timestamp could not be parsed; the post is
    /// kept either way.
    pub created: Option<DateTime<Utc>>,
}

/// Build a feed for `username` from its fetched timeline.
///
/// Item order is preserved from the upstream sequence; nothing is sorted,
/// de-duplicated, or dropped.
pub fn build_feed(username: &str, request_path: &str, posts: Vec<Post>) -> Feed {
    let items = posts
        .into_iter()
        .map(|post| FeedItem {
            created: parse_created_at(&post.created_at),
            title: post.id.clone(),
            id: post.id,
            link: post.source,
            description: post.text,
        })
        .collect();

    Feed {
        title: format!("{} tweets", username),
        link: request_path.to_string(),
        description: format!("{} tweets", username),
        author: FEED_AUTHOR.to_string(),
        created: Utc::now(),
        items,
    }
}

fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, CREATED_AT_FORMAT)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
