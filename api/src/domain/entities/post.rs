//! Upstream post entity

use serde::Serialize;

/// One post fetched from the upstream timeline.
///
/// Read-only and externally sourced; the gateway never persists these.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Stable upstream identifier.
    pub id: String,

    /// Raw body text.
    pub text: String,

    /// Origin/source link of the client the post was made from.
    pub source: String,

    /// Creation timestamp as reported by the upstream API, unparsed.
    /// Parsing is the transformer's concern and is best-effort there.
    pub created_at: String,

    /// Whether the post is a reply to another post. Timelines are fetched
    /// with replies excluded, so this is informational.
    pub is_reply: bool,
}
