//! Feed handler
//!
//! One instance of this handler is registered per configured username; the
//! username is bound at router construction time, not taken from the path.

use axum::{
    http::{header, Uri},
    response::{IntoResponse, Response},
};

use crate::domain::ports::TimelineSource;
use crate::error::AppError;
use crate::feed::{build_feed, render_rss};
use crate::AppState;

/// GET /feed/{username}.xml
///
/// Fetches the bound username's timeline (replies excluded), builds the
/// normalized feed with the literal request path as its self link, and
/// renders RSS. Any fetch or render failure becomes the uniform error
/// envelope via `AppError`.
pub async fn user_feed<T: TimelineSource>(
    state: AppState<T>,
    username: String,
    uri: Uri,
) -> Result<Response, AppError> {
    let posts = state.timeline.fetch_timeline(&username).await?;

    let feed = build_feed(&username, uri.path(), posts);
    let body = render_rss(&feed)?;

    Ok(([(header::CONTENT_TYPE, "application/rss+xml")], body).into_response())
}
