//! birdfeed API server
//!
//! An HTTP gateway that serves per-username timelines from the upstream
//! social API as RSS feeds. Uses hexagonal (ports & adapters) architecture:
//! handlers depend on the `TimelineSource` port, the Twitter adapter
//! implements it.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::Uri,
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{Credentials, TwitterTimeline};
use config::Config;
use domain::ports::TimelineSource;
use error::handle_panic;

/// Application state shared across all handlers
pub struct AppState<T> {
    pub timeline: Arc<T>,
}

// Not derived: that would bound `T: Clone`.
impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            timeline: Arc::clone(&self.timeline),
        }
    }
}

/// Build the routing table: `/healthcheck` plus one feed route per
/// configured username.
///
/// Duplicate usernames collapse through the path-keyed map before
/// registration, so the last occurrence wins. This keeps the historical
/// last-registration-wins behavior for duplicates without tripping axum's
/// duplicate-route check.
pub fn build_router<T>(state: AppState<T>, usernames: &[String]) -> Router
where
    T: TimelineSource + 'static,
{
    let mut feed_routes = BTreeMap::new();
    for username in usernames {
        feed_routes.insert(format!("/feed/{}.xml", username), username.clone());
    }

    let mut router = Router::new().route("/healthcheck", get(handlers::healthcheck));

    for (path, username) in feed_routes {
        tracing::info!("serving {}", path);
        let handler = move |State(state): State<AppState<T>>, uri: Uri| {
            let username = username.clone();
            async move { handlers::user_feed(state, username, uri).await }
        };
        router = router.route(&path, get(handler));
    }

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,birdfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing credentials or a bad port abort here
    let config = Config::load();

    tracing::info!("Starting birdfeed...");

    let timeline = Arc::new(TwitterTimeline::new(Credentials {
        key: config.consumer_key.clone(),
        secret: config.consumer_secret.clone(),
    }));

    let state = AppState { timeline };
    let app = build_router(state, &config.usernames);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
