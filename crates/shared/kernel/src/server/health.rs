use ashy_derive::{api_handler, api_model};
use ashy_domain::constants::SYSTEM_TAG;
use axum::Json;
use axum::http::{HeaderName, header};
use std::sync::OnceLock;
use std::time::Instant;

type NoCache = [(HeaderName, &'static str); 2];

/// Liveness checks must never see a cached answer.
fn no_cache() -> NoCache {
    [
        (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
        (header::PRAGMA, "no-cache"),
    ]
}

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Starts the uptime clock. Called when the system routes are built.
pub(super) fn mark_started() {
    STARTED.get_or_init(Instant::now);
}

/// Liveness report
#[api_model]
pub(super) struct Health {
    /// `up` whenever the process answers
    status: String,
    /// Server crate version
    version: String,
    /// Seconds since the routes were built
    uptime: u64,
}

impl Health {
    fn now() -> Self {
        let started = *STARTED.get_or_init(Instant::now);
        let uptime = started.elapsed().as_secs();
        Self { status: "up".to_owned(), version: env!("CARGO_PKG_VERSION").to_owned(), uptime }
    }
}

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "The process is serving requests", body = Health)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> (NoCache, Json<Health>) {
    (no_cache(), Json(Health::now()))
}
