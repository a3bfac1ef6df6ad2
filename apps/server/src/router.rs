use ashy::kernel::prelude::ApiState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "ASHY", description = "Encouraging feedback for therapeutic drawings"),
    tags(
        (name = "Feedback", description = "Drawing analysis"),
        (name = "Gallery", description = "Saving drawings"),
        (name = "System", description = "Service health"),
    )
)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let body_limit = state.config.server.body_limit;
    let static_dir = state.config.storage.static_dir.clone();

    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(ashy::server::router::system_router())
        .merge(ashy::server::router::api_router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    let app = Router::new().merge(openapi_routes).merge(scalar_routes);

    // Canvas page and its assets; API routes take precedence.
    match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    }
}
