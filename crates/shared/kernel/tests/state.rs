#![cfg(feature = "server")]

use ashy_kernel::prelude::*;
use ashy_kernel::server::ApiStateError;
use ashy_kernel::server::router::system_router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

#[ashy_derive::ashy_slice]
pub struct Sketchbook {
    pub pages: usize,
}

#[ashy_derive::ashy_slice]
pub struct Easel {}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn slices_are_found_by_type() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(Sketchbook::new(SketchbookInner { pages: 12 })))
        .build()
        .expect("state builds");

    assert_eq!(state.get_slice::<Sketchbook>().map(|s| s.pages), Some(12));
    assert!(state.get_slice::<Easel>().is_none());
    assert_eq!(state.slice_names().collect::<Vec<_>>(), ["Sketchbook"]);

    let err = state.try_get_slice::<Easel>().expect_err("easel is not registered");
    assert!(err.to_string().contains("Easel"));
}

#[test]
fn register_slices_accepts_iterators() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slices([
            InitializedSlice::new(Easel::new(EaselInner {})),
            InitializedSlice::new(Sketchbook::new(SketchbookInner { pages: 1 })),
        ])
        .build()
        .expect("state builds");

    let mut names = state.slice_names().collect::<Vec<_>>();
    names.sort_unstable();
    assert_eq!(names, ["Easel", "Sketchbook"]);
}

#[tokio::test]
async fn health_endpoint_reports_up() {
    let (router, api) = system_router::<()>().split_for_parts();

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::PRAGMA], "no-cache");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["status"], "up");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime"].is_u64());
    assert!(api.paths.paths.contains_key("/health"));
}
