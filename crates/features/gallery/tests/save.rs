use ashy_gallery::{Gallery, GalleryError, GalleryInner, SAVED_MESSAGE, init};
use ashy_kernel::domain::config::ApiConfig;

#[test]
fn init_registers_gallery_slice() {
    let slice = init(&ApiConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Gallery>());
    assert_eq!(slice.name(), "Gallery");
}

#[test]
fn save_response_wire_format() {
    let gallery = GalleryInner { saved_message: SAVED_MESSAGE.to_owned() };
    let value = serde_json::to_value(gallery.acknowledge()).unwrap();
    assert_eq!(value, serde_json::json!({ "success": true, "message": SAVED_MESSAGE }));
}

#[test]
fn blank_saved_message_is_rejected() {
    let mut config = ApiConfig::default();
    config.gallery.saved_message = Some("   ".to_owned());

    let err = init(&config).unwrap_err();
    assert!(matches!(err, GalleryError::Config { .. }));
    assert_eq!(err.to_string(), "Gallery config error: `gallery.saved_message` is blank");
}

#[cfg(feature = "server")]
mod http {
    use super::*;
    use ashy_kernel::server::ApiState;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app(config: ApiConfig) -> Router {
        let slice = init(&config).expect("gallery init");
        let state =
            ApiState::builder().config(config).register_slice(slice).build().expect("state");
        let (router, _) = ashy_gallery::router().split_for_parts();
        router.with_state(state)
    }

    async fn post(app: Router, body: &'static str) -> (StatusCode, Value) {
        let request = Request::post("/save-drawing")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn any_json_is_acknowledged() {
        for body in [r##"{"strokes": [{"x": 1}], "colors": ["#000"]}"##, "[]", "42", "null"] {
            let (status, value) = post(app(ApiConfig::default()), body).await;
            assert_eq!(status, StatusCode::OK, "{body}");
            assert_eq!(value["success"], true);
            assert_eq!(value["message"], SAVED_MESSAGE);
        }
    }

    #[tokio::test]
    async fn configured_message_is_returned() {
        let mut config = ApiConfig::default();
        config.gallery.saved_message = Some(" Saved to your sketchbook! ".to_owned());

        let (status, value) = post(app(config), "{}").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["message"], "Saved to your sketchbook!");
    }

    #[tokio::test]
    async fn invalid_json_is_rejected() {
        let (status, value) = post(app(ApiConfig::default()), "{\"strokes\": [").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["success"], false);
    }

    #[tokio::test]
    async fn unregistered_slice_is_internal_error() {
        let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");
        let (router, _) = ashy_gallery::router().split_for_parts();

        let (status, value) = post(router.with_state(state), "{}").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(value["success"], false);
    }
}
