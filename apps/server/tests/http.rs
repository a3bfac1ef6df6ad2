use ashy::domain::config::ApiConfig;
use ashy_server::Server;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(cfg: ApiConfig) -> Router {
    Server::builder().config(cfg).build().expect("server builds").router()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn post_json(path: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(path).header(header::CONTENT_TYPE, "application/json").body(body.into()).unwrap()
}

#[tokio::test]
async fn analyze_colorful_drawing() {
    let strokes: Vec<_> =
        (0..60).map(|i| json!({ "x": i, "y": i, "color": "#f00", "size": 4 })).collect();
    let body = json!({
        "strokes": strokes,
        "colors": ["#f00", "#0f0", "#00f", "#ff0", "#f0f"],
        "timestamp": "2024-05-01T10:00:00Z"
    });

    let request = post_json("/analyze", body.to_string());
    let (status, bytes) = send(app(ApiConfig::default()), request).await;
    let value: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], true);
    let message = value["feedback"]["message"].as_str().unwrap();
    assert!(ashy::features::feedback::COLORFUL_MESSAGES.contains(&message));
    assert_eq!(value["feedback"]["session_count"], 1);
}

#[tokio::test]
async fn save_drawing_is_acknowledged() {
    let (status, bytes) =
        send(app(ApiConfig::default()), post_json("/save-drawing", r#"{"strokes":[]}"#)).await;
    let value: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({ "success": true, "message": "Your artwork has been saved! 🎨" }));
}

#[tokio::test]
async fn non_json_bodies_are_rejected() {
    for path in ["/analyze", "/save-drawing"] {
        let (status, bytes) = send(app(ApiConfig::default()), post_json(path, "strokes=1")).await;
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(value["success"], false);
    }
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let mut cfg = ApiConfig::default();
    cfg.server.body_limit = 64;
    let body = json!({ "strokes": vec![1; 100] }).to_string();

    let (status, _) = send(app(cfg), post_json("/analyze", body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn health_reports_up() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, bytes) = send(app(ApiConfig::default()), request).await;
    let value: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], "up");
}

#[tokio::test]
async fn static_dir_serves_canvas_page() {
    let dir = tempfile::tempdir().unwrap();
    let page = "<canvas id=\"drawingCanvas\"></canvas>";
    std::fs::write(dir.path().join("index.html"), page).unwrap();
    let mut cfg = ApiConfig::default();
    cfg.storage.static_dir = Some(dir.path().to_path_buf());

    let (status, bytes) = send(app(cfg), Request::get("/").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(bytes).unwrap().contains("drawingCanvas"));
}

#[tokio::test]
async fn unknown_path_without_static_dir_is_not_found() {
    let request = Request::get("/index.html").body(Body::empty()).unwrap();
    let (status, _) = send(app(ApiConfig::default()), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn missing_static_dir_is_ignored() {
    let mut cfg = ApiConfig::default();
    cfg.storage.static_dir = Some("/definitely/not/here".into());

    let server = Server::builder().config(cfg).build().expect("server builds");
    assert!(server.state().config.storage.static_dir.is_none());
}

#[test]
fn missing_ssl_files_fail_the_build() {
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(ashy::domain::config::SslConfig {
        cert: "/definitely/not/cert.pem".into(),
        key: "/definitely/not/key.pem".into(),
    });

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}

#[test]
fn blank_feedback_entry_fails_the_build() {
    let mut cfg = ApiConfig::default();
    cfg.feedback.tips = vec![" ".to_owned()];

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("Platform bootstrap failed"));
}
