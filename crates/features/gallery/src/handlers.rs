use crate::Gallery;
use crate::model::SaveResponse;
use ashy_derive::api_handler;
use ashy_kernel::domain::constants::GALLERY_TAG;
use ashy_kernel::server::{ApiError, ApiResult, ApiState, ErrorBody};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Acknowledges any JSON drawing. Nothing is stored.
#[api_handler(
    post,
    path = "/save-drawing",
    responses(
        (status = OK, description = "Drawing acknowledged", body = SaveResponse),
        (status = BAD_REQUEST, description = "Body is not JSON", body = ErrorBody),
    ),
    tag = GALLERY_TAG,
)]
pub async fn save_handler(
    State(state): State<ApiState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<SaveResponse>> {
    let Json(payload) = payload.map_err(|source| ApiError::MalformedRequest {
        source,
        context: Some("save-drawing".into()),
    })?;
    let gallery = state.try_get_slice::<Gallery>()?;

    match payload.get("strokes").and_then(Value::as_array) {
        Some(strokes) => tracing::debug!(strokes = strokes.len(), "Drawing received"),
        None => tracing::debug!("Drawing received"),
    }

    Ok(Json(gallery.acknowledge()))
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(save_handler))
}
