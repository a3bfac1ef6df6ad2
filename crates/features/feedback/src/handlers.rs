use crate::Feedback;
use crate::model::{AnalyzeResponse, DrawingPayload};
use ashy_derive::api_handler;
use ashy_kernel::domain::constants::FEEDBACK_TAG;
use ashy_kernel::server::{ApiError, ApiResult, ApiState, ErrorBody};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_handler(
    post,
    path = "/analyze",
    request_body = DrawingPayload,
    responses(
        (status = OK, description = "Encouraging feedback for the drawing", body = AnalyzeResponse),
        (status = BAD_REQUEST, description = "Body is not JSON", body = ErrorBody),
    ),
    tag = FEEDBACK_TAG,
)]
pub async fn analyze_handler(
    State(state): State<ApiState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let Json(payload) = payload.map_err(|source| ApiError::MalformedRequest {
        source,
        context: Some("analyze".into()),
    })?;
    let feedback = state.try_get_slice::<Feedback>()?;

    let result = feedback.classifier.analyze(&payload, &mut rand::rng());

    Ok(Json(result.into()))
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(analyze_handler))
}
