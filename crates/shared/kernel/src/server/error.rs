use super::state::ApiStateError;
use ashy_derive::api_model;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;

/// Failure envelope returned by every JSON endpoint.
#[api_model]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Human readable reason
    pub error: String,
}

/// Errors that reach the HTTP boundary.
#[ashy_derive::ashy_error]
pub enum ApiError {
    /// The body is not JSON, is empty, or was sent with the wrong content type.
    #[error("Malformed request{}: {source}", format_context(.context))]
    MalformedRequest { source: JsonRejection, context: Option<Cow<'static, str>> },

    #[error("Internal server error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Body rejections are `400`, except oversized bodies which keep `413`.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest { source, .. } => match source.status() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            },
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        Self::Internal { message: err.to_string().into(), context: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, Json(ErrorBody { success: false, error: self.to_string() })).into_response()
    }
}
