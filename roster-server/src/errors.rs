use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::RosterError;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("{0}")]
    Roster(#[from] RosterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Status=400, BadRequest: {0}")]
    BadRequest(String),

    #[error("Status=415, UnsupportedMediaType: {0}")]
    UnsupportedMediaType(String),

    #[error("Status=422, UnprocessableEntity: {0}")]
    UnprocessableEntity(String),

    #[error("Status=500, InternalServerError: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_message(self) -> String {
        match self {
            ApiError::BadRequest(message)
            | ApiError::UnsupportedMediaType(message)
            | ApiError::UnprocessableEntity(message)
            | ApiError::Internal(message) => message,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::UnprocessableEntity(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::BadRequest(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => {
                ApiError::UnsupportedMediaType(e.body_text())
            }
            other => ApiError::bad_request(other.body_text()),
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("{}", self);
        let status = self.status();
        let message = self.into_message();
        (status, axum::Json(ErrorResponse { message })).into_response()
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::ApiError(e) => e.into_response(),
            other => {
                tracing::error!(%other, "unexpected server error");
                ApiError::internal("Unexpected Error").into_response()
            }
        }
    }
}
