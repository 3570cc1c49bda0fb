use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::groundtrack::{FailureDomain, PlotError};

pub enum ApiError {
    Plot(PlotError),
}

impl From<PlotError> for ApiError {
    fn from(e: PlotError) -> Self {
        ApiError::Plot(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Plot(e) => {
                let domain = e.domain();
                let status = match domain {
                    FailureDomain::Validation => StatusCode::BAD_REQUEST,
                    FailureDomain::Propagation => StatusCode::UNPROCESSABLE_ENTITY,
                    FailureDomain::Rendering => StatusCode::INTERNAL_SERVER_ERROR,
                };
                log::warn!("{} failure: {}", domain, e);
                (
                    status,
                    Json(ErrorResponse::with_message(
                        &format!("{}_failed", domain.as_ref()),
                        &e.to_string(),
                    )),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
