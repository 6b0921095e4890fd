use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::OrchestratorError;
use promptcraft_core::ValidationErrors;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationErrors),
    ServiceUnavailable(String),
    Upstream(String),
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "typescript", ts(type = "Record<string, string[]> | null"))]
    pub field_errors: Option<ValidationErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message, field_errors) = match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                errors.to_string(),
                Some(errors),
            ),
            AppError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg, None)
            }
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "model_error", msg, None),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            field_errors,
        });

        (status, body).into_response()
    }
}

impl From<OrchestratorError> for AppError {
    fn from(err: OrchestratorError) -> Self {
        match err {
            OrchestratorError::Validation(errors) => AppError::Validation(errors),
            OrchestratorError::AntiAbuse(ref inner) => {
                tracing::warn!("Anti-abuse check failed: {:?}", inner);
                let (_, description) = err.user_message();
                AppError::ServiceUnavailable(description)
            }
            OrchestratorError::ModelInvocation(inner) => AppError::Upstream(inner.to_string()),
            other => {
                tracing::error!("Workspace error: {:?}", other);
                AppError::Internal(other.to_string())
            }
        }
    }
}
