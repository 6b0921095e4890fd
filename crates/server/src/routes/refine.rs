use axum::extract::State;
use axum::Json;
use orchestrator::Notification;
use promptcraft_core::RefinementRequest;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RefineRequestBody {
    #[serde(default)]
    pub idea_text: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    /// reCAPTCHA v3 token for action `refine_prompt`
    #[serde(default)]
    pub anti_abuse_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RefineResponse {
    pub refined_prompt: String,
    pub notifications: Vec<Notification>,
}

#[utoipa::path(
    post,
    path = "/api/refine",
    request_body = RefineRequestBody,
    responses(
        (status = 200, description = "Prompt refined", body = RefineResponse),
        (status = 422, description = "Invalid form input", body = ErrorResponse),
        (status = 502, description = "Model invocation failed", body = ErrorResponse),
        (status = 503, description = "Anti-abuse verification failed", body = ErrorResponse)
    ),
    tag = "refine"
)]
pub async fn refine_prompt(
    State(state): State<AppState>,
    Json(payload): Json<RefineRequestBody>,
) -> Result<Json<RefineResponse>, AppError> {
    let RefineRequestBody {
        idea_text,
        style,
        length,
        tone,
        anti_abuse_token,
    } = payload;

    let request = RefinementRequest {
        idea_text,
        style,
        length,
        tone,
    };
    let tokens = state.token_source(anti_abuse_token);
    let (mut workspace, notifier) = state.workspace();

    let refined_prompt = workspace.submit(request, tokens.as_ref()).await?;
    info!("Refined prompt returned to client");

    Ok(Json(RefineResponse {
        refined_prompt,
        notifications: notifier.take(),
    }))
}
