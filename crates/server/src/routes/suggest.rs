use axum::extract::State;
use axum::Json;
use promptcraft_core::{ParameterSuggestion, SuggestionRequest};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SuggestRequestBody {
    #[serde(default)]
    pub basic_prompt: String,
    /// reCAPTCHA v3 token for action `suggest_parameters`
    #[serde(default)]
    pub anti_abuse_token: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/suggest-parameters",
    request_body = SuggestRequestBody,
    responses(
        (status = 200, description = "Suggested parameters", body = ParameterSuggestion),
        (status = 422, description = "Invalid form input", body = ErrorResponse),
        (status = 502, description = "Model invocation failed", body = ErrorResponse),
        (status = 503, description = "Anti-abuse verification failed", body = ErrorResponse)
    ),
    tag = "refine"
)]
pub async fn suggest_parameters(
    State(state): State<AppState>,
    Json(payload): Json<SuggestRequestBody>,
) -> Result<Json<ParameterSuggestion>, AppError> {
    let tokens = state.token_source(payload.anti_abuse_token);
    let (mut workspace, _) = state.workspace();

    let suggestion = workspace
        .suggest(SuggestionRequest::new(payload.basic_prompt), tokens.as_ref())
        .await?;

    Ok(Json(suggestion))
}
