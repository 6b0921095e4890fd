use axum::extract::State;
use axum::Json;
use promptcraft_core::MIN_IDEA_LENGTH;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Settings the browser needs before rendering the form.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ClientConfigResponse {
    pub anti_abuse_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recaptcha_site_key: Option<String>,
    pub min_idea_length: usize,
}

#[utoipa::path(
    get,
    path = "/api/config",
    responses(
        (status = 200, description = "Client configuration", body = ClientConfigResponse)
    ),
    tag = "config"
)]
pub async fn get_client_config(State(state): State<AppState>) -> Json<ClientConfigResponse> {
    Json(ClientConfigResponse {
        anti_abuse_enabled: state.anti_abuse_enabled(),
        recaptcha_site_key: state.recaptcha_site_key.clone(),
        min_idea_length: MIN_IDEA_LENGTH,
    })
}
