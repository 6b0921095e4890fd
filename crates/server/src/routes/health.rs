use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness report served at `/health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is accepting requests
    status: &'static str,
    /// Version of the Promptcraft server crate
    version: &'static str,
}

/// Liveness check. Never touches the model client or the verifier, so it
/// stays green even when OpenRouter is unreachable.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
